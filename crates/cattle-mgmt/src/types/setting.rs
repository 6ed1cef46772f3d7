//! Server settings.

use std::collections::BTreeMap;

resource! {
    /// A named server setting. `value` overrides `default` when set.
    pub struct Setting = "setting" {
        ANNOTATIONS => annotations: BTreeMap<String, String> = "annotations",
        CREATED => created: String = "created",
        CREATOR_ID => creator_id: String = "creatorId",
        CUSTOMIZED => customized: bool = "customized",
        DEFAULT => default: String = "default",
        LABELS => labels: BTreeMap<String, String> = "labels",
        NAME => name: String = "name",
        REMOVED => removed: String = "removed",
        SOURCE => source: String = "source",
        UUID => uuid: String = "uuid",
        VALUE => value: String = "value",
    }
}

impl Setting {
    /// The value in effect: `value` if non-empty, else `default`.
    pub fn effective_value(&self) -> Option<&str> {
        self.value
            .as_deref()
            .filter(|v| !v.is_empty())
            .or(self.default.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_value_prefers_override() {
        let setting = Setting {
            value: Some("v2.9".into()),
            default: Some("v2.8".into()),
            ..Setting::default()
        };
        assert_eq!(setting.effective_value(), Some("v2.9"));
    }

    #[test]
    fn empty_override_falls_back_to_default() {
        let setting = Setting {
            value: Some(String::new()),
            default: Some("true".into()),
            ..Setting::default()
        };
        assert_eq!(setting.effective_value(), Some("true"));
    }
}
