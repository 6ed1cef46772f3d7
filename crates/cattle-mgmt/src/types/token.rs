//! API tokens.

use std::collections::BTreeMap;

use serde_json::Value;

resource! {
    /// An API or login token. `token` is only populated in the response to
    /// create.
    pub struct Token = "token" {
        ANNOTATIONS => annotations: BTreeMap<String, String> = "annotations",
        AUTH_PROVIDER => auth_provider: String = "authProvider",
        CLUSTER_ID => cluster_id: String = "clusterId",
        CREATED => created: String = "created",
        CREATOR_ID => creator_id: String = "creatorId",
        CURRENT => current: bool = "current",
        DESCRIPTION => description: String = "description",
        ENABLED => enabled: bool = "enabled",
        EXPIRED => expired: bool = "expired",
        EXPIRES_AT => expires_at: String = "expiresAt",
        IS_DERIVED => is_derived: bool = "isDerived",
        LABELS => labels: BTreeMap<String, String> = "labels",
        LAST_UPDATE_TIME => last_update_time: String = "lastUpdateTime",
        NAME => name: String = "name",
        REMOVED => removed: String = "removed",
        TOKEN => token: String = "token",
        TTL_MILLIS => ttl_millis: i64 = "ttl",
        USER_ID => user_id: String = "userId",
        USER_PRINCIPAL => user_principal: Value = "userPrincipal",
        UUID => uuid: String = "uuid",
    }
}
