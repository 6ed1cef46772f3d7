//! Declarations for wire types.
//!
//! Each field is declared once as `CONST => field: Type = "wireKey"`. The
//! wire key becomes both the serde rename and the associated constant, and
//! the list of keys becomes [`Schema::FIELDS`](cattle_core::Schema::FIELDS).
//! Every field is optional and omitted from JSON when unset.

/// Declare a server resource: the fields plus the embedded
/// [`ResourceBase`](cattle_core::ResourceBase).
macro_rules! resource {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $wire:literal {
            $(
                $(#[$fmeta:meta])*
                $konst:ident => $field:ident : $ty:ty = $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            #[serde(flatten)]
            pub base: ::cattle_core::ResourceBase,
            $(
                $(#[$fmeta])*
                #[serde(rename = $key, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            $(
                pub const $konst: &'static str = $key;
            )*
        }

        impl ::cattle_core::Schema for $name {
            const TYPE: &'static str = $wire;
            const FIELDS: &'static [&'static str] = &[$($key),*];
        }

        impl ::cattle_core::Resource for $name {
            fn base(&self) -> &::cattle_core::ResourceBase {
                &self.base
            }
        }

        #[cfg(test)]
        impl $name {
            /// A value with every field set.
            pub(crate) fn populated() -> Self {
                Self {
                    base: ::cattle_core::ResourceBase::default(),
                    $( $field: Some(Default::default()), )*
                }
            }
        }
    };
}

/// Declare a plain wire type, such as an action input or output.
macro_rules! schema {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $wire:literal {
            $(
                $(#[$fmeta:meta])*
                $konst:ident => $field:ident : $ty:ty = $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $key, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            $(
                pub const $konst: &'static str = $key;
            )*
        }

        impl ::cattle_core::Schema for $name {
            const TYPE: &'static str = $wire;
            const FIELDS: &'static [&'static str] = &[$($key),*];
        }

        #[cfg(test)]
        impl $name {
            /// A value with every field set.
            pub(crate) fn populated() -> Self {
                Self {
                    $( $field: Some(Default::default()), )*
                }
            }
        }
    };
}
