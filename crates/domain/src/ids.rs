use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_key {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Session and case keys (prefixed UUID suffix)
define_key!(SessionId);
define_key!(CaseId);

// Catalog keys (human-readable slugs)
define_key!(CityId);
define_key!(NpcId);
define_key!(SuspectId);

/// Group lengths of the UUID-shaped suffix after the `sess-` prefix.
const SESSION_SUFFIX_GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

impl SessionId {
    /// Mint a fresh session id from an injected UUID.
    pub fn generate(uuid: Uuid) -> Self {
        Self(format!("sess-{uuid}"))
    }

    /// Check the `sess-` + 8-4-4-4-12 alphanumeric shape.
    pub fn is_valid_format(value: &str) -> bool {
        let Some(suffix) = value.strip_prefix("sess-") else {
            return false;
        };
        let groups: Vec<&str> = suffix.split('-').collect();
        groups.len() == SESSION_SUFFIX_GROUPS.len()
            && groups
                .iter()
                .zip(SESSION_SUFFIX_GROUPS)
                .all(|(group, len)| {
                    group.len() == len && group.chars().all(|c| c.is_ascii_alphanumeric())
                })
    }
}

impl CaseId {
    /// Mint a fresh case id from an injected UUID.
    pub fn generate(uuid: Uuid) -> Self {
        Self(format!("case-{uuid}"))
    }
}
