// # Generic DNS Record
//
// The provider-agnostic record representation exchanged with callers.
// Names are relative to the zone the operation targets; the zone apex is
// written as `@` (an empty name is accepted as the apex too).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Relative name denoting the zone apex
pub const APEX: &str = "@";

/// A DNS record, relative to a zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Provider-assigned identifier (opaque, empty when not yet created)
    #[serde(default)]
    pub id: String,

    /// Record type (A, AAAA, CNAME, TXT, ...)
    #[serde(rename = "type")]
    pub record_type: String,

    /// Name relative to the zone, or `@` for the apex
    pub name: String,

    /// Record data in presentation format
    pub value: String,

    /// Time-to-live, serialized as whole seconds
    #[serde(with = "ttl_secs", default)]
    pub ttl: Duration,
}

impl Record {
    /// Create a record without a provider ID
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        value: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            id: String::new(),
            record_type: record_type.into(),
            name: name.into(),
            value: value.into(),
            ttl,
        }
    }

    /// Set the provider ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Whether this record sits at the zone apex
    pub fn is_apex(&self) -> bool {
        self.name.is_empty() || self.name == APEX
    }
}

mod ttl_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(ttl: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(ttl.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
