//! LuaDNS API v1 payloads

use serde::{Deserialize, Serialize};

/// A zone as listed by `GET /zones`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuaDnsZone {
    pub id: u64,
    pub name: String,
}

/// A record as stored by LuaDNS
///
/// `name` is fully qualified without the trailing dot. `id` and `zone_id`
/// are zero for records that have not been created yet and are then left
/// out of request bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuaDnsRecord {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub zone_id: u64,
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}
