// # Record Translation
//
// Converts between zone-relative `Record`s and LuaDNS's fully-qualified
// records. Pure functions: no I/O, no shared state.
//
// Zone names are accepted with or without the trailing dot.

use crate::types::LuaDnsRecord;
use libdns_core::record::{APEX, Record};
use std::time::Duration;

/// TTL applied when a record's TTL is shorter than one second
pub const DEFAULT_TTL_SECS: u32 = 3600;

/// Strip exactly one trailing dot from a zone or record name
pub(crate) fn normalize_zone(zone: &str) -> &str {
    zone.strip_suffix('.').unwrap_or(zone)
}

/// Convert a LuaDNS record into a zone-relative record
///
/// A record named after the zone itself becomes the apex (`@`).
pub fn to_generic(record: &LuaDnsRecord, zone: &str) -> Record {
    let zone = normalize_zone(zone);
    let fqdn = normalize_zone(&record.name);

    let name = if fqdn == zone {
        APEX
    } else {
        let relative = fqdn
            .strip_suffix(zone)
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(fqdn);
        relative.strip_suffix('.').unwrap_or(relative)
    };

    Record {
        id: record.id.to_string(),
        record_type: record.record_type.clone(),
        name: name.to_string(),
        value: record.content.clone(),
        ttl: Duration::from_secs(u64::from(record.ttl)),
    }
}

/// Convert a zone-relative record into a LuaDNS record body
///
/// Names ending in a dot are already absolute. TTLs that truncate to zero
/// whole seconds become [`DEFAULT_TTL_SECS`], so a zero TTL cannot be
/// expressed.
pub fn to_vendor(record: &Record, zone: &str) -> LuaDnsRecord {
    let zone = normalize_zone(zone);

    let fqdn = if record.is_apex() {
        zone.to_string()
    } else if let Some(absolute) = record.name.strip_suffix('.') {
        absolute.to_string()
    } else {
        format!("{}.{}", record.name, zone)
    };
    let name = normalize_zone(&fqdn).to_string();

    let ttl = match record.ttl.as_secs() {
        0 => DEFAULT_TTL_SECS,
        secs => u32::try_from(secs).unwrap_or(u32::MAX),
    };

    LuaDnsRecord {
        name,
        record_type: record.record_type.clone(),
        content: record.value.clone(),
        ttl,
        ..Default::default()
    }
}

/// Whether `existing` occupies the same (name, type) slot as `record`
///
/// Value and TTL are not compared.
pub fn matches(existing: &LuaDnsRecord, record: &Record, zone: &str) -> bool {
    let wanted = to_vendor(record, zone);
    normalize_zone(&existing.name) == wanted.name && existing.record_type == wanted.record_type
}

/// First record in listing order that matches `record`
pub(crate) fn find_match<'a>(
    pool: &'a [LuaDnsRecord],
    record: &Record,
    zone: &str,
) -> Option<&'a LuaDnsRecord> {
    pool.iter().find(|existing| matches(existing, record, zone))
}
