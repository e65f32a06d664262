// # LuaDNS Provider
//
// This crate provides a LuaDNS (https://www.luadns.com/) implementation of the
// `libdns-core` record management contract.
//
// ## Components
//
// - `client`: authenticated JSON-over-HTTPS calls to the LuaDNS API v1
// - `translate`: zone-relative records <-> LuaDNS fully-qualified records
// - `cache`: zone name -> zone ID cache, shared by concurrent callers
// - `provider`: `LuaDnsProvider`, the four record operations
//
// ## Behavior Summary
//
// - ✅ HTTP Basic auth, 30 second timeout, caller-driven cancellation
// - ✅ Zone IDs resolved once per provider and cached
// - ✅ Partial results returned alongside batch failures
// - ❌ NO retry or backoff logic (failures are surfaced to the caller)
// - ❌ NO local rate limiting (1200 requests / 5 minutes is the caller's budget)
// - ❌ NO background tasks
//
// ## Example
//
// ```rust,no_run
// use libdns_core::{Context, Record, RecordSetter};
// use libdns_luadns::LuaDnsProvider;
// use std::time::Duration;
//
// # async fn demo() -> libdns_core::Result<()> {
// let provider = LuaDnsProvider::new("ops@example.com", "api-key")?;
// let ctx = Context::with_timeout(Duration::from_secs(60));
//
// let www = Record::new("www", "A", "192.0.2.1", Duration::from_secs(300));
// provider.set_records(&ctx, "example.com.", &[www]).await?;
// # Ok(())
// # }
// ```

pub mod cache;
pub mod client;
pub mod provider;
pub mod translate;
pub mod types;

pub use cache::ZoneCache;
pub use client::{DEFAULT_HTTP_TIMEOUT, LUADNS_API_BASE, LuaDnsApi, LuaDnsClient};
pub use provider::LuaDnsProvider;
pub use translate::{DEFAULT_TTL_SECS, matches, to_generic, to_vendor};
pub use types::{LuaDnsRecord, LuaDnsZone};
