// # LuaDNS Provider
//
// Implements the four record capabilities on top of the LuaDNS API.
//
// ## Request Budget
//
// - Zone IDs are cached per provider: the first operation on a zone costs
//   one `GET /zones`, later ones none.
// - `get_records`: one list call.
// - `append_records`: one create call per record.
// - `set_records` / `delete_records`: one list call up front (the match
//   pool), then one update/create/delete call per record. The pool is a
//   snapshot: two input records aimed at the same slot both see the state
//   from before the call.
//
// Requests within an operation are strictly sequential so that a failure
// leaves "every earlier record applied, no later one attempted".

use crate::cache::ZoneCache;
use crate::client::{LuaDnsApi, LuaDnsClient};
use crate::translate::{find_match, normalize_zone, to_generic, to_vendor};
use async_trait::async_trait;
use libdns_core::{
    Context, Error, Operation, Record, RecordAppender, RecordDeleter, RecordGetter,
    RecordProvider, RecordSetter, Result,
};

/// LuaDNS DNS provider
///
/// Generic over the API implementation so tests can count requests; use
/// [`LuaDnsProvider::new`] for the HTTP-backed provider.
#[derive(Debug)]
pub struct LuaDnsProvider<A = LuaDnsClient> {
    api: A,
    zones: ZoneCache,
}

impl LuaDnsProvider<LuaDnsClient> {
    /// Create a provider against the public LuaDNS API
    ///
    /// # Parameters
    ///
    /// - `email`: Account email address
    /// - `api_key`: API key from https://www.luadns.com/api_keys
    pub fn new(email: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::with_api(LuaDnsClient::new(email, api_key)?))
    }
}

impl<A: LuaDnsApi> LuaDnsProvider<A> {
    /// Create a provider over any API implementation
    pub fn with_api(api: A) -> Self {
        Self {
            api,
            zones: ZoneCache::new(),
        }
    }

    /// The underlying API implementation
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Zone IDs resolved so far
    pub fn zone_cache(&self) -> &ZoneCache {
        &self.zones
    }

    /// Resolve a zone name to its LuaDNS ID, consulting the cache first
    pub async fn zone_id(&self, ctx: &Context, zone: &str) -> Result<u64> {
        let zone = normalize_zone(zone);

        if let Some(id) = self.zones.get(zone) {
            tracing::debug!("Zone ID cache hit: {} -> {}", zone, id);
            return Ok(id);
        }

        tracing::debug!("Zone ID cache miss, listing zones for {}", zone);
        let zones = self.api.list_zones(ctx).await?;

        let id = zones
            .iter()
            .find(|z| normalize_zone(&z.name) == zone)
            .map(|z| z.id)
            .ok_or_else(|| Error::zone_not_found(zone))?;

        self.zones.insert(zone, id);
        tracing::debug!("Cached zone ID: {} -> {}", zone, id);
        Ok(id)
    }

    async fn create(&self, ctx: &Context, zone_id: u64, record: &Record, zone: &str) -> Result<Record> {
        let created = self
            .api
            .create_record(ctx, zone_id, &to_vendor(record, zone))
            .await?;
        tracing::info!(
            "Created {} record {} (id {}) in {}",
            created.record_type,
            created.name,
            created.id,
            zone
        );
        Ok(to_generic(&created, zone))
    }
}

/// Log and wrap a per-record failure
fn partial(operation: Operation, record: &Record, completed: Vec<Record>, err: Error) -> Error {
    tracing::warn!(
        "Failed to {} record {} after {} applied: {}",
        operation,
        record.name,
        completed.len(),
        err
    );
    Error::partial(operation, record.name.clone(), completed, err)
}

#[async_trait]
impl<A: LuaDnsApi> RecordGetter for LuaDnsProvider<A> {
    async fn get_records(&self, ctx: &Context, zone: &str) -> Result<Vec<Record>> {
        self.api.ensure_configured()?;
        let zone_id = self.zone_id(ctx, zone).await?;

        let records = self.api.list_records(ctx, zone_id).await?;
        tracing::debug!("Listed {} records in {}", records.len(), zone);

        Ok(records.iter().map(|r| to_generic(r, zone)).collect())
    }
}

#[async_trait]
impl<A: LuaDnsApi> RecordAppender for LuaDnsProvider<A> {
    async fn append_records(
        &self,
        ctx: &Context,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>> {
        self.api.ensure_configured()?;
        let zone_id = self.zone_id(ctx, zone).await?;

        let mut created = Vec::with_capacity(records.len());
        for record in records {
            match self.create(ctx, zone_id, record, zone).await {
                Ok(rec) => created.push(rec),
                Err(e) => return Err(partial(Operation::Append, record, created, e)),
            }
        }

        Ok(created)
    }
}

#[async_trait]
impl<A: LuaDnsApi> RecordSetter for LuaDnsProvider<A> {
    async fn set_records(
        &self,
        ctx: &Context,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>> {
        self.api.ensure_configured()?;
        let zone_id = self.zone_id(ctx, zone).await?;

        let existing = self.api.list_records(ctx, zone_id).await?;

        let mut applied = Vec::with_capacity(records.len());
        for record in records {
            let result = match find_match(&existing, record, zone) {
                Some(current) => {
                    let body = to_vendor(record, zone);
                    self.api
                        .update_record(ctx, zone_id, current.id, &body)
                        .await
                        .map(|updated| {
                            tracing::info!(
                                "Updated {} record {} (id {}) in {}",
                                updated.record_type,
                                updated.name,
                                current.id,
                                zone
                            );
                            to_generic(&updated, zone)
                        })
                }
                None => self.create(ctx, zone_id, record, zone).await,
            };

            match result {
                Ok(rec) => applied.push(rec),
                Err(e) => return Err(partial(Operation::Set, record, applied, e)),
            }
        }

        Ok(applied)
    }
}

#[async_trait]
impl<A: LuaDnsApi> RecordDeleter for LuaDnsProvider<A> {
    async fn delete_records(
        &self,
        ctx: &Context,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>> {
        self.api.ensure_configured()?;
        let zone_id = self.zone_id(ctx, zone).await?;

        let existing = self.api.list_records(ctx, zone_id).await?;

        let mut deleted = Vec::with_capacity(records.len());
        for record in records {
            let Some(current) = find_match(&existing, record, zone) else {
                tracing::debug!(
                    "No {} record {} in {}, skipping delete",
                    record.record_type,
                    record.name,
                    zone
                );
                continue;
            };

            if let Err(e) = self.api.delete_record(ctx, zone_id, current.id).await {
                return Err(partial(Operation::Delete, record, deleted, e));
            }

            tracing::info!(
                "Deleted {} record {} (id {}) in {}",
                current.record_type,
                current.name,
                current.id,
                zone
            );
            deleted.push(record.clone());
        }

        Ok(deleted)
    }
}

impl<A: LuaDnsApi> RecordProvider for LuaDnsProvider<A> {
    fn provider_name(&self) -> &'static str {
        "luadns"
    }
}
