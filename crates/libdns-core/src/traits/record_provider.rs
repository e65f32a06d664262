// # Record Provider Traits
//
// Defines the capability set a DNS provider exposes to its host: read the
// records of a zone, append new ones, set (upsert) records, and delete them.
//
// ## Implementations
//
// - LuaDNS: `libdns-luadns` crate (`LuaDnsProvider`)
// - Host plugin adapter: `luadns-plugin` crate (`LuaDnsModule`)
//
// ## Usage
//
// ```rust,ignore
// use libdns_core::{Context, Record, RecordProvider};
// use std::time::Duration;
//
// async fn publish(provider: &dyn RecordProvider) -> libdns_core::Result<()> {
//     let ctx = Context::background();
//     let txt = Record::new("_acme-challenge", "TXT", "token", Duration::from_secs(120));
//
//     provider.append_records(&ctx, "example.com.", &[txt.clone()]).await?;
//     provider.delete_records(&ctx, "example.com.", &[txt]).await?;
//     Ok(())
// }
// ```

use crate::context::Context;
use crate::error::Result;
use crate::record::Record;
use async_trait::async_trait;

/// Lists the records of a zone
#[async_trait]
pub trait RecordGetter: Send + Sync {
    /// Return every record in `zone`, in the order the provider lists them
    async fn get_records(&self, ctx: &Context, zone: &str) -> Result<Vec<Record>>;
}

/// Adds records to a zone
#[async_trait]
pub trait RecordAppender: Send + Sync {
    /// Create each record in `zone` and return the created records
    ///
    /// No existence check is made: appending the same record twice may
    /// produce duplicates.
    ///
    /// # Partial failure
    ///
    /// Records are applied in order. When one fails, the returned
    /// [`Error::PartialFailure`](crate::Error::PartialFailure) holds the
    /// records created before it. Nothing is rolled back.
    async fn append_records(
        &self,
        ctx: &Context,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>>;
}

/// Creates or updates records in a zone
#[async_trait]
pub trait RecordSetter: Send + Sync {
    /// Update the record occupying each (name, type) slot, or create it
    ///
    /// Returns the records as stored by the provider. Partial failures
    /// follow the same contract as [`RecordAppender::append_records`].
    async fn set_records(
        &self,
        ctx: &Context,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>>;
}

/// Removes records from a zone
#[async_trait]
pub trait RecordDeleter: Send + Sync {
    /// Delete the record occupying each (name, type) slot
    ///
    /// Records with no counterpart in the zone are skipped; deleting
    /// something already absent is not an error. Returns the input records
    /// that were deleted.
    async fn delete_records(
        &self,
        ctx: &Context,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>>;
}

/// The full capability set expected from a DNS provider
///
/// # Thread Safety
///
/// Implementations must be usable concurrently from multiple tasks.
///
/// # Retry Policy
///
/// Providers never retry or back off on their own; every failure is
/// surfaced to the caller, who can consult
/// [`Error::is_retryable`](crate::Error::is_retryable).
pub trait RecordProvider: RecordGetter + RecordAppender + RecordSetter + RecordDeleter {
    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}

/// Helper trait for constructing record providers from configuration
pub trait ProviderFactory: Send + Sync {
    /// Create a RecordProvider instance from configuration
    ///
    /// # Returns
    ///
    /// A boxed RecordProvider trait object, or a configuration error
    fn create(
        &self,
        config: &crate::config::ProviderConfig,
    ) -> Result<Box<dyn RecordProvider>>;
}
