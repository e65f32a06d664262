// # libdns-core
//
// Provider-agnostic contract for managing DNS records.
//
// ## Architecture Overview
//
// - **Record**: Zone-relative record exchanged with callers
// - **RecordGetter / RecordAppender / RecordSetter / RecordDeleter**: The
//   four record capabilities a provider implements
// - **RecordProvider**: The full capability set, as a trait object
// - **Context**: Caller-driven cancellation and deadlines
// - **ProviderRegistry**: Plugin-based registry of provider factories
//
// ## Design Principles
//
// 1. **Separation of Concerns**: The contract is separate from provider APIs
// 2. **Plugin-Based**: Providers are registered dynamically by type name
// 3. **No Hidden Retries**: Every failure reaches the caller
// 4. **Partial Results**: Batch failures keep the records already applied

pub mod config;
pub mod context;
pub mod error;
pub mod record;
pub mod registry;
pub mod traits;

// Re-export core types for convenience
pub use config::ProviderConfig;
pub use context::{CancelHandle, Context};
pub use error::{Error, Operation, Result};
pub use record::{APEX, Record};
pub use registry::ProviderRegistry;
pub use traits::{
    ProviderFactory, RecordAppender, RecordDeleter, RecordGetter, RecordProvider, RecordSetter,
};
