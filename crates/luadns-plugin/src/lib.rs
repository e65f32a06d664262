// # LuaDNS Host Plugin
//
// Adapter that lets a host server (reverse proxy / ACME client) load LuaDNS
// as the `dns.providers.luadns` module.
//
// ## Lifecycle
//
// 1. The host decodes its JSON provider block into a `LuaDnsModule`
//    (`{"email": "...", "api_key": "..."}`)
// 2. The host resolves any placeholders in the credential strings itself
// 3. `provision()` checks both credentials and builds the provider
// 4. Record operations are delegated to the `LuaDnsProvider`
//
// Parsing the host's configuration language and registering with the host's
// own module system are the host's business; this crate only offers the
// module object and a `ProviderRegistry` factory.

use async_trait::async_trait;
use libdns_core::config::ProviderConfig;
use libdns_core::{
    Context, Error, ProviderFactory, ProviderRegistry, Record, RecordAppender, RecordDeleter,
    RecordGetter, RecordProvider, RecordSetter, Result,
};
use libdns_luadns::{LuaDnsClient, LuaDnsProvider};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Module ID under which hosts load this provider
pub const MODULE_ID: &str = "dns.providers.luadns";

/// Static module information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleInfo {
    /// Namespaced module ID
    pub id: &'static str,
}

/// Credentials block as found in the host's JSON configuration
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuaDnsModuleConfig {
    /// Account email address
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,

    /// API key from https://www.luadns.com/api_keys
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_key: String,

    /// Base URL override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl fmt::Debug for LuaDnsModuleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LuaDnsModuleConfig")
            .field("email", &self.email)
            .field("api_key", &"<REDACTED>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// LuaDNS provider as a host module
///
/// Every record operation fails with a configuration error until
/// [`LuaDnsModule::provision`] succeeded.
#[derive(Debug, Default)]
pub struct LuaDnsModule {
    config: LuaDnsModuleConfig,
    provider: Option<LuaDnsProvider>,
}

impl LuaDnsModule {
    /// Module information for host registration
    pub fn module_info() -> ModuleInfo {
        ModuleInfo { id: MODULE_ID }
    }

    /// Create an unprovisioned module from credentials
    pub fn new(email: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::from_config(LuaDnsModuleConfig {
            email: email.into(),
            api_key: api_key.into(),
            endpoint: None,
        })
    }

    /// Create an unprovisioned module from a decoded configuration
    pub fn from_config(config: LuaDnsModuleConfig) -> Self {
        Self {
            config,
            provider: None,
        }
    }

    /// Decode the host's JSON provider block
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let config: LuaDnsModuleConfig = serde_json::from_value(value.clone())?;
        Ok(Self::from_config(config))
    }

    /// Module configuration
    pub fn config(&self) -> &LuaDnsModuleConfig {
        &self.config
    }

    /// Validate credentials and set up the provider
    ///
    /// Credential strings are used verbatim. Provisioning again rebuilds the
    /// provider, which starts with an empty zone cache.
    pub fn provision(&mut self) -> Result<()> {
        if self.config.email.is_empty() {
            return Err(Error::config("missing email"));
        }
        if self.config.api_key.is_empty() {
            return Err(Error::config("missing API key"));
        }

        let mut client = LuaDnsClient::new(&self.config.email, &self.config.api_key)?;
        if let Some(endpoint) = &self.config.endpoint {
            client = client.with_endpoint(endpoint);
        }

        tracing::debug!(
            "Provisioned {} for {} ({})",
            MODULE_ID,
            self.config.email,
            client.endpoint()
        );
        self.provider = Some(LuaDnsProvider::with_api(client));
        Ok(())
    }

    /// Whether [`LuaDnsModule::provision`] has succeeded
    pub fn is_provisioned(&self) -> bool {
        self.provider.is_some()
    }

    fn provider(&self) -> Result<&LuaDnsProvider> {
        self.provider
            .as_ref()
            .ok_or_else(|| Error::config(format!("{} used before provisioning", MODULE_ID)))
    }
}

#[async_trait]
impl RecordGetter for LuaDnsModule {
    async fn get_records(&self, ctx: &Context, zone: &str) -> Result<Vec<Record>> {
        self.provider()?.get_records(ctx, zone).await
    }
}

#[async_trait]
impl RecordAppender for LuaDnsModule {
    async fn append_records(
        &self,
        ctx: &Context,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>> {
        self.provider()?.append_records(ctx, zone, records).await
    }
}

#[async_trait]
impl RecordSetter for LuaDnsModule {
    async fn set_records(
        &self,
        ctx: &Context,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>> {
        self.provider()?.set_records(ctx, zone, records).await
    }
}

#[async_trait]
impl RecordDeleter for LuaDnsModule {
    async fn delete_records(
        &self,
        ctx: &Context,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>> {
        self.provider()?.delete_records(ctx, zone, records).await
    }
}

impl RecordProvider for LuaDnsModule {
    fn provider_name(&self) -> &'static str {
        "luadns"
    }
}

/// Factory for creating provisioned LuaDNS modules
pub struct LuaDnsFactory;

impl ProviderFactory for LuaDnsFactory {
    fn create(&self, config: &ProviderConfig) -> Result<Box<dyn RecordProvider>> {
        match config {
            ProviderConfig::LuaDns {
                email,
                api_key,
                endpoint,
            } => {
                let mut module = LuaDnsModule::from_config(LuaDnsModuleConfig {
                    email: email.clone(),
                    api_key: api_key.clone(),
                    endpoint: endpoint.clone(),
                });
                module.provision()?;
                Ok(Box::new(module))
            }
            _ => Err(Error::config("Invalid config for LuaDNS provider")),
        }
    }
}

/// Register the LuaDNS provider with a registry
///
/// # Example
///
/// ```rust
/// use libdns_core::ProviderRegistry;
///
/// let registry = ProviderRegistry::new();
/// luadns_plugin::register(&registry);
/// assert!(registry.has_provider("luadns"));
/// ```
pub fn register(registry: &ProviderRegistry) {
    registry.register_provider("luadns", Box::new(LuaDnsFactory));
}
