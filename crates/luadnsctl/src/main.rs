// # luadnsctl - LuaDNS record client
//
// Thin command-line front end over the `dns.providers.luadns` module.
// All record logic lives in `libdns-luadns`; this binary only reads
// configuration, builds the provider through the registry and prints
// results.
//
// ## Configuration
//
// Credentials come from environment variables only:
//
// - `LUADNS_EMAIL`: Account email address
// - `LUADNS_API_KEY`: API key
// - `LUADNS_ENDPOINT`: Base URL override (optional)
// - `LUADNS_LOG_LEVEL`: trace, debug, info, warn, error (default: info)
//
// ## Records
//
// Records are written in zone-file order: `"<name> <ttl> <type> <value>"`,
// with `@` for the zone apex and everything after the type taken as the
// value.
//
// ## Example
//
// ```bash
// export LUADNS_EMAIL=ops@example.com
// export LUADNS_API_KEY=your_key
//
// luadnsctl get example.com
// luadnsctl set example.com "www 300 A 192.0.2.1" "@ 3600 MX 10 mail.example.com."
// luadnsctl delete example.com "www 0 A 192.0.2.1"
// ```
//
// Results are printed as JSON on stdout; logs go to stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use libdns_core::{Context, Error, ProviderConfig, ProviderRegistry, Record};
use std::env;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CtlExitCode {
    /// Operation completed
    Success = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Operation failed
    RuntimeError = 2,
    /// Some records were applied before a failure
    PartialFailure = 3,
}

impl From<CtlExitCode> for ExitCode {
    fn from(code: CtlExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, rename_all = "kebab-case")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every record in a zone
    Get {
        /// Zone name (e.g. example.com)
        zone: String,
    },
    /// Create records without checking for existing ones
    Append {
        /// Zone name (e.g. example.com)
        zone: String,
        /// Record as "<name> <ttl> <type> <value>"
        #[arg(required = true, value_name = "RECORD", value_parser = parse_record)]
        records: Vec<Record>,
    },
    /// Update the record at each (name, type), creating it if missing
    Set {
        /// Zone name (e.g. example.com)
        zone: String,
        /// Record as "<name> <ttl> <type> <value>"
        #[arg(required = true, value_name = "RECORD", value_parser = parse_record)]
        records: Vec<Record>,
    },
    /// Delete the record at each (name, type); absent records are skipped
    Delete {
        /// Zone name (e.g. example.com)
        zone: String,
        /// Record as "<name> <ttl> <type> <value>"
        #[arg(required = true, value_name = "RECORD", value_parser = parse_record)]
        records: Vec<Record>,
    },
}

/// Parse `"<name> <ttl> <type> <value>"`
fn parse_record(input: &str) -> std::result::Result<Record, String> {
    let mut rest = input.trim();
    let mut fields = Vec::with_capacity(2);

    for field in ["name", "ttl"] {
        if rest.is_empty() {
            return Err(format!("missing {} in record '{}'", field, input));
        }
        let (value, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        fields.push(value);
        rest = tail.trim_start();
    }

    if rest.is_empty() {
        return Err(format!("missing type in record '{}'", input));
    }

    // A type with nothing after it means the value is missing
    let (record_type, value) = rest
        .split_once(char::is_whitespace)
        .ok_or_else(|| format!("missing value in record '{}'", input))?;
    let value = value.trim_start();

    let ttl: u64 = fields[1]
        .parse()
        .map_err(|_| format!("invalid TTL '{}' in record '{}'", fields[1], input))?;

    Ok(Record::new(
        fields[0],
        record_type.to_uppercase(),
        value,
        Duration::from_secs(ttl),
    ))
}

/// Application configuration
struct Config {
    email: String,
    api_key: String,
    endpoint: Option<String>,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Self {
        Self {
            email: env::var("LUADNS_EMAIL").unwrap_or_default(),
            api_key: env::var("LUADNS_API_KEY").unwrap_or_default(),
            endpoint: env::var("LUADNS_ENDPOINT").ok().filter(|s| !s.is_empty()),
            log_level: env::var("LUADNS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.email.is_empty() {
            anyhow::bail!(
                "LUADNS_EMAIL is required. \
                Set it via: export LUADNS_EMAIL=you@example.com"
            );
        }

        if self.api_key.is_empty() {
            anyhow::bail!(
                "LUADNS_API_KEY is required. \
                Set it via: export LUADNS_API_KEY=your_key"
            );
        }

        if let Some(ref url) = self.endpoint {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                anyhow::bail!("LUADNS_ENDPOINT must use HTTP or HTTPS scheme. Got: {}", url);
            }

            if url.starts_with("http://") {
                eprintln!(
                    "WARNING: LUADNS_ENDPOINT uses HTTP (not HTTPS). \
                    Credentials will be sent in clear text."
                );
            }
        }

        self.level()?;
        Ok(())
    }

    fn level(&self) -> Result<Level> {
        Ok(match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => anyhow::bail!(
                "LUADNS_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        })
    }

    fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::LuaDns {
            email: self.email.clone(),
            api_key: self.api_key.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        return CtlExitCode::ConfigError.into();
    }

    let log_level = config.level().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return CtlExitCode::ConfigError.into();
    }

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return CtlExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(run(cli.command, &config));
    report(result).into()
}

/// Build the provider and run one operation
async fn run(command: Command, config: &Config) -> libdns_core::Result<Vec<Record>> {
    let registry = ProviderRegistry::new();
    luadns_plugin::register(&registry);
    let provider = registry.create_provider(&config.provider_config())?;

    let (ctx, cancel) = Context::with_cancel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Received SIGINT, cancelling");
            cancel.cancel();
        }
    });

    match command {
        Command::Get { zone } => {
            info!("Listing records in {}", zone);
            provider.get_records(&ctx, &zone).await
        }
        Command::Append { zone, records } => {
            info!("Appending {} record(s) to {}", records.len(), zone);
            provider.append_records(&ctx, &zone, &records).await
        }
        Command::Set { zone, records } => {
            info!("Setting {} record(s) in {}", records.len(), zone);
            provider.set_records(&ctx, &zone, &records).await
        }
        Command::Delete { zone, records } => {
            info!("Deleting {} record(s) from {}", records.len(), zone);
            provider.delete_records(&ctx, &zone, &records).await
        }
    }
}

/// Print the outcome and pick the exit code
fn report(result: libdns_core::Result<Vec<Record>>) -> CtlExitCode {
    match result {
        Ok(records) => {
            print_records(&records);
            CtlExitCode::Success
        }
        Err(e @ Error::PartialFailure { .. }) => {
            print_records(e.completed());
            error!("{}", e);
            CtlExitCode::PartialFailure
        }
        Err(e @ Error::Config(_)) => {
            error!("{}", e);
            CtlExitCode::ConfigError
        }
        Err(e) => {
            error!("{}", e);
            CtlExitCode::RuntimeError
        }
    }
}

fn print_records(records: &[Record]) {
    match serde_json::to_string_pretty(records) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to encode records: {}", e),
    }
}
