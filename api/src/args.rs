use std::time::Duration;

use clap::{ArgAction, Parser};
use mealbook_core::domain::common::{DEFAULT_UPSTREAM_BASE_URL, MealbookConfig, UpstreamConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealbook-api", version, about = "Food search proxy for Mealbook")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub log: LogArgs,
    #[command(flatten)]
    pub upstream: UpstreamArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Expose Prometheus metrics on `{root_path}/metrics`
    #[arg(
        long = "server-metrics",
        env = "SERVER_METRICS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// `tracing_subscriber::EnvFilter` directive
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct UpstreamArgs {
    #[arg(
        long = "upstream-base-url",
        env = "UPSTREAM_BASE_URL",
        default_value = DEFAULT_UPSTREAM_BASE_URL
    )]
    pub base_url: String,

    #[arg(
        long = "upstream-timeout-ms",
        env = "UPSTREAM_TIMEOUT_MS",
        default_value_t = 5000
    )]
    pub timeout_ms: u64,

    #[arg(
        long = "upstream-user-agent",
        env = "UPSTREAM_USER_AGENT",
        default_value = concat!("mealbook/", env!("CARGO_PKG_VERSION"))
    )]
    pub user_agent: String,
}

impl From<Args> for MealbookConfig {
    fn from(args: Args) -> Self {
        MealbookConfig {
            upstream: UpstreamConfig {
                base_url: args.upstream.base_url,
                timeout: Duration::from_millis(args.upstream.timeout_ms),
                user_agent: args.upstream.user_agent,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "mealbook-api",
            "--server-port",
            "8080",
            "--server-metrics",
            "false",
            "--upstream-base-url",
            "http://127.0.0.1:9999/search",
            "--upstream-timeout-ms",
            "250",
        ]);

        assert_eq!(args.server.port, 8080);
        assert!(!args.server.metrics);

        let config = MealbookConfig::from(args);
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:9999/search");
        assert_eq!(config.upstream.timeout, Duration::from_millis(250));
    }
}
