//! Command-line and environment configuration of the host.
//!
//! Every option can also come from the environment (or a `.env` file, loaded in
//! `main` before parsing).

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "source-admin",
    version,
    about = "Serves the source manager panel and forwards its API calls"
)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "SOURCE_ADMIN_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "SOURCE_ADMIN_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of the content API that owns `/api/sources`.
    #[arg(long, env = "SOURCE_ADMIN_UPSTREAM", default_value = "http://127.0.0.1:8001")]
    pub upstream: String,

    /// Do not open a browser tab on start.
    #[arg(long, env = "SOURCE_ADMIN_NO_BROWSER")]
    pub no_browser: bool,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "source-admin",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--upstream",
            "http://content:8001",
            "--no-browser",
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.upstream, "http://content:8001");
        assert!(config.no_browser);
        assert_eq!(config.url(), "http://0.0.0.0:9000");
    }

    #[test]
    fn rejects_bad_port() {
        assert!(Config::try_parse_from(["source-admin", "--port", "http"]).is_err());
    }
}
