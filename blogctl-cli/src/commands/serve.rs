//! HTTP server command for the blog

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use blogctl_server::BlogConfig;
use clap::Parser;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides BLOG_BIND, default: 127.0.0.1:5000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// SQLite database file (overrides BLOG_DATABASE, default: database.db)
    #[arg(long, short = 'd')]
    pub database: Option<PathBuf>,

    /// Request timeout in seconds (overrides BLOG_REQUEST_TIMEOUT, default: 30)
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of `config`.
    fn apply(self, mut config: BlogConfig) -> BlogConfig {
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(database) = self.database {
            config.database_path = database;
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }
        config
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.apply(BlogConfig::from_env().context("Invalid blog configuration")?);

    tracing::info!(
        bind = %config.bind_addr,
        database = %config.database_path.display(),
        "Starting blogctl server"
    );

    // Run server (blocks until shutdown)
    blogctl_server::serve(config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = ServeArgs::parse_from(["serve", "--bind", "0.0.0.0:8000", "-d", "blog.db"]);
        let config = args.apply(BlogConfig::default());

        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.database_path, PathBuf::from("blog.db"));
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn no_flags_keep_config() {
        let base = BlogConfig::with_database("posts.db");
        let config = ServeArgs::parse_from(["serve"]).apply(base.clone());
        assert_eq!(config, base);
    }
}
