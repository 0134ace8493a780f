//! CLI runner - executes commands

use crate::auth::AuthConfig;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::LakehouseClient;
use crate::config::ClientConfig;
use crate::endpoints;
use crate::error::{Error, Result};
use crate::pagination::PageRequest;
use crate::types::{JsonObject, JsonValue};
use serde::Serialize;
use std::io::Write;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Endpoints => self.endpoints(),
            Commands::Call {
                endpoint,
                params,
                body,
            } => self.call(endpoint, params, body.as_deref()).await,
            Commands::List {
                endpoint,
                params,
                max_pages,
            } => self.list(endpoint, params, *max_pages).await,
            Commands::Jobs { status, limit } => self.jobs(status.as_deref(), *limit).await,
        }
    }

    /// Resolve the client config: file or environment, then flags
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::from_env()?,
        };

        if let Some(url) = &self.cli.url {
            config.service_url.clone_from(url);
        }
        if let Some(token) = &self.cli.token {
            config.auth = AuthConfig::bearer(token.as_str());
        }

        config.validate()?;
        Ok(config)
    }

    fn client(&self) -> Result<LakehouseClient> {
        LakehouseClient::new(self.client_config()?)
    }

    fn endpoints(&self) -> Result<()> {
        for endpoint in endpoints::all() {
            let value = serde_json::json!({
                "name": endpoint.name,
                "resource": endpoint.resource,
                "method": endpoint.method,
                "path": endpoint.path,
                "query": endpoint.query,
                "body": endpoint.body,
                "paginated": endpoint.paginated,
            });
            self.emit(&value)?;
        }
        Ok(())
    }

    async fn call(
        &self,
        endpoint: &str,
        params: &[(String, JsonValue)],
        body: Option<&str>,
    ) -> Result<()> {
        let body = body.map(serde_json::from_str::<JsonValue>).transpose()?;
        let result = self
            .client()?
            .call(endpoint, to_object(params), body)
            .await?;
        self.emit(&result)
    }

    async fn list(
        &self,
        endpoint: &str,
        params: &[(String, JsonValue)],
        max_pages: Option<usize>,
    ) -> Result<()> {
        let mut pager = self
            .client()?
            .pager::<JsonValue>(endpoint, to_object(params))?;

        while pager.has_next() {
            if max_pages.is_some_and(|max| pager.pages_fetched() >= max) {
                tracing::info!(
                    pages = pager.pages_fetched(),
                    "Stopping at --max-pages; more pages are available"
                );
                break;
            }
            for item in pager.next_page().await? {
                self.emit(&item)?;
            }
        }
        Ok(())
    }

    async fn jobs(&self, status: Option<&str>, limit: Option<u32>) -> Result<()> {
        let mut request = PageRequest::new();
        if let Some(status) = status {
            request.insert("status", status);
        }
        if let Some(limit) = limit {
            request.insert("limit", limit);
        }

        let mut pager = self.client()?.ingestion_jobs_pager(request)?;
        while pager.has_next() {
            for job in pager.next_page().await? {
                self.emit(&job)?;
            }
        }
        Ok(())
    }

    /// Print one value to stdout in the selected format
    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}").map_err(Error::from)
    }
}

fn to_object(params: &[(String, JsonValue)]) -> JsonObject {
    params.iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;

    #[test]
    fn test_to_object_last_value_wins() {
        let params = vec![
            ("limit".to_string(), json!(10)),
            ("limit".to_string(), json!(20)),
        ];
        assert_eq!(to_object(&params).get("limit"), Some(&json!(20)));
    }

    #[test]
    fn test_client_config_flags_override() {
        let cli = Cli::try_parse_from([
            "lakehouse",
            "--url",
            "https://flag.example.com",
            "--token",
            "flag-token",
            "endpoints",
        ])
        .unwrap();

        let config = Runner::new(cli).client_config().unwrap();
        assert_eq!(config.service_url, "https://flag.example.com");
        assert_eq!(config.auth, AuthConfig::bearer("flag-token"));
    }
}
