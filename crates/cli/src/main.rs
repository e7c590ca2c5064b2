// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use clap::Parser;
use commands::ResourceCommand;
use maintdesk_api::{ClientConfig, DEFAULT_TIMEOUT_SECS, HttpClient, HttpTransport};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

/// maintdesk - command-line client for the maintenance desk REST API
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Root URL of the REST API, e.g. `https://acme.example.com/api`
    #[arg(long, env = "MAINTDESK_API_URL")]
    base_url: String,

    /// Bearer token sent with every request
    #[arg(long, env = "MAINTDESK_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    resource: ResourceCommand,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            token: self.token.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    // Logs go to stderr; stdout carries the JSON results.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let client: HttpClient = HttpClient::new(&args.client_config())?;
    info!(base_url = client.base_url(), "Connecting to maintdesk API");
    let transport: Arc<dyn HttpTransport> = Arc::new(client);

    commands::run(args.resource, transport).await
}
