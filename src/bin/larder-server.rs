// ABOUTME: Server binary for the larder food-inventory tracker
// ABOUTME: Loads configuration, initializes logging and the store, then serves the HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder contributors

//! # Larder Server Binary
//!
//! Starts the larder HTTP server: item CRUD pages plus the AI meal
//! suggestion page. Configuration is environment-only with CLI overrides.

use anyhow::Result;
use clap::Parser;
use larder::{
    config::ServerConfig,
    database::Database,
    inventory::InventoryService,
    llm::{GeminiProvider, LlmProvider},
    logging,
    menu::MenuService,
    routes::{self, ServerResources},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "larder-server")]
#[command(about = "Larder - household food inventory tracker with AI meal suggestions")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging first: config loading warns about a missing API key and that
    // warning must reach the installed subscriber
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    info!("Starting larder server");
    info!("{}", config.summary());

    let database = Arc::new(Database::new(&config.database_url).await?);
    info!("Database initialized");

    // A missing API key degrades the suggestion page, not startup
    let provider: Option<Arc<dyn LlmProvider>> = config
        .gemini_api_key
        .clone()
        .map(|key| {
            Arc::new(GeminiProvider::new(key).with_default_model(config.gemini_model.clone()))
                as Arc<dyn LlmProvider>
        });

    let inventory = InventoryService::new(database.clone());
    let menu = MenuService::new(database, provider, config.gemini_model.clone());
    let resources = Arc::new(ServerResources::new(inventory, menu));

    let router = routes::build_router(resources);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, router).await?;

    Ok(())
}
