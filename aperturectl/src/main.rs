use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use aperture_config::{Config, ConfigLoad, ConfigLoader};
use aperture_core::{
    AlbumsRepository, ApiClient, CollectionRepository, GalleryMediaRepository,
    PhotoPrismPreviewUrlFactory, SearchConfig,
};
use clap::Parser;
use futures::StreamExt;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command, SearchArgs};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config.clone() {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = cli.env_file.clone() {
        loader = loader.with_env_file(path);
    }
    let ConfigLoad { config, warnings } =
        loader.load().context("failed to load configuration")?;

    init_tracing(&config.logging.filter);
    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    for warning in &warnings {
        warn!(message = %warning, "configuration warning");
    }

    match cli.command {
        Command::Query(search) => run_query(&config, &search),
        Command::Search { search, limit } => {
            run_search(&config, &search, limit).await
        }
        Command::Albums { types } => run_albums(&config, types).await,
    }
}

fn init_tracing(default_filter: &str) {
    // Logs go to stderr so stdout stays machine readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn search_config(config: &Config, search: &SearchArgs) -> SearchConfig {
    search
        .to_search_config()
        .with_only_allowed_media_types(
            config.gallery.allowed_media_types.as_ref(),
        )
}

fn run_query(config: &Config, search: &SearchArgs) -> anyhow::Result<()> {
    let query = search_config(config, search).photoprism_query();
    println!("{}", query.unwrap_or_default());
    Ok(())
}

fn api_client(config: &Config) -> anyhow::Result<ApiClient> {
    let url = config.api_url()?;
    ApiClient::new(
        url.as_str(),
        config.api.session_id.clone(),
        config.api.request_timeout,
    )
    .context("failed to create API client")
}

async fn run_search(
    config: &Config,
    search: &SearchArgs,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let repository = GalleryMediaRepository::new(
        Arc::new(api_client(config)?),
        search_config(config, search),
    )
    .with_page_limit(config.gallery.page_limit);

    let mut stdout = std::io::stdout().lock();

    if let Some(limit) = limit {
        let media = repository
            .load_first(limit)
            .await
            .context("failed to search media")?;
        return write_json_lines(&mut stdout, &media);
    }

    let pages = repository.pages();
    futures::pin_mut!(pages);
    while let Some(page) = pages.next().await {
        let page = page.context("failed to search media")?;
        write_json_lines(&mut stdout, &page.items)?;
    }
    Ok(())
}

async fn run_albums(
    config: &Config,
    types: Vec<String>,
) -> anyhow::Result<()> {
    let client = api_client(config)?;
    let preview_url_factory = PhotoPrismPreviewUrlFactory::new(
        client.api_url(),
        config.api.preview_token.clone(),
    );
    let types = if types.is_empty() {
        config.gallery.album_types.clone()
    } else {
        types
    };

    let albums = AlbumsRepository::new(
        Arc::new(client),
        Arc::new(preview_url_factory),
        types,
    )
    .with_page_limit(config.gallery.album_page_limit)
    .fetch_collection()
    .await
    .context("failed to load albums")?;

    write_json_lines(&mut std::io::stdout().lock(), &albums)
}

fn write_json_lines<T: Serialize>(
    out: &mut impl Write,
    items: &[T],
) -> anyhow::Result<()> {
    for item in items {
        serde_json::to_writer(&mut *out, item)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
