#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod cache;
mod chart;
mod config;
mod constants;
mod data;
mod error;
mod fetch;
mod logging;
mod state;
mod ui;
mod widgets;
mod worker;

use app::PriceChart;
use cache::{FileStore, SeriesCache};
use config::AppConfig;
use fetch::{CoinGeckoClient, Fetcher};
use logging::LoggingConfig;
use worker::FetchWorker;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging(LoggingConfig::from_env());

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = start_puffin_server();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid configuration, using defaults");
        AppConfig::default()
    });
    tracing::info!(
        coin = %config.coin_id,
        cache = %config.cache_path.display(),
        max_points = config.max_points,
        "starting price chart"
    );

    let client = CoinGeckoClient::new(&config)?;
    let cache = SeriesCache::new(FileStore::open(&config.cache_path));
    let fetcher = Fetcher::new(client, cache, config.symbol.clone(), config.max_points);

    let title = format!(
        "{} / {} Price Chart",
        config.display_symbol(),
        config.display_currency()
    );
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let worker = FetchWorker::spawn(fetcher, move || ctx.request_repaint());
            Ok(Box::new(PriceChart::new(&config, worker)))
        }),
    )?;

    Ok(())
}

#[cfg(feature = "profile-with-puffin")]
fn start_puffin_server() -> Option<puffin_http::Server> {
    puffin::set_scopes_on(true);
    match puffin_http::Server::new("127.0.0.1:8585") {
        Ok(server) => {
            tracing::info!("puffin server listening on 127.0.0.1:8585");
            Some(server)
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to start puffin server");
            None
        }
    }
}
