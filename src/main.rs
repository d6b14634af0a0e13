mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;

#[cfg(test)]
mod tests;

use crate::app::App;
use crate::config::AppConfig;

fn main() {
    let loaded = AppConfig::from_env();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    dioxus::logger::init(config.log_level).expect("should install the tracing subscriber");
    if let Err(err) = &loaded {
        tracing::warn!("falling back to default configuration: {err:#}");
    }
    tracing::info!(
        service_url = %config.service_url,
        page_size = config.page_size,
        "starting people grid"
    );

    launch(config);
}

#[cfg(feature = "desktop")]
fn launch(config: AppConfig) {
    let webview_data_dir = platform::desktop::webview::default_webview_data_dir()
        .expect("should resolve and create webview data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("People"))
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch(config: AppConfig) {
    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(App);
}
