mod cli;
mod console;

use std::sync::Arc;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use chatwidget_client::HttpBackend;
use chatwidget_config::WidgetConfig;
use chatwidget_runtime::{ChatWidget, HostPage};

const DEFAULT_LOG_DIRECTIVE: &str = "chatwidget=info";

fn main() {
    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let directive: Result<Directive, _> = log_directive
        .parse()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("chatwidget v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = chatwidget_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        WidgetConfig::default()
    });
    tracing::info!("Backend: {}", config.backend.normalized_base_url());

    let backend = match HttpBackend::new(config.backend.normalized_base_url()) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!("Failed to create HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            std::process::exit(1);
        }
    };

    let host = HostPage::loaded(args.script_src.as_str());
    let widget = ChatWidget::new(host, &config, Arc::new(backend));
    if let Err(e) = runtime.block_on(console::run(widget, args.open)) {
        tracing::error!("Widget stopped: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
