mod app_state;
mod assets;
mod cli;
#[cfg(test)]
mod test_support;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_LOG_DIRECTIVE: &str = "relief=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = relief_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Relief crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("----------------------\n");

        default_hook(info);
    }));
}

fn init_logging(directive: &str) {
    let directive = directive.parse().unwrap_or_else(|_| {
        eprintln!("Invalid log directive {directive:?}, using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Config is read before logging so its level can drive the filter; a
    // load failure is reported once the subscriber is up.
    let loaded = relief_config::load_config(args.config.as_deref());
    let (mut config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (relief_config::ReliefConfig::default(), Some(e)),
    };
    args.apply_to(&mut config);

    init_logging(&config.logging.level);
    tracing::info!("Relief v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(ref path) = args.config {
        tracing::info!(path = %path.display(), "Using config override");
    }
    tracing::info!(
        font = %config.assets.font.display(),
        matcap = %config.assets.matcap.display(),
        "Config loaded"
    );

    if let Err(e) = relief_platform::paths::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return;
        }
    };
    let mut app = app_state::ReliefApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
