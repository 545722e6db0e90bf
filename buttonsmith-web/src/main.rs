use buttonsmith_web::App;
use dioxus::logger::tracing::Level;
use tracing::{info, warn};

/// Log level from the compile-time `BUTTONSMITH_LOG` variable, default info
fn log_level() -> Level {
    option_env!("BUTTONSMITH_LOG")
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::INFO)
}

fn configure_logging() {
    if let Err(e) = dioxus::logger::init(log_level()) {
        warn!("Logger already initialized: {e}");
    }
}

fn main() {
    configure_logging();
    info!("Starting buttonsmith");
    dioxus::launch(App);
}
