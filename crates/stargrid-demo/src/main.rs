mod config;
mod layout;
mod main_window;
mod notify;
mod star;

use anyhow::Result;
use stargrid_engine::logging::{init_logging, LoggingConfig};
use stargrid_engine::window::Runtime;

use config::{DemoConfig, NotifierKind};
use main_window::MainWindow;
use notify::{DialogNotifier, LogNotifier};

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run(DemoConfig::from_env()) {
        log::error!("stargrid failed: {e:#}");
        std::process::exit(1);
    }
}

fn run(config: DemoConfig) -> Result<()> {
    let runtime = config.runtime_config();
    let gpu = config.gpu.clone();

    match config.notifier {
        NotifierKind::Dialog => Runtime::run(runtime, gpu, MainWindow::new(config, DialogNotifier)),
        NotifierKind::Log => Runtime::run(runtime, gpu, MainWindow::new(config, LogNotifier)),
    }
}
