pub mod app;
pub mod console;
mod logging;
pub mod presenter;
pub mod query;
pub mod settings;
pub mod skin;

use app::App;
use console::{run_console, ConsolePresentation};
use settings::{load_settings, AppSettings};
use tokio::io::BufReader;

pub fn run() {
    // logging is configured from settings, so report a load failure once it is up
    let (settings, load_error) = match load_settings() {
        Ok(settings) => (settings, None),
        Err(e) => (AppSettings::default(), Some(e)),
    };

    let _guard = logging::init_logging(&settings);
    if let Some(e) = load_error {
        tracing::warn!("Falling back to default settings: {}", e);
    }
    tracing::info!("Using API base {}", settings.api_base);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("error while building tokio runtime");

    runtime.block_on(async move {
        let mut app = App::new(&settings, ConsolePresentation::new(std::io::stdout()))
            .expect("error while creating application");
        run_console(&mut app, BufReader::new(tokio::io::stdin())).await;
    });
}
