use crossbeam_channel::bounded;
use eframe::egui;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::app::LedgerApp;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let server_url =
        std::env::var("HAVENLEDGER_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    backend_bridge::runtime::launch(server_url, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("HavenLedger")
            .with_inner_size([1080.0, 720.0])
            .with_min_inner_size([860.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "HavenLedger",
        options,
        Box::new(|_cc| Ok(Box::new(LedgerApp::new(cmd_tx, ui_rx)))),
    )
}
