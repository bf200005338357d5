//! calckeypad — keypad-style calculator
//!
//! Buttons and keyboard input build up an expression; `=` evaluates it.

mod app;

use app::KeypadApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([280.0, 420.0])
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calckeypad",
        options,
        Box::new(|cc| {
            calccore::CalcTheme::default().apply(&cc.egui_ctx);
            Box::new(KeypadApp::new(cc))
        }),
    )
}
