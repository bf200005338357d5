//! calcglass — glassy calculator with an animated background

mod app;

use app::GlassCalcApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([300.0, 460.0])
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calcglass",
        options,
        Box::new(|cc| {
            calccore::CalcTheme::default().apply(&cc.egui_ctx);
            app::apply_glass_visuals(&cc.egui_ctx);
            Box::new(GlassCalcApp::new(cc))
        }),
    )
}
