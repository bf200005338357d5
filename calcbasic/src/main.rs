//! calcbasic — entry-form calculator
//!
//! Usage:
//!     calcbasic add 1 2
//!     calcbasic --gui

mod app;

use app::BasicCalcApp;
use calccore::format_number;
use calccore::ops::Operation;
use clap::Parser;
use eframe::NativeOptions;

#[derive(Parser)]
#[command(name = "calcbasic", about = "Simple calculator")]
struct Cli {
    /// Operation to perform: add, sub, mul or div
    operation: Option<String>,
    /// First operand
    a: Option<f64>,
    /// Second operand
    b: Option<f64>,
    /// Launch the GUI
    #[arg(long)]
    gui: bool,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if !cli.gui {
        if let Some(op_name) = cli.operation.as_deref() {
            run_cli(op_name, cli.a, cli.b);
            return Ok(());
        }
    }

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([320.0, 220.0])
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calcbasic",
        options,
        Box::new(|cc| {
            calccore::CalcTheme::default().apply(&cc.egui_ctx);
            Box::new(BasicCalcApp::new(cc))
        }),
    )
}

fn run_cli(op_name: &str, a: Option<f64>, b: Option<f64>) {
    let op: Operation = match op_name.parse() {
        Ok(op) => op,
        Err(err) => {
            eprintln!("calcbasic: {err}");
            std::process::exit(2);
        }
    };
    let (Some(a), Some(b)) = (a, b) else {
        eprintln!("calcbasic: {} requires two operands", op.name());
        std::process::exit(2);
    };
    match op.apply(a, b) {
        Ok(value) => println!("{}", format_number(value)),
        Err(err) => {
            eprintln!("calcbasic: {err}");
            std::process::exit(1);
        }
    }
}
