//! calcbasic application

use std::time::Duration;

use calccore::anim::{ease_out_quad, mix, Fade};
use calccore::format_number;
use calccore::ops::Operation;
use calccore::theme::CalcColors;
use calccore::FrameScheduler;
use egui::{Context, Key, RichText};

/// How long the result label takes to settle from gray to ink.
const RESULT_FADE: Duration = Duration::from_millis(650);

pub struct BasicCalcApp {
    entry_a: String,
    entry_b: String,
    operation: Operation,
    result: Option<String>,
    fade: Fade,
    scheduler: FrameScheduler,
}

impl BasicCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            entry_a: String::new(),
            entry_b: String::new(),
            operation: Operation::Add,
            result: None,
            fade: Fade::new(RESULT_FADE),
            scheduler: FrameScheduler::new(),
        }
    }

    fn calculate(&mut self) {
        let parsed = (
            self.entry_a.trim().parse::<f64>(),
            self.entry_b.trim().parse::<f64>(),
        );
        let text = match parsed {
            (Ok(a), Ok(b)) => match self.operation.apply(a, b) {
                Ok(value) => format_number(value),
                Err(err) => format!("Error: {err}"),
            },
            _ => "Error: enter two numbers".to_string(),
        };
        tracing::debug!(operation = self.operation.name(), "calculated");
        self.result = Some(text);
        self.fade.begin();
    }
}

impl eframe::App for BasicCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let enter = ctx.input(|i| i.key_pressed(Key::Enter));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut self.entry_a).desired_width(100.0));
                ui.label("op");
                ui.add(egui::TextEdit::singleline(&mut self.entry_b).desired_width(100.0));
            });

            ui.horizontal(|ui| {
                for op in Operation::ALL {
                    if ui.selectable_label(self.operation == op, op.name()).clicked() {
                        self.operation = op;
                    }
                }
            });

            if ui.button("Calculate").clicked() || enter {
                self.calculate();
            }

            ui.add_space(10.0);
            if let Some(text) = &self.result {
                // Result settles in from light gray to ink.
                let t = ease_out_quad(self.fade.progress());
                let color = mix(CalcColors::FADED, CalcColors::INK, t);
                ui.label(
                    RichText::new(text)
                        .font(egui::FontId::proportional(20.0))
                        .color(color),
                );
            }
        });

        self.scheduler.set_animating(self.fade.active());
        self.scheduler.tick(ctx);
    }
}
