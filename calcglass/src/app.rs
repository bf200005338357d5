//! calcglass application

use std::path::PathBuf;

use calccore::anim::lerp;
use calccore::input::collect_key_inputs;
use calccore::keypad::{BinKey, KeyInput, Keypad};
use calccore::storage::{self, config_dir};
use calccore::FrameScheduler;
use egui::{Color32, Context, Pos2, Rounding, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Deep navy backdrop the blobs drift over.
const GLASS_BG: Color32 = Color32::from_rgb(16, 20, 34);
/// Translucent fills for panels and buttons.
const PANEL_FILL: Color32 = Color32::from_rgba_premultiplied(40, 44, 60, 160);
const BUTTON_FILL: Color32 = Color32::from_rgba_premultiplied(24, 26, 36, 110);
const BUTTON_HOVER: Color32 = Color32::from_rgba_premultiplied(48, 52, 72, 150);
const BUTTON_EDGE: Color32 = Color32::from_rgba_premultiplied(90, 96, 120, 120);

const BLOB_COLORS: [Color32; 3] = [
    Color32::from_rgba_premultiplied(28, 12, 48, 70),
    Color32::from_rgba_premultiplied(8, 36, 44, 70),
    Color32::from_rgba_premultiplied(44, 18, 26, 70),
];

/// Persisted appearance settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct GlassSettings {
    pub animate: bool,
    pub speed: f32,
}

impl Default for GlassSettings {
    fn default() -> Self {
        Self {
            animate: true,
            speed: 1.0,
        }
    }
}

/// Dark translucent visuals layered over the base theme.
pub fn apply_glass_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = GLASS_BG;
    visuals.window_fill = Color32::from_rgb(24, 28, 44);
    visuals.window_rounding = Rounding::same(10.0);
    visuals.override_text_color = Some(Color32::from_rgb(230, 232, 240));
    ctx.set_visuals(visuals);
}

pub struct GlassCalcApp {
    pad: Keypad,
    settings: GlassSettings,
    settings_path: PathBuf,
    scheduler: FrameScheduler,
    show_about: bool,
}

impl GlassCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings_path = config_dir("calcglass").join("settings.json");
        let settings = storage::load_json(&settings_path).unwrap_or_else(|err| {
            tracing::debug!("no saved settings ({err}), using defaults");
            GlassSettings::default()
        });
        Self {
            pad: Keypad::new(),
            settings,
            settings_path,
            scheduler: FrameScheduler::new(),
            show_about: false,
        }
    }

    fn save_settings(&self) {
        if let Err(err) = storage::save_json(&self.settings_path, &self.settings) {
            tracing::warn!("failed to save settings: {err}");
        }
    }

    fn paint_background(&self, ui: &egui::Ui, time: f64) {
        let rect = ui.max_rect().expand(40.0);
        let painter = ui.painter();
        let t = time as f32 * self.settings.speed;

        for k in 0..6 {
            // Per-blob phase from the golden angle keeps the drift uneven.
            let phase = k as f32 * 2.399;
            let x = rect.center().x + rect.width() * 0.4 * (t * 0.21 + phase).sin();
            let y = rect.center().y + rect.height() * 0.4 * (t * 0.13 + phase * 1.7).cos();
            let breathe = 0.5 + 0.5 * (t * 0.17 + phase).sin();
            let radius = lerp(50.0, 110.0, breathe);
            painter.circle_filled(Pos2::new(x, y), radius, BLOB_COLORS[k % BLOB_COLORS.len()]);
        }
    }

    fn glass_button(&self, ui: &mut egui::Ui, label: &str, width: f32, height: f32) -> bool {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());
        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let fill = if response.hovered() {
                BUTTON_HOVER
            } else {
                BUTTON_FILL
            };
            painter.rect_filled(rect, Rounding::same(8.0), fill);
            painter.rect_stroke(rect, Rounding::same(8.0), Stroke::new(1.0, BUTTON_EDGE));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::proportional(16.0),
                Color32::from_rgb(235, 238, 245),
            );
        }
        response.clicked()
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(PANEL_FILL)
            .rounding(Rounding::same(8.0))
            .stroke(Stroke::new(1.0, BUTTON_EDGE))
            .inner_margin(egui::Margin::symmetric(10.0, 6.0))
            .show(ui, |ui| {
                ui.set_min_height(52.0);
                ui.set_max_height(52.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.pad.display())
                            .font(egui::FontId::proportional(26.0))
                            .color(Color32::WHITE),
                    );
                });
            });
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        let btn_w = (ui.available_width() - 24.0) / 4.0;
        let btn_h = 42.0;

        let rows: [[(&str, KeyInput); 4]; 6] = [
            [
                ("(", KeyInput::OpenParen),
                (")", KeyInput::CloseParen),
                ("//", KeyInput::Op(BinKey::FloorDiv)),
                ("^", KeyInput::Op(BinKey::Pow)),
            ],
            [
                ("C", KeyInput::Clear),
                ("⌫", KeyInput::Backspace),
                ("%", KeyInput::Op(BinKey::Rem)),
                ("/", KeyInput::Op(BinKey::Div)),
            ],
            [
                ("7", KeyInput::Digit('7')),
                ("8", KeyInput::Digit('8')),
                ("9", KeyInput::Digit('9')),
                ("*", KeyInput::Op(BinKey::Mul)),
            ],
            [
                ("4", KeyInput::Digit('4')),
                ("5", KeyInput::Digit('5')),
                ("6", KeyInput::Digit('6')),
                ("-", KeyInput::Op(BinKey::Sub)),
            ],
            [
                ("1", KeyInput::Digit('1')),
                ("2", KeyInput::Digit('2')),
                ("3", KeyInput::Digit('3')),
                ("+", KeyInput::Op(BinKey::Add)),
            ],
            [
                ("+/-", KeyInput::ToggleSign),
                ("0", KeyInput::Digit('0')),
                (".", KeyInput::Dot),
                ("=", KeyInput::Equals),
            ],
        ];

        for row in rows {
            ui.horizontal(|ui| {
                for (label, input) in row {
                    if self.glass_button(ui, label, btn_w, btn_h) {
                        self.pad.press(input);
                    }
                }
            });
        }
    }
}

impl eframe::App for GlassCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        for input in collect_key_inputs(ctx) {
            self.pad.press(input);
        }

        let time = ctx.input(|i| i.time);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("view", |ui| {
                    if ui
                        .checkbox(&mut self.settings.animate, "animate background")
                        .changed()
                    {
                        self.save_settings();
                        ui.close_menu();
                    }
                    ui.separator();
                    for (label, speed) in [("slow", 0.5), ("normal", 1.0), ("fast", 2.0)] {
                        if ui
                            .selectable_label(self.settings.speed == speed, label)
                            .clicked()
                        {
                            self.settings.speed = speed;
                            self.save_settings();
                            ui.close_menu();
                        }
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(GLASS_BG))
            .show(ctx, |ui| {
                if self.settings.animate {
                    self.paint_background(ui, time);
                }
                egui::Frame::none()
                    .inner_margin(egui::Margin::same(8.0))
                    .show(ui, |ui| {
                        self.render_display(ui);
                        ui.add_space(8.0);
                        self.render_buttons(ui);
                    });
            });

        if self.show_about {
            egui::Window::new("about calcglass")
                .collapsible(false)
                .resizable(false)
                .default_width(230.0)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("calcglass");
                        ui.label("the same calculator, behind glass");
                        ui.label("keys: 0-9 + - * / % ( ) Enter Esc");
                        ui.add_space(4.0);
                        if ui.button("ok").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }

        self.scheduler.set_animating(self.settings.animate);
        self.scheduler.tick(ctx);
    }
}
