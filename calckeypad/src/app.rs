//! calckeypad application

use calccore::input::collect_key_inputs;
use calccore::keypad::{BinKey, KeyInput, Keypad};
use calccore::theme::{menu_bar, CalcTheme};
use egui::Context;

pub struct KeypadApp {
    pad: Keypad,
    show_about: bool,
}

impl KeypadApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            pad: Keypad::new(),
            show_about: false,
        }
    }

    fn render_button(&self, ui: &mut egui::Ui, label: &str, width: f32, height: f32) -> bool {
        ui.add_sized([width, height], egui::Button::new(label)).clicked()
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let display_height = 48.0;
        CalcTheme::display_frame().show(ui, |ui| {
            ui.set_min_height(display_height);
            ui.set_max_height(display_height);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(self.pad.display())
                        .font(egui::FontId::proportional(26.0))
                        .strong(),
                );
            });
        });
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        let btn_w = (ui.available_width() - 24.0) / 4.0;
        let btn_h = 38.0;

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
                    if self.render_button(ui, label, btn_w, btn_h) {
                        self.pad.press(input);
                    }
                }
            });
        }
    }
}

impl eframe::App for KeypadApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        for input in collect_key_inputs(ctx) {
            self.pad.press(input);
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_display(ui);
            ui.add_space(8.0);
            self.render_buttons(ui);
        });

        if self.show_about {
            egui::Window::new("about calculator")
                .collapsible(false)
                .resizable(false)
                .default_width(220.0)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("calculator");
                        ui.label("type an expression, press = to evaluate");
                        ui.label("keys: 0-9 + - * / % ( ) Enter Esc");
                        ui.add_space(4.0);
                        if ui.button("ok").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
