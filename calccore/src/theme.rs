//! Shared look and feel for the calcsuite apps.
//!
//! A quiet light theme: paper background, dark ink, subtle rounding.
//! calcglass layers its own translucent palette on top of this base.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The suite palette.
pub struct CalcColors;

impl CalcColors {
    pub const PAPER: Color32 = Color32::from_rgb(245, 245, 242);
    pub const INK: Color32 = Color32::from_rgb(24, 24, 24);
    /// Light gray the result fade starts from.
    pub const FADED: Color32 = Color32::from_rgb(204, 204, 204);
    pub const OUTLINE: Color32 = Color32::from_rgb(160, 160, 160);
}

/// Theme configuration applied per-app in `main`.
pub struct CalcTheme {
    pub font_size_body: f32,
    pub font_size_display: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_display: 28.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl CalcTheme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_display, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = CalcColors::PAPER;
        visuals.panel_fill = CalcColors::PAPER;
        visuals.window_rounding = Rounding::same(6.0);
        visuals.menu_rounding = Rounding::same(4.0);
        visuals.window_stroke = Stroke::new(1.0, CalcColors::OUTLINE);
        visuals.widgets.inactive.rounding = Rounding::same(4.0);
        visuals.widgets.hovered.rounding = Rounding::same(4.0);
        visuals.widgets.active.rounding = Rounding::same(4.0);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, CalcColors::OUTLINE);
        visuals.override_text_color = Some(CalcColors::INK);
        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Frame for the calculator display: white fill, 1px outline.
    pub fn display_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(Color32::WHITE)
            .stroke(Stroke::new(1.0, CalcColors::OUTLINE))
            .rounding(Rounding::same(4.0))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
    }
}

/// Menu bar strip with the suite's framing.
pub fn menu_bar<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(CalcColors::PAPER)
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}
