//! Button components for the board commands.

use egui::{Align2, Color32, CornerRadius, CursorIcon, Sense, Ui, vec2};

use crate::{sizing, theme};

/// A command button with a text label.
/// Uses a solid accent background when marked as the primary action.
pub struct CommandButton<'a> {
    label: &'a str,
    accent: bool,
    min_width: Option<f32>,
    height: f32,
    font_size: f32,
}

impl<'a> CommandButton<'a> {
    /// Create a new command button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            accent: false,
            min_width: None,
            height: sizing::BUTTON_HEIGHT,
            font_size: 12.0,
        }
    }

    /// Render as the primary action (solid accent background).
    pub fn accent(mut self, accent: bool) -> Self {
        self.accent = accent;
        self
    }

    /// Set minimum width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        // Calculate text size for proper button width
        let font_id = egui::FontId::proportional(self.font_size);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_string(),
            font_id.clone(),
            Color32::PLACEHOLDER, // Color doesn't matter for sizing
        );
        let text_width = galley.size().x;
        let width = self
            .min_width
            .unwrap_or(text_width + 16.0)
            .max(text_width + 16.0);
        let size = vec2(width, self.height);

        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.accent {
                theme::ACCENT
            } else if response.hovered() {
                Color32::from_gray(235)
            } else {
                Color32::from_gray(245)
            };

            let text_color = if self.accent {
                Color32::WHITE
            } else {
                Color32::from_gray(80)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                font_id,
                text_color,
            );
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
