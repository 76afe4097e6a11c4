use eframe::egui::{self, Color32, CursorIcon, FontId, Response, RichText, Ui, Widget};

use crate::themes::{self, fonts};

/// A button whose background switches to `hover_color` while the pointer is over it.
///
/// The base color is captured once, when the button is built. Leaving always
/// restores that captured color, even if [`HoverButton::set_fill`] changed the
/// background in the meantime.
#[derive(Clone, Debug)]
#[must_use = "You should put this widget in a ui with `ui.add(&mut widget);`"]
pub struct HoverButton {
    text: String,
    font: FontId,
    text_color: Color32,
    base_color: Color32,
    hover_color: Color32,
    fill: Color32,
    pointer_inside: bool,
}

impl HoverButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: fonts::regular(12.0),
            text_color: themes::BLACK,
            base_color: themes::BUTTON_FACE,
            hover_color: themes::HOVER_BLUE,
            fill: themes::BUTTON_FACE,
            pointer_inside: false,
        }
    }

    /// Initial background; becomes the color restored on leave.
    pub fn with_background(mut self, background: Color32) -> Self {
        self.base_color = background;
        self.fill = background;
        self
    }

    pub fn with_hover_color(mut self, hover_color: Color32) -> Self {
        self.hover_color = hover_color;
        self
    }

    pub fn with_text_color(mut self, text_color: Color32) -> Self {
        self.text_color = text_color;
        self
    }

    pub fn with_font(mut self, font: FontId) -> Self {
        self.font = font;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn base_color(&self) -> Color32 {
        self.base_color
    }

    pub fn hover_color(&self) -> Color32 {
        self.hover_color
    }

    /// The background currently displayed.
    pub fn fill(&self) -> Color32 {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Color32) {
        self.fill = fill;
    }

    pub fn is_hovered(&self) -> bool {
        self.pointer_inside
    }

    pub fn pointer_enter(&mut self) {
        self.pointer_inside = true;
        self.fill = self.hover_color;
    }

    pub fn pointer_leave(&mut self) {
        self.pointer_inside = false;
        self.fill = self.base_color;
    }
}

impl Widget for &mut HoverButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let fill = if ui.is_enabled() {
            self.fill
        } else {
            themes::blend(self.fill, themes::WHITE, 0.65)
        };

        let text = RichText::new(&self.text)
            .font(self.font.clone())
            .color(self.text_color);
        let response = ui
            .add(egui::Button::new(text).fill(fill).corner_radius(0.0))
            .on_hover_cursor(CursorIcon::PointingHand);

        let hovered = response.hovered();
        if hovered != self.pointer_inside {
            if hovered {
                self.pointer_enter();
            } else {
                self.pointer_leave();
            }
            ui.ctx().request_repaint();
        }

        response
    }
}
