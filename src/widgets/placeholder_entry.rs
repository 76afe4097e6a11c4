use eframe::egui::{Color32, Response, RichText, TextEdit, Ui, Widget};

use crate::themes::{EntryStyle, Styled};

/// Single-line text field that shows grey hint text while empty and unfocused.
///
/// Whether the hint is showing is tracked as its own flag, so typing the exact
/// hint text still counts as real input. Read input with [`PlaceholderEntry::value`];
/// [`PlaceholderEntry::display_text`] returns the hint while it is shown.
#[derive(Clone, Debug)]
#[must_use = "You should put this widget in a ui with `ui.add(&mut widget);`"]
pub struct PlaceholderEntry {
    placeholder: String,
    text: String,
    showing_placeholder: bool,
    focused: bool,
    desired_width: Option<f32>,
    style: EntryStyle,
}

impl PlaceholderEntry {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            text: String::new(),
            showing_placeholder: true,
            focused: false,
            desired_width: None,
            style: EntryStyle::default(),
        }
    }

    /// Color of typed text.
    pub fn with_text_color(mut self, color: Color32) -> Self {
        self.style.text_color = color;
        self
    }

    pub fn desired_width(mut self, width: f32) -> Self {
        self.desired_width = Some(width);
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_showing_placeholder(&self) -> bool {
        self.showing_placeholder
    }

    /// The user's input; empty while the placeholder is shown.
    pub fn value(&self) -> &str {
        if self.showing_placeholder {
            ""
        } else {
            &self.text
        }
    }

    pub fn display_text(&self) -> &str {
        if self.showing_placeholder {
            &self.placeholder
        } else {
            &self.text
        }
    }

    pub fn display_color(&self) -> Color32 {
        if self.showing_placeholder {
            self.style.placeholder_color
        } else {
            self.style.text_color
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus_in(&mut self) {
        self.focused = true;
        if self.showing_placeholder {
            self.showing_placeholder = false;
            self.text.clear();
        }
    }

    pub fn focus_out(&mut self) {
        self.focused = false;
        if self.text.is_empty() {
            self.showing_placeholder = true;
        }
    }

    /// Empty the field without changing focus; the hint comes back on focus-out.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replace the typed text. An empty value brings back the placeholder only
    /// while the field is unfocused; a focused field stays empty until focus-out.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.text = value.into();
        self.showing_placeholder = self.text.is_empty() && !self.focused;
    }

    #[cfg(test)]
    fn type_text(&mut self, text: &str) {
        assert!(self.focused, "typing into an unfocused entry");
        self.text.push_str(text);
    }
}

impl Styled for PlaceholderEntry {
    type Style = EntryStyle;

    fn styled(mut self, style: Self::Style) -> Self {
        self.style = style;
        self
    }

    fn style(&self) -> &Self::Style {
        &self.style
    }
}

impl Widget for &mut PlaceholderEntry {
    fn ui(self, ui: &mut Ui) -> Response {
        let width = self
            .desired_width
            .unwrap_or_else(|| ui.spacing().text_edit_width);

        // The buffer is always the real text; it is empty while the hint shows, so
        // keys typed in the frame that focuses the field land in it.
        let mut edit = TextEdit::singleline(&mut self.text)
            .font(self.style.font.clone())
            .text_color(self.style.text_color)
            .desired_width(width);
        if self.showing_placeholder {
            edit = edit.hint_text(
                RichText::new(&self.placeholder)
                    .font(self.style.font.clone())
                    .color(self.style.placeholder_color),
            );
        }
        let response = ui.add(edit);

        if response.gained_focus() || (response.has_focus() && !self.focused) {
            self.focused = true;
            self.showing_placeholder = false;
            ui.ctx().request_repaint();
        }
        if response.lost_focus() {
            self.focus_out();
            ui.ctx().request_repaint();
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes;

    #[test]
    fn starts_with_placeholder() {
        let entry = PlaceholderEntry::new("Email");
        assert_eq!(entry.value(), "");
        assert_eq!(entry.display_text(), "Email");
        assert_eq!(entry.display_color(), themes::PLACEHOLDER_GREY);
    }

    #[test]
    fn type_then_clear_round_trip() {
        let mut entry = PlaceholderEntry::new("Email");

        entry.focus_in();
        assert_eq!(entry.display_text(), "");
        assert_eq!(entry.display_color(), themes::TEXT_DARK);

        entry.type_text("abc");
        entry.focus_out();
        assert_eq!(entry.value(), "abc");
        assert_eq!(entry.display_color(), themes::TEXT_DARK);

        entry.focus_in();
        assert_eq!(entry.value(), "abc");
        entry.clear();
        entry.focus_out();
        assert!(entry.is_showing_placeholder());
        assert_eq!(entry.display_text(), "Email");
        assert_eq!(entry.display_color(), themes::PLACEHOLDER_GREY);
        assert_eq!(entry.value(), "");
    }

    #[test]
    fn typed_text_equal_to_placeholder_is_real_input() {
        let mut entry = PlaceholderEntry::new("Email");
        entry.focus_in();
        entry.type_text("Email");
        entry.focus_out();
        assert_eq!(entry.value(), "Email");

        entry.focus_in();
        assert_eq!(entry.value(), "Email");
    }

    #[test]
    fn custom_text_color() {
        let mut entry = PlaceholderEntry::new("Name").with_text_color(themes::INFO);
        assert_eq!(entry.display_color(), themes::PLACEHOLDER_GREY);
        entry.focus_in();
        assert_eq!(entry.display_color(), themes::INFO);
    }

    #[test]
    fn set_value_follows_unfocused_rules() {
        let mut entry = PlaceholderEntry::new("Name");
        entry.set_value("Ada");
        assert_eq!(entry.value(), "Ada");
        assert!(!entry.is_showing_placeholder());

        entry.set_value("");
        assert!(entry.is_showing_placeholder());
        assert_eq!(entry.display_text(), "Name");
    }

    #[test]
    fn emptying_a_focused_entry_keeps_hint_hidden() {
        let mut entry = PlaceholderEntry::new("Name");
        entry.focus_in();
        entry.type_text("abc");

        entry.set_value("");
        assert!(entry.is_focused());
        assert!(!entry.is_showing_placeholder());
        assert_eq!(entry.display_text(), "");

        entry.type_text("xyz");
        assert_eq!(entry.value(), "xyz");

        entry.set_value("");
        entry.focus_out();
        assert!(entry.is_showing_placeholder());
        assert_eq!(entry.value(), "");
    }

    #[test]
    fn styled_overrides_colors() {
        let style = EntryStyle {
            placeholder_color: themes::WARNING,
            ..EntryStyle::default()
        };
        let entry = PlaceholderEntry::new("Name").styled(style);
        assert_eq!(entry.display_color(), themes::WARNING);
    }
}
