use eframe::egui::{Color32, FontId, Vec2};

pub mod fonts;
mod style;
pub use style::Styled;

pub const ERROR: Color32 = Color32::from_rgb(0xFF, 0x52, 0x52);
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
pub const INFO: Color32 = Color32::from_rgb(0x21, 0x96, 0xF3);
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xC1, 0x07);

pub const HOVER_BLUE: Color32 = Color32::from_rgb(0x4A, 0x85, 0xF0);
pub const HEADER_BLUE: Color32 = Color32::from_rgb(0x5E, 0x95, 0xFF);
pub const STRIPE_EVEN: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF5);
pub const WHITE: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);
pub const BLACK: Color32 = Color32::from_rgb(0x00, 0x00, 0x00);

pub const TEXT_DARK: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
pub const PLACEHOLDER_GREY: Color32 = Color32::from_rgb(0xAA, 0xAA, 0xAA);

/// Stock face of a plain desktop push button.
pub const BUTTON_FACE: Color32 = Color32::from_rgb(0xD9, 0xD9, 0xD9);
pub const CELL_BORDER: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);

/// Style of the `PlaceholderEntry` widget.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryStyle {
    pub text_color: Color32,
    pub placeholder_color: Color32,
    pub font: FontId,
}

impl Default for EntryStyle {
    fn default() -> Self {
        Self {
            text_color: TEXT_DARK,
            placeholder_color: PLACEHOLDER_GREY,
            font: fonts::regular(12.0),
        }
    }
}

/// Style of the `StyledTable` widget.
#[derive(Clone, Debug, PartialEq)]
pub struct TableStyle {
    pub header_fill: Color32,
    pub header_text: Color32,
    pub header_font: FontId,
    pub cell_text: Color32,
    pub cell_font: FontId,
    pub stripe_even: Color32,
    pub stripe_odd: Color32,
    pub border: Color32,
    /// Horizontal and vertical padding inside every cell.
    pub padding: Vec2,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            header_fill: HEADER_BLUE,
            header_text: WHITE,
            header_font: fonts::bold(12.0),
            cell_text: TEXT_DARK,
            cell_font: fonts::regular(10.0),
            stripe_even: STRIPE_EVEN,
            stripe_odd: WHITE,
            border: CELL_BORDER,
            padding: Vec2::new(10.0, 8.0),
        }
    }
}

// Color utilities: simple sRGB linear interpolation for quick palette derivation
pub fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let r = (a.r() as f32 * (1.0 - t) + b.r() as f32 * t).round() as u8;
    let g = (a.g() as f32 * (1.0 - t) + b.g() as f32 * t).round() as u8;
    let bch = (a.b() as f32 * (1.0 - t) + b.b() as f32 * t).round() as u8;
    Color32::from_rgb(r, g, bch)
}
