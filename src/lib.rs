//! Small styled widgets for [`egui`](eframe::egui) applications.
//!
//! - [`AlertDialog`](widgets::AlertDialog): modal message with a severity theme.
//! - [`HoverButton`](widgets::HoverButton): button that recolors while hovered.
//! - [`PlaceholderEntry`](widgets::PlaceholderEntry): text field with grey hint text.
//! - [`StyledTable`](widgets::StyledTable): header plus zebra-striped rows.
//!
//! Every widget draws its text in the Montserrat families, so install them with
//! [`themes::fonts::install_fonts`] before the first frame.

pub mod prelude;
pub mod themes;
pub mod widgets;
