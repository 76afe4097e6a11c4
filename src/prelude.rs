// Preludes: re-export commonly used items for convenience
pub use crate::themes::fonts::{install_fonts, FontSources};
pub use crate::themes::{EntryStyle, Styled, TableStyle};
pub use crate::widgets::{
    AlertDialog, Dismissal, HoverButton, PlaceholderEntry, Severity, StyledTable,
};
