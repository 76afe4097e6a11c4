mod alert;
mod hover_button;
mod placeholder_entry;
mod styled_table;

pub use alert::{AlertDialog, Dismissal, Severity, ALERT_SIZE, MESSAGE_WRAP_WIDTH};
pub use hover_button::HoverButton;
pub use placeholder_entry::PlaceholderEntry;
pub use styled_table::{stripe, StyledTable, TableRow};
