//! Modal alert dialog with a severity-driven accent color and glyph.
//!
//! ```no_run
//! # use styled_widgets::widgets::AlertDialog;
//! # fn frame(ctx: &eframe::egui::Context, alert: &mut Option<AlertDialog>) {
//! if alert.as_mut().is_some_and(|dialog| dialog.show(ctx).is_some()) {
//!     *alert = None;
//! }
//! # }
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use eframe::egui::{self, Color32, CursorIcon, Id, Key, Label, Modifiers, RichText, Vec2};

use crate::themes::{self, fonts};

pub const ALERT_SIZE: Vec2 = Vec2::new(400.0, 200.0);
pub const MESSAGE_WRAP_WIDTH: f32 = 350.0;

const OK_BUTTON_SIZE: Vec2 = Vec2::new(100.0, 30.0);

static NEXT_ALERT: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Error,
    Success,
    Info,
    Warning,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Success,
        Severity::Info,
        Severity::Warning,
    ];

    /// Unknown names select [`Severity::Error`].
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "info" => Severity::Info,
            "warning" => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }

    pub fn accent(self) -> Color32 {
        match self {
            Severity::Error => themes::ERROR,
            Severity::Success => themes::SUCCESS,
            Severity::Info => themes::INFO,
            Severity::Warning => themes::WARNING,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Error => "✖",
            Severity::Success => "✓",
            Severity::Info => "ℹ",
            Severity::Warning => "⚠",
        }
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Severity::parse(name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How an [`AlertDialog`] was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    Ok,
    Enter,
    Escape,
    Programmatic,
}

#[derive(Debug)]
pub struct AlertDialog {
    id: Id,
    title: String,
    message: String,
    severity: Severity,
    open: bool,
    dismissal: Option<Dismissal>,
}

impl AlertDialog {
    /// The dialog is open as soon as it exists; hand it to [`AlertDialog::show`]
    /// every frame until that returns `Some`.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<Severity>,
    ) -> Self {
        let title = title.into();
        let severity = severity.into();
        let serial = NEXT_ALERT.fetch_add(1, Ordering::Relaxed);
        log::debug!("alert #{serial} opened: {severity} {title:?}");

        Self {
            id: Id::new(("styled_widgets_alert", serial)),
            title,
            message: message.into(),
            severity,
            open: true,
            dismissal: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The action that closed the dialog, once it is closed.
    pub fn dismissal(&self) -> Option<Dismissal> {
        self.dismissal
    }

    fn dismiss(&mut self, how: Dismissal) -> Option<Dismissal> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.dismissal = Some(how);
        log::debug!("alert {:?} dismissed via {how:?}", self.title);
        Some(how)
    }

    pub fn close(&mut self) -> Option<Dismissal> {
        self.dismiss(Dismissal::Programmatic)
    }

    pub fn click_ok(&mut self) -> Option<Dismissal> {
        self.dismiss(Dismissal::Ok)
    }

    /// Enter and Escape close the dialog; every other key is ignored.
    pub fn handle_key(&mut self, key: Key) -> Option<Dismissal> {
        match key {
            Key::Enter => self.dismiss(Dismissal::Enter),
            Key::Escape => self.dismiss(Dismissal::Escape),
            _ => None,
        }
    }

    /// Render the dialog above everything else in `ctx`. Returns the dismissal on
    /// the frame the dialog closes; a closed dialog draws nothing.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<Dismissal> {
        if !self.open {
            return None;
        }

        let accent = self.severity.accent();
        let frame = egui::Frame::new()
            .fill(themes::WHITE)
            .stroke(egui::Stroke::new(1.0, themes::CELL_BORDER))
            .corner_radius(4.0);

        let modal = egui::Modal::new(self.id).frame(frame).show(ctx, |ui| {
            ui.set_min_size(ALERT_SIZE);
            ui.set_max_size(ALERT_SIZE);
            ui.spacing_mut().item_spacing = Vec2::ZERO;

            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(
                    RichText::new(self.severity.glyph())
                        .font(fonts::bold(30.0))
                        .color(accent),
                );

                ui.add_space(10.0);
                ui.label(
                    RichText::new(&self.title)
                        .font(fonts::bold(14.0))
                        .color(themes::TEXT_DARK),
                );
                ui.add_space(5.0);

                ui.scope(|ui| {
                    ui.set_max_width(MESSAGE_WRAP_WIDTH);
                    ui.add(
                        Label::new(
                            RichText::new(&self.message)
                                .font(fonts::regular(12.0))
                                .color(themes::TEXT_MUTED),
                        )
                        .wrap(),
                    );
                });
                ui.add_space(15.0);

                ui.add_space(10.0);
                let ok = ui
                    .add(
                        egui::Button::new(
                            RichText::new("OK")
                                .font(fonts::bold(12.0))
                                .color(themes::WHITE),
                        )
                        .fill(accent)
                        .corner_radius(0.0)
                        .min_size(OK_BUTTON_SIZE),
                    )
                    .on_hover_cursor(CursorIcon::PointingHand);
                ui.add_space(10.0);
                ok.clicked()
            })
            .inner
        });

        if modal.inner {
            return self.click_ok();
        }

        if modal.is_top_modal {
            let key = ctx.input_mut(|input| {
                [Key::Escape, Key::Enter]
                    .into_iter()
                    .find(|key| input.consume_key(Modifiers::NONE, *key))
            });
            if let Some(key) = key {
                return self.handle_key(key);
            }
        }

        None
    }
}
