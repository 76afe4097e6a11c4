use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use styled_widgets::prelude::*;
use styled_widgets::themes::{self, fonts};

/// Show every styled widget in one window.
#[derive(Parser, Debug)]
#[command(name = "showcase")]
struct Args {
    /// Directory with Montserrat-Regular.ttf and Montserrat-Bold.ttf
    /// [default: $STYLED_WIDGETS_FONT_DIR]
    #[arg(long)]
    font_dir: Option<PathBuf>,
}

struct Showcase {
    name: PlaceholderEntry,
    email: PlaceholderEntry,
    add: HoverButton,
    severity_buttons: Vec<(Severity, HoverButton)>,
    table: StyledTable,
    contacts: Vec<[String; 2]>,
    alert: Option<AlertDialog>,
}

impl Showcase {
    fn new() -> Self {
        let severity_buttons = Severity::ALL
            .into_iter()
            .map(|severity| {
                let button = HoverButton::new(severity.name())
                    .with_background(severity.accent())
                    .with_text_color(themes::WHITE)
                    .with_font(fonts::bold(12.0));
                (severity, button)
            })
            .collect();

        Self {
            name: PlaceholderEntry::new("Name"),
            email: PlaceholderEntry::new("Email"),
            add: HoverButton::new("Add")
                .with_background(themes::HEADER_BLUE)
                .with_text_color(themes::WHITE)
                .with_font(fonts::bold(12.0)),
            severity_buttons,
            table: StyledTable::with_columns(["#", "Name", "Email"]),
            contacts: Vec::new(),
            alert: None,
        }
    }

    fn add_contact(&mut self) {
        let name = self.name.value().trim().to_owned();
        if name.is_empty() {
            self.alert = Some(AlertDialog::new(
                "Missing name",
                "Type a name before adding a contact.",
                Severity::Error,
            ));
            return;
        }

        self.contacts.push([name, self.email.value().to_owned()]);
        self.table.replace_data(
            self.contacts
                .iter()
                .enumerate()
                .map(|(index, [name, email])| {
                    [(index + 1).to_string(), name.clone(), email.clone()]
                }),
        );
        self.name.set_value("");
        self.email.set_value("");
        log::info!("{} contacts", self.contacts.len());
    }
}

impl eframe::App for Showcase {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(themes::WHITE))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add(&mut self.name);
                    ui.add(&mut self.email);
                    if ui.add(&mut self.add).clicked() {
                        self.add_contact();
                    }
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    for (severity, button) in &mut self.severity_buttons {
                        if ui.add(button).clicked() {
                            self.alert = Some(AlertDialog::new(
                                format!("{} alert", severity.name()),
                                format!("This is how a {severity} message looks."),
                                *severity,
                            ));
                        }
                    }
                });

                ui.add_space(12.0);
                ui.add(&mut self.table);
            });

        if let Some(alert) = &mut self.alert {
            if let Some(how) = alert.show(ctx) {
                log::info!("alert closed via {how:?}");
                self.alert = None;
            }
        }
    }
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let sources = args
        .font_dir
        .map(FontSources::from_dir)
        .unwrap_or_else(FontSources::from_env);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "showcase",
        native_options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            ctrlc::set_handler(move || ctx.send_viewport_cmd(egui::ViewportCommand::Close))?;

            install_fonts(&cc.egui_ctx, &sources);
            cc.egui_ctx.set_theme(egui::Theme::Light);

            Ok(Box::new(Showcase::new()))
        }),
    )
}
