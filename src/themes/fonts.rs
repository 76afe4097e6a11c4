//! Montserrat font families used by every widget in this crate.
//!
//! The font files are not bundled. Point [`FontSources`] at a directory holding
//! `Montserrat-Regular.ttf` and `Montserrat-Bold.ttf`, or leave it empty to render
//! both families with egui's built-in proportional fonts.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily, FontId};

pub type FontResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub const MONTSERRAT: &str = "Montserrat";
pub const MONTSERRAT_BOLD: &str = "Montserrat Bold";

/// Environment variable naming a directory with the Montserrat font files.
pub const FONT_DIR_VAR: &str = "STYLED_WIDGETS_FONT_DIR";

const REGULAR_FILE: &str = "Montserrat-Regular.ttf";
const BOLD_FILE: &str = "Montserrat-Bold.ttf";

pub fn regular(size: f32) -> FontId {
    FontId::new(size, FontFamily::Name(MONTSERRAT.into()))
}

pub fn bold(size: f32) -> FontId {
    FontId::new(size, FontFamily::Name(MONTSERRAT_BOLD.into()))
}

/// Where to read the font files from. `None` means "use the built-in fallback".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontSources {
    pub regular: Option<PathBuf>,
    pub bold: Option<PathBuf>,
}

impl FontSources {
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            regular: Some(dir.join(REGULAR_FILE)),
            bold: Some(dir.join(BOLD_FILE)),
        }
    }

    pub fn from_env() -> Self {
        match std::env::var_os(FONT_DIR_VAR) {
            Some(dir) if !dir.is_empty() => Self::from_dir(PathBuf::from(dir)),
            _ => Self::default(),
        }
    }
}

fn read_font(path: &Path) -> FontResult<FontData> {
    let bytes = std::fs::read(path)
        .map_err(|err| format!("failed to read font {}: {err}", path.display()))?;
    Ok(FontData::from_owned(bytes))
}

/// Bind `family` to the font at `path` (if any) ahead of the proportional fallbacks.
fn bind_family(
    fonts: &mut FontDefinitions,
    family: &str,
    key: &str,
    font: Option<FontData>,
    fallback: &[String],
) {
    let mut chain = Vec::with_capacity(fallback.len() + 1);
    if let Some(font) = font {
        fonts.font_data.insert(key.to_owned(), Arc::new(font));
        chain.push(key.to_owned());
    }
    chain.extend(fallback.iter().cloned());
    fonts.families.insert(FontFamily::Name(family.into()), chain);
}

fn definitions(regular: Option<FontData>, bold: Option<FontData>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    let fallback = fonts
        .families
        .get(&FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();

    bind_family(&mut fonts, MONTSERRAT, "montserrat_regular", regular, &fallback);
    bind_family(&mut fonts, MONTSERRAT_BOLD, "montserrat_bold", bold, &fallback);
    fonts
}

/// Font definitions with both Montserrat families bound; any configured file that
/// cannot be read is an error.
pub fn try_widget_fonts(sources: &FontSources) -> FontResult<FontDefinitions> {
    let regular = sources.regular.as_deref().map(read_font).transpose()?;
    let bold = sources.bold.as_deref().map(read_font).transpose()?;
    Ok(definitions(regular, bold))
}

/// Like [`try_widget_fonts`], but a file that cannot be read is logged and its
/// family falls back to the built-in proportional fonts.
pub fn widget_fonts(sources: &FontSources) -> FontDefinitions {
    let load = |path: &Option<PathBuf>| {
        let path = path.as_deref()?;
        match read_font(path) {
            Ok(font) => {
                log::info!("loaded font {}", path.display());
                Some(font)
            }
            Err(err) => {
                log::warn!("{err}; using built-in fallback");
                None
            }
        }
    };

    definitions(load(&sources.regular), load(&sources.bold))
}

/// Install the widget fonts on `ctx`. Call once before the first frame.
pub fn install_fonts(ctx: &egui::Context, sources: &FontSources) {
    ctx.set_fonts(widget_fonts(sources));
}
