//! TrueType font loading for chart text.
//!
//! Plotters is built without its system font backend, so text is drawn with
//! `ab_glyph` from a font we register ourselves. The font comes from `--font`
//! (or `MMK_FONT`) or from a short list of common system locations.
//! Registration happens at most once per process.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::style::{FontStyle, register_font};

/// Family name used for every text element.
pub const FONT_FAMILY: &str = "sans-serif";

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static FONT_READY: OnceLock<bool> = OnceLock::new();

/// Register a font for chart text; returns whether text can be drawn.
///
/// The first call decides for the whole process; later calls return the same
/// answer regardless of `explicit`.
pub fn ensure_font(explicit: Option<&Path>) -> bool {
    *FONT_READY.get_or_init(|| register(explicit))
}

fn register(explicit: Option<&Path>) -> bool {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(discover) else {
        log::warn!("No TrueType font found; charts will be rendered without text (set --font or MMK_FONT)");
        return false;
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Failed to read font '{}': {e}; charts will be rendered without text", path.display());
            return false;
        }
    };

    // Plotters keeps a `'static` reference to registered font data.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    match register_font(FONT_FAMILY, FontStyle::Normal, bytes) {
        Ok(()) => {
            log::info!("Using chart font {}", path.display());
            true
        }
        Err(_) => {
            log::warn!("Font '{}' is not usable; charts will be rendered without text", path.display());
            false
        }
    }
}

fn discover() -> Option<PathBuf> {
    SYSTEM_FONTS.iter().map(PathBuf::from).find(|p| p.is_file())
}
