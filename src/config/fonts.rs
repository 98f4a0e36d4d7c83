use std::fs;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use tracing::{debug, warn};

use super::FontConfig;

/// Installed fonts tried in order when no path is configured.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Loads the tab title font: the configured path first, then the system
/// candidates. `None` when nothing usable is installed.
pub fn load_font(config: &FontConfig) -> Option<Font> {
    let configured = config.path.iter().map(PathBuf::as_path);
    let system = SYSTEM_FONT_CANDIDATES.iter().map(Path::new);
    let found = first_font(configured.chain(system));
    if found.is_none() {
        warn!("no usable font found, tab titles will not be drawn");
    }
    found.map(|(_, font)| font)
}

/// First path in `paths` that reads and parses as a font.
pub(crate) fn first_font<'a>(
    paths: impl IntoIterator<Item = &'a Path>,
) -> Option<(PathBuf, Font)> {
    paths.into_iter().find_map(|path| {
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                debug!(path = %path.display(), %err, "font not readable");
                return None;
            }
        };
        match Font::from_bytes(data, FontSettings::default()) {
            Ok(font) => {
                debug!(path = %path.display(), "font loaded");
                Some((path.to_path_buf(), font))
            }
            Err(err) => {
                warn!(path = %path.display(), err, "not a usable font");
                None
            }
        }
    })
}
