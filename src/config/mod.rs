mod fonts;
mod model;
mod persistence;
mod theme;

pub use fonts::load_font;
pub use model::{
    AppConfig, BehaviorConfig, DEFAULT_FONT_SIZE, FontConfig, LayoutConfig, ReorderConfig,
    ThemeChoice,
};
pub use persistence::{config_base_dir, config_path, load_config, load_config_from, save_config_to};
pub use theme::{Color, ThemePalette};
