use super::ThemeChoice;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_pixel(pixel: u32) -> Color {
        Color {
            r: ((pixel >> 16) & 0xFF) as u8,
            g: ((pixel >> 8) & 0xFF) as u8,
            b: (pixel & 0xFF) as u8,
        }
    }

    /// Packs as `0x00RRGGBB`, the layout softbuffer expects.
    pub const fn to_pixel(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// Window and tab bar colors resolved from a [`ThemeChoice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    // -- Window --
    pub content_bg: Color,
    pub sidebar_bg: Color,
    pub divider: Color,

    // -- Toolbar / tab bar --
    pub bar_bg: Color,
    pub tab_bg: Color,
    pub selected_tab_bg: Color,
    pub tab_title: Color,
    pub selected_tab_title: Color,
    pub lifted_tab_border: Color,
    pub close_button: Color,
    pub plus_button: Color,
    pub sidebar_toggle: Color,
}

impl ThemeChoice {
    pub fn resolve(&self) -> ThemePalette {
        match self {
            ThemeChoice::Dark => ThemePalette::dark(),
            ThemeChoice::Light => ThemePalette::light(),
        }
    }
}

impl ThemePalette {
    fn dark() -> Self {
        Self {
            content_bg: Color::from_pixel(0x282C34),
            sidebar_bg: Color::from_pixel(0x21252B),
            divider: Color::from_pixel(0x181A1F),
            bar_bg: Color::from_pixel(0x1E2127),
            tab_bg: Color::from_pixel(0x2E333C),
            selected_tab_bg: Color::from_pixel(0x3E4451),
            tab_title: Color::from_pixel(0x9DA5B4),
            selected_tab_title: Color::from_pixel(0xE6E9EF),
            lifted_tab_border: Color::from_pixel(0xB4BEFE),
            close_button: Color::from_pixel(0x6C7480),
            plus_button: Color::from_pixel(0x6C7480),
            sidebar_toggle: Color::from_pixel(0x6C7480),
        }
    }

    fn light() -> Self {
        Self {
            content_bg: Color::from_pixel(0xEFF1F5),
            sidebar_bg: Color::from_pixel(0xE6E9EF),
            divider: Color::from_pixel(0xCCD0DA),
            bar_bg: Color::from_pixel(0xDCE0E8),
            tab_bg: Color::from_pixel(0xE6E9EF),
            selected_tab_bg: Color::from_pixel(0xBCC0CC),
            tab_title: Color::from_pixel(0x5C5F77),
            selected_tab_title: Color::from_pixel(0x1E1E2E),
            lifted_tab_border: Color::from_pixel(0x7287FD),
            close_button: Color::from_pixel(0x8C8FA1),
            plus_button: Color::from_pixel(0x8C8FA1),
            sidebar_toggle: Color::from_pixel(0x8C8FA1),
        }
    }
}
