use ratatui::style::Color;

/// Colors used by the strip and status bar
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey1: Color,
    pub grey2: Color,

    // Semantic colors
    pub accent: Color,
    pub paused: Color,
    pub warning: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            paused: Color::Rgb(0xd8, 0xa6, 0x57),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
            info: Color::Rgb(0x7d, 0xae, 0xa3),
        }
    }
}

impl Theme {
    /// Blend `color` toward the background by `1 - opacity`.
    /// Terminals have no alpha, so opacity is emulated this way.
    pub fn fade(&self, color: Color, opacity: f64) -> Color {
        match (color, self.bg0) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
                let t = opacity.clamp(0.0, 1.0);
                let mix = |fg: u8, bg: u8| (bg as f64 + (fg as f64 - bg as f64) * t).round() as u8;
                Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
            }
            _ => color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        let theme = Theme::default();
        assert_eq!(theme.fade(theme.fg0, 1.0), theme.fg0);
        assert_eq!(theme.fade(theme.fg0, 0.0), theme.bg0);
    }

    #[test]
    fn test_fade_leaves_named_colors_alone() {
        let theme = Theme::default();
        assert_eq!(theme.fade(Color::Red, 0.5), Color::Red);
    }
}
