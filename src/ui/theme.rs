use ratatui::style::Color;

/// Palette for the gallery screen.
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,

    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    pub accent_primary: Color,
    pub accent_secondary: Color,
    pub accent_highlight: Color,

    pub warning: Color,

    pub border: Color,
    pub border_focused: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            bg: Color::Reset,

            fg_primary: Color::Rgb(10, 15, 20),
            fg_secondary: Color::Rgb(26, 45, 66),
            fg_muted: Color::Rgb(42, 63, 85),

            accent_primary: Color::Rgb(30, 69, 112),
            accent_secondary: Color::Rgb(46, 90, 144),
            accent_highlight: Color::Rgb(153, 101, 21),

            warning: Color::Rgb(153, 101, 21),

            border: Color::Rgb(184, 212, 241),
            border_focused: Color::Rgb(46, 90, 144),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,

            fg_primary: Color::Rgb(245, 250, 255),
            fg_secondary: Color::Rgb(200, 220, 240),
            fg_muted: Color::Rgb(80, 100, 120),

            accent_primary: Color::Rgb(100, 200, 255),
            accent_secondary: Color::Rgb(80, 250, 150),
            accent_highlight: Color::Rgb(255, 215, 95),

            warning: Color::Rgb(255, 215, 95),

            border: Color::Rgb(60, 90, 120),
            border_focused: Color::Rgb(100, 200, 255),
        }
    }

    /// Pick a palette from `TESSERA_THEME`, then `COLORFGBG`, defaulting to dark.
    pub fn detect() -> Self {
        let theme = std::env::var("TESSERA_THEME").ok();
        let colorfgbg = std::env::var("COLORFGBG").ok();
        if is_light(theme.as_deref(), colorfgbg.as_deref()) {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

fn is_light(theme: Option<&str>, colorfgbg: Option<&str>) -> bool {
    if let Some(theme) = theme {
        return theme.trim().eq_ignore_ascii_case("light");
    }
    // "fg;bg" with ANSI indices; 7 and 15 are light backgrounds.
    colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg == 7 || bg == 15)
}
