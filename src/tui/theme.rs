use ratatui::style::Color;

/// Color palette for the TUI. Fixed — there is no config surface.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Brand blue, used for the title bar and action affordances
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x18),
            text: Color::Rgb(0xC8, 0xD0, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x00, 0x9E, 0xE5),
            dim: Color::Rgb(0x70, 0x78, 0x80),
            red: Color::Rgb(0xE5, 0x00, 0x1F),
            selection_bg: Color::Rgb(0x1C, 0x2A, 0x38),
        }
    }
}
