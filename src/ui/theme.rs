use crate::playback::Rgb;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub type_name: Color, // Cyan for type names
    pub swap: Color,      // Boxes in flight
    pub highlight: Color, // Emphasized array positions
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),      // Blue for keywords
    string: Color::Rgb(250, 179, 135),       // Orange for strings
    number: Color::Rgb(250, 179, 135),       // Orange for numbers
    border: Color::Rgb(108, 112, 134),       // Grey border
    current_line_bg: Color::Rgb(50, 50, 70), // Slightly lighter BG for current line
    function: Color::Rgb(249, 226, 175),     // Yellow for functions
    type_name: Color::Rgb(148, 226, 213),    // Cyan/teal for type names
    swap: Color::Rgb(249, 226, 175),         // Yellow, same as functions
    highlight: Color::Rgb(245, 194, 231),    // Pink
};

/// Terminal color for an entity color
pub fn entity_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
