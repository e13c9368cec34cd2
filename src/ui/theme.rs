use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub comment: Color,   // Grey
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub compare: Color,   // Yellow for the active comparison
    pub pointer_left: Color,
    pub pointer_right: Color,
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub type_name: Color, // Cyan for type names
    pub function: Color,
    pub cell_bg: Color, // Resting background for character cells
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    comment: Color::Rgb(108, 112, 134),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    compare: Color::Rgb(249, 226, 175),       // Yellow highlight
    pointer_left: Color::Rgb(137, 180, 250),  // Blue, matches primary
    pointer_right: Color::Rgb(245, 194, 231), // Pink
    keyword: Color::Rgb(137, 180, 250),       // Blue for keywords
    string: Color::Rgb(250, 179, 135),        // Orange for strings
    number: Color::Rgb(250, 179, 135),        // Orange for numbers
    type_name: Color::Rgb(148, 226, 213),     // Cyan/teal for type names
    function: Color::Rgb(249, 226, 175),      // Yellow for functions
    cell_bg: Color::Rgb(49, 50, 68),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
};
