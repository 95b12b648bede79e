use crossterm::style::Color;

pub fn header_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn team_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn message_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
