use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::Yellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const BLUE_TNT: Color = Color::BrightBlue;
pub const RED_TNT: Color = Color::BrightRed;
pub const BITS: Color = Color::BrightYellow;
