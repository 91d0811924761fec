use colored::Color;

pub const PRIMARY: Color = Color::BrightWhite;
pub const ACCENT: Color = Color::TrueColor { r: 0x2d, g: 0xff, b: 0x7a };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MUTED: Color = Color::BrightBlack;
pub const ERROR: Color = Color::TrueColor { r: 0xff, g: 0x6b, b: 0x6b };
