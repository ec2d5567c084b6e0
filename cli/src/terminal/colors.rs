use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 102, g: 204, b: 153 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 196, b: 87 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 214, g: 214, b: 214 };
pub const IPV4_ADDR: Color = Color::TrueColor { r: 115, g: 170, b: 255 };
pub const MAC_ADDR: Color = Color::TrueColor { r: 200, g: 140, b: 255 };
pub const VENDOR: Color = Color::TrueColor { r: 255, g: 160, b: 122 };
pub const UNKNOWN: Color = Color::BrightBlack;
