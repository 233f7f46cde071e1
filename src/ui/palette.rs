//! Theme colors

use crate::config::Theme;
use ratatui::style::Color;

/// Colors resolved from the active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub error: Color,
    pub success_bg: Color,
    pub success_fg: Color,
    pub error_bg: Color,
    pub error_fg: Color,
}

const MINT: Color = Color::Rgb(0xb8, 0xf2, 0xe6);
const SKY: Color = Color::Rgb(0xae, 0xd9, 0xe0);
const SLATE: Color = Color::Rgb(0x5e, 0x64, 0x72);

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                accent: SKY,
                text: SLATE,
                muted: Color::DarkGray,
                error: Color::Red,
                success_bg: SKY,
                success_fg: SLATE,
                error_bg: Color::Red,
                error_fg: Color::White,
            },
            Theme::Dark => Self {
                accent: MINT,
                text: SKY,
                muted: Color::Gray,
                error: Color::LightRed,
                success_bg: MINT,
                success_fg: SLATE,
                error_bg: Color::Red,
                error_fg: Color::White,
            },
        }
    }
}
