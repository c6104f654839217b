//! 主题和样式定义
//!
//! `site` 主题直接取站点配置里的配色，`dark` 是固定的深色方案。

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

use portfolio_core::types::{parse_hex_color, Palette};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// 0 = Site, 1 = Dark
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);
static SITE_COLORS: OnceLock<ThemeColors> = OnceLock::new();

/// 主题枚举
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Site,
    Dark,
}

/// 设置主题；`site` 主题的颜色只在第一次设置时从配色生成
pub fn set_theme(theme: Theme, palette: &Palette) {
    if theme == Theme::Site && SITE_COLORS.set(ThemeColors::from_palette(palette)).is_err() {
        log::debug!("Site colors already set");
    }
    let index = match theme {
        Theme::Site => 0,
        Theme::Dark => 1,
    };
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => SITE_COLORS
            .get()
            .cloned()
            .unwrap_or_else(|| ThemeColors::from_palette(&Palette::default())),
        _ => ThemeColors::dark(),
    }
}

/// 主题颜色
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub surface: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub accent: Color,
    pub muted: Color,
    /// 提交回执等提示条
    pub notice_bg: Color,
    pub notice_fg: Color,
}

impl ThemeColors {
    /// 由站点配色生成；无法解析的颜色回退到默认配色
    pub fn from_palette(palette: &Palette) -> Self {
        let defaults = Palette::default();
        let pick = |value: &str, fallback: &str| {
            parse_hex_color(value).unwrap_or_else(|| {
                log::warn!("Invalid palette color {value:?}, using {fallback}");
                parse_hex_color(fallback).unwrap_or((0, 0, 0))
            })
        };

        let background = pick(&palette.background, &defaults.background);
        let surface = pick(&palette.surface, &defaults.surface);
        let text = pick(&palette.text, &defaults.text);
        let primary = pick(&palette.primary_action, &defaults.primary_action);
        let secondary = pick(&palette.secondary_action, &defaults.secondary_action);

        Self {
            bg: rgb(background),
            fg: rgb(text),
            surface: rgb(surface),
            border: rgb(mix(text, background)),
            border_focused: rgb(primary),
            highlight: rgb(primary),
            selected_bg: rgb(surface),
            selected_fg: rgb(text),
            accent: rgb(secondary),
            muted: rgb(mix(text, background)),
            notice_bg: rgb(primary),
            notice_fg: rgb(background),
        }
    }

    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            surface: Color::Rgb(45, 45, 45),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(178, 138, 90),
            highlight: Color::Rgb(178, 138, 90),
            selected_bg: Color::Rgb(74, 60, 44),
            selected_fg: Color::White,
            accent: Color::Rgb(206, 170, 120),
            muted: Color::Rgb(128, 128, 128),
            notice_bg: Color::Rgb(154, 116, 73),
            notice_fg: Color::White,
        }
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// 两色各半混合
fn mix(a: (u8, u8, u8), b: (u8, u8, u8)) -> (u8, u8, u8) {
    let half = |x: u8, y: u8| {
        let sum = u16::from(x) + u16::from(y);
        u8::try_from(sum / 2).unwrap_or(u8::MAX)
    };
    (half(a.0, b.0), half(a.1, b.1), half(a.2, b.2))
}

/// 常用样式
pub struct Styles;

impl Styles {
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    pub fn accent() -> Style {
        Style::default().fg(colors().accent)
    }

    /// 按钮：选中时反色
    pub fn button(focused: bool) -> Style {
        let c = colors();
        if focused {
            Style::default()
                .bg(c.highlight)
                .fg(c.bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        }
    }

    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.bg)
    }

    pub fn hint_key() -> Style {
        Style::default().fg(colors().bg).add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(colors().surface)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_maps_to_colors() {
        let colors = ThemeColors::from_palette(&Palette::default());
        assert_eq!(colors.bg, Color::Rgb(0xF7, 0xF5, 0xF2));
        assert_eq!(colors.fg, Color::Rgb(0x2B, 0x2B, 0x2B));
        assert_eq!(colors.highlight, Color::Rgb(0xB2, 0x8A, 0x5A));
    }

    #[test]
    fn test_bad_color_falls_back() {
        let palette = Palette {
            text: "teal".to_string(),
            ..Palette::default()
        };
        assert_eq!(
            ThemeColors::from_palette(&palette).fg,
            ThemeColors::from_palette(&Palette::default()).fg
        );
    }

    #[test]
    fn test_mix() {
        assert_eq!(mix((0, 100, 255), (255, 100, 255)), (127, 100, 255));
    }
}
