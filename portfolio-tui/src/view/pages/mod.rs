//! 章节页面
//!
//! 可滚动页面按 `model::document` 的行布局逐行构建，再整体按偏移滚动。

pub mod about;
pub mod contact;
pub mod home;
pub mod journal;
pub mod portfolio;
pub mod project_detail;

use ratatui::text::Line;

/// 滚动偏移转为 Paragraph 使用的行数
pub(super) fn scroll_rows(offset: u32) -> u16 {
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// 空行
pub(super) fn blank() -> Line<'static> {
    Line::from("")
}
