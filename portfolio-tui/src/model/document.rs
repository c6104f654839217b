//! 文档几何
//!
//! 终端里的"页面"是按行排布的文档。卡片位置、视口大小与浮层区域
//! 在这里统一计算，Update 层用它做淡入判定和滚动，View 层用它绘制，
//! 两边看到的坐标一致。

use portfolio_core::fade_in::Bounds;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

/// 作品页顶部筛选栏（含空行）
pub const FILTER_BAR_ROWS: u32 = 2;
/// 每张作品卡片的行数（含卡片间空行）
pub const CARD_ROWS: u32 = 4;
/// 每张文章卡片的行数（含卡片间空行）
pub const JOURNAL_CARD_ROWS: u32 = 4;
/// 关于页简介上方的标题行
pub const ABOUT_HEADER_ROWS: u32 = 2;
/// 淡入判定时视口底部收缩的行数
pub const FADE_IN_MARGIN_ROWS: u32 = 2;
/// 关闭按钮 `[x] Close` 在边框上占的列数（含右侧边角）
const CLOSE_BUTTON_COLUMNS: u16 = 14;
/// 作品详情两个按钮之间的空格数
pub const DETAIL_BUTTON_GAP: u16 = 3;

/// 整个屏幕划分出的区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAreas {
    pub title: Rect,
    pub nav: Rect,
    pub page: Rect,
    pub status: Rect,
}

/// 标题栏 + 左右分栏 + 状态栏
pub fn frame_areas(screen: Rect) -> FrameAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(screen);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
        .split(rows[1]);

    FrameAreas {
        title: rows[0],
        nav: columns[0],
        page: columns[1],
        status: rows[2],
    }
}

/// 页面边框内侧，即可滚动文档的视口
pub fn page_viewport(screen: Rect) -> Rect {
    let page = frame_areas(screen).page;
    Rect::new(
        page.x.saturating_add(1),
        page.y.saturating_add(1),
        page.width.saturating_sub(2),
        page.height.saturating_sub(2),
    )
}

/// 文章浮层的内容区域，其余部分都是背景
pub fn article_overlay(screen: Rect) -> Rect {
    let width = screen.width.saturating_sub(8).min(76);
    let height = screen.height.saturating_sub(4);
    centered_rect(width, height, screen)
}

/// 文章浮层上边框右端的关闭按钮
pub fn article_close_button(screen: Rect) -> Rect {
    let overlay = article_overlay(screen);
    let width = CLOSE_BUTTON_COLUMNS.min(overlay.width);
    Rect::new(overlay.right().saturating_sub(width), overlay.y, width, 1)
}

/// 作品详情首行的两个按钮：返回列表、下一个作品
pub fn detail_buttons(viewport: Rect, back: &str, next: &str) -> [Rect; 2] {
    let cols = |label: &str| u16::try_from(label.width()).unwrap_or(u16::MAX);
    let back_width = cols(back).min(viewport.width);
    let next_x = viewport.x.saturating_add(back_width).saturating_add(DETAIL_BUTTON_GAP);
    let next_width = cols(next).min(viewport.right().saturating_sub(next_x));
    [
        Rect::new(viewport.x, viewport.y, back_width, 1),
        Rect::new(next_x, viewport.y, next_width, 1),
    ]
}

/// 在 `area` 中居中放置给定大小的矩形
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 第 `index` 张可见作品卡片的位置
pub fn card_bounds(index: usize) -> Bounds {
    Bounds::new(FILTER_BAR_ROWS + rows(index) * CARD_ROWS, CARD_ROWS - 1)
}

/// 作品页文档总高度
pub fn portfolio_height(visible_cards: usize) -> u32 {
    FILTER_BAR_ROWS + rows(visible_cards) * CARD_ROWS
}

/// 第 `index` 张文章卡片的位置
pub fn journal_card_bounds(index: usize) -> Bounds {
    Bounds::new(rows(index) * JOURNAL_CARD_ROWS, JOURNAL_CARD_ROWS - 1)
}

/// 关于页简介的位置
pub fn about_bounds(bio: &str, width: u16) -> Bounds {
    Bounds::new(ABOUT_HEADER_ROWS, wrapped_rows(bio, width))
}

/// 关于页文档总高度
pub fn about_height(bio: &str, width: u16) -> u32 {
    about_bounds(bio, width).bottom()
}

/// 按单词折行后的行数，与 `Wrap { trim: true }` 的排版一致
pub fn wrapped_rows(text: &str, width: u16) -> u32 {
    let width = usize::from(width.max(1));
    let mut lines = 0u32;
    for paragraph in text.lines() {
        let mut used = 0usize;
        lines += 1;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if used == 0 { word_width } else { used + 1 + word_width };
            if needed <= width {
                used = needed;
            } else if used == 0 {
                // 超长单词按宽度硬切
                let extra = word_width.div_ceil(width) - 1;
                lines += rows(extra);
                used = word_width - extra * width;
            } else {
                lines += 1;
                let extra = word_width.saturating_sub(1) / width;
                lines += rows(extra);
                used = word_width - extra * width;
            }
        }
    }
    lines.max(1)
}

/// 让 `target` 完整出现在视口中所需的滚动偏移
pub fn reveal_offset(current: u32, target: Bounds, viewport_rows: u32) -> u32 {
    if target.top < current {
        target.top
    } else if target.bottom() > current + viewport_rows {
        target.bottom().saturating_sub(viewport_rows)
    } else {
        current
    }
}

/// 文档第 `row` 行落在哪张卡片上
pub fn card_index_at(row: u32, len: usize, bounds: impl Fn(usize) -> Bounds) -> Option<usize> {
    (0..len).find(|&index| {
        let card = bounds(index);
        row >= card.top && row < card.bottom()
    })
}

/// 屏幕坐标对应的文档行；不在视口内时为 `None`
pub fn document_row(viewport: Rect, offset: u32, column: u16, row: u16) -> Option<u32> {
    if !viewport.contains(Position::new(column, row)) {
        return None;
    }
    Some(offset + u32::from(row - viewport.y))
}

/// 文档高度超出视口时允许的最大偏移
pub fn max_offset(document_rows: u32, viewport_rows: u32) -> u32 {
    document_rows.saturating_sub(viewport_rows)
}

fn rows(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_stack_below_filter_bar() {
        assert_eq!(card_bounds(0), Bounds::new(2, 3));
        assert_eq!(card_bounds(2), Bounds::new(10, 3));
        assert_eq!(portfolio_height(3), 14);
    }

    #[test]
    fn test_wrapped_rows() {
        assert_eq!(wrapped_rows("", 10), 1);
        assert_eq!(wrapped_rows("one two", 10), 1);
        assert_eq!(wrapped_rows("one two three", 10), 2);
        assert_eq!(wrapped_rows("abcdefghijklmnopqrstuvwxy", 10), 3);
        assert_eq!(wrapped_rows("first\nsecond", 40), 2);
    }

    #[test]
    fn test_reveal_offset() {
        // already inside
        assert_eq!(reveal_offset(0, Bounds::new(2, 3), 10), 0);
        // below the viewport
        assert_eq!(reveal_offset(0, Bounds::new(10, 3), 10), 3);
        // above the viewport
        assert_eq!(reveal_offset(8, Bounds::new(2, 3), 10), 2);
    }

    #[test]
    fn test_card_hit_testing() {
        // row 1 is the blank line under the filter bar, row 5 the gap after card 0
        assert_eq!(card_index_at(1, 3, card_bounds), None);
        assert_eq!(card_index_at(2, 3, card_bounds), Some(0));
        assert_eq!(card_index_at(5, 3, card_bounds), None);
        assert_eq!(card_index_at(8, 3, card_bounds), Some(1));
        assert_eq!(card_index_at(30, 3, card_bounds), None);
    }

    #[test]
    fn test_document_row_accounts_for_scroll() {
        let viewport = Rect::new(20, 2, 50, 10);
        assert_eq!(document_row(viewport, 0, 25, 2), Some(0));
        assert_eq!(document_row(viewport, 4, 25, 5), Some(7));
        assert_eq!(document_row(viewport, 0, 5, 5), None);
        assert_eq!(document_row(viewport, 0, 25, 12), None);
    }

    #[test]
    fn test_page_viewport_inside_page_border() {
        let screen = Rect::new(0, 0, 100, 30);
        let areas = frame_areas(screen);
        let viewport = page_viewport(screen);

        assert_eq!(areas.nav.width + areas.page.width, 100);
        assert_eq!(viewport.height, 30 - 2 - 2);
        assert_eq!(viewport.width, areas.page.width - 2);
    }

    #[test]
    fn test_overlay_leaves_backdrop() {
        let screen = Rect::new(0, 0, 120, 40);
        let overlay = article_overlay(screen);
        assert_eq!(overlay.width, 76);
        assert_eq!(overlay.height, 36);
        assert!(overlay.x > 0 && overlay.y > 0);

        let close = article_close_button(screen);
        assert_eq!(close.y, overlay.y);
        assert_eq!(close.right(), overlay.right());
        assert!(overlay.contains(close.as_position()));
    }

    #[test]
    fn test_detail_buttons_share_first_row() {
        let viewport = Rect::new(10, 5, 60, 20);
        let [back, next] = detail_buttons(viewport, " ← Back ", " Next → ");
        assert_eq!(back, Rect::new(10, 5, 8, 1));
        assert_eq!(next, Rect::new(21, 5, 8, 1));

        // 视口太窄时第二个按钮被截断
        let [_, next] = detail_buttons(Rect::new(0, 0, 12, 3), " ← Back ", " Next → ");
        assert_eq!(next.width, 1);
    }
}
