//! 随笔页视图

use portfolio_core::surface::SurfaceId;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

use super::{blank, scroll_rows};

/// 渲染文章卡片列表，行布局与 `document::journal_card_bounds` 一致
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 卡片区随文章浮层一起隐藏
    if !app.surface.is_shown(SurfaceId::JournalSection) {
        return;
    }

    let catalog = app.journal.catalog();
    if catalog.is_empty() {
        let empty = Paragraph::new(Span::styled(t().journal.no_articles, Styles::muted()));
        frame.render_widget(empty, area);
        return;
    }

    let mut lines = Vec::new();
    for (index, article) in catalog.iter().enumerate() {
        let selected = app.focus.is_content() && index == app.articles.selected;
        let marker = if selected { "▶ " } else { "  " };
        let title_style = if selected {
            Styles::selected()
        } else {
            Styles::title()
        };

        lines.push(Line::from(Span::styled(
            format!("{marker}{} {}", article.icon, article.title),
            title_style,
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", article.date),
            Styles::muted(),
        )));
        lines.push(Line::from(Span::raw(format!("    {}", article.excerpt))));
        lines.push(blank());
    }

    let paragraph = Paragraph::new(lines).scroll((scroll_rows(app.surface.scroll().offset), 0));
    frame.render_widget(paragraph, area);
}
