//! 作品集页视图
//!
//! 行布局与 `document::card_bounds` 一致：
//!
//!     0        筛选栏
//!     1        空行
//!     2 + 4i   卡片 i：标题 / 分类 / 提示 / 空行

use portfolio_core::fade_in::FADE_IN_CLASS;
use portfolio_core::surface::ElementId;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::{filter_label, t};
use crate::model::App;
use crate::view::theme::{colors, Styles};

use super::{blank, scroll_rows};

/// 渲染作品集页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines = vec![filter_bar(app), blank()];

    let visible = app.visible_project_ids();
    if visible.is_empty() {
        lines.push(Line::from(Span::styled(t().portfolio.no_projects, Styles::muted())));
    }

    for (index, id) in visible.into_iter().enumerate() {
        let Some(project) = app.projects.catalog().get(id) else {
            continue;
        };
        let selected = app.focus.is_content() && index == app.portfolio.selected;
        let revealed = app
            .surface
            .has_class(&ElementId::PortfolioCard(project.id.clone()), FADE_IN_CLASS);

        let (title_style, body_style) = card_styles(selected, revealed);
        let marker = if selected { "▶ " } else { "  " };

        lines.push(Line::from(Span::styled(
            format!("{marker}{} {}", project.emoji, project.title),
            title_style,
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", project.category),
            body_style,
        )));
        lines.push(Line::from(Span::styled(
            format!("    {} →", t().hints.actions.open),
            if selected { Styles::accent() } else { body_style },
        )));
        lines.push(blank());
    }

    let paragraph = Paragraph::new(lines).scroll((scroll_rows(app.surface.scroll().offset), 0));
    frame.render_widget(paragraph, area);
}

/// 筛选按钮一行，激活的按钮高亮
fn filter_bar(app: &App) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, tag) in app.filter.controls().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let active = app.surface.is_active(&ElementId::FilterControl(tag.clone()));
        spans.push(Span::styled(
            format!(" {} ", filter_label(tag)),
            Styles::button(active),
        ));
    }
    Line::from(spans)
}

/// 卡片标题与正文样式：未淡入的卡片整体弱化
fn card_styles(selected: bool, revealed: bool) -> (Style, Style) {
    if !revealed {
        return (Styles::muted(), Styles::muted());
    }
    let body = Style::default().fg(colors().fg);
    if selected {
        (Styles::selected(), body)
    } else {
        (Styles::title(), body.add_modifier(Modifier::DIM))
    }
}
