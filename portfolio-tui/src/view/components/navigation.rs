//! 左侧导航面板组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::{section_label, t};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let current = app.current_section();

    let block = Block::default()
        .title(format!(" {} ", t().nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_navigation()));

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, nav_item)| {
            let is_selected = i == app.navigation.selected;
            let prefix = if is_selected { "▶ " } else { "  " };

            let style = if is_selected {
                Styles::selected()
            } else if nav_item.section == current {
                Styles::accent()
            } else {
                Style::default().fg(c.fg)
            };

            let mut spans = vec![Span::styled(
                format!("{prefix}{} {}", nav_item.icon, section_label(nav_item.section)),
                style,
            )];
            // 视口所在章节
            if nav_item.section == current {
                spans.push(Span::styled(" •", Styles::accent()));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected());

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
