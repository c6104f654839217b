//! 首页视图

use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::Styles;

use super::blank;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    let lines = vec![
        blank(),
        blank(),
        Line::from(Span::styled(
            texts.home.eyebrow,
            Styles::accent().add_modifier(Modifier::BOLD),
        )),
        blank(),
        Line::from(Span::styled(app.site.hero_tagline.as_str(), Styles::title())),
        blank(),
        blank(),
        Line::from(Span::styled(
            format!("  {} →  ", texts.home.view_portfolio),
            Styles::button(app.focus.is_content()),
        )),
    ];

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hero, area);
}
