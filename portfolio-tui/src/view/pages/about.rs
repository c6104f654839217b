//! 关于页视图

use portfolio_core::fade_in::FADE_IN_CLASS;
use portfolio_core::surface::ElementId;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

use super::{blank, scroll_rows};

/// 渲染关于页；简介淡入之前以弱化色显示
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let revealed = app
        .surface
        .has_class(&ElementId::AboutContent, FADE_IN_CLASS);
    let bio_style = if revealed {
        Style::default().fg(colors().fg)
    } else {
        Styles::muted()
    };

    // 两行标题与 document::ABOUT_HEADER_ROWS 一致
    let mut lines = vec![
        Line::from(Span::styled(t().about.heading, Styles::title())),
        blank(),
    ];
    lines.extend(
        app.site
            .about_bio
            .lines()
            .map(|line| Line::from(Span::styled(line, bio_style))),
    );

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((scroll_rows(app.surface.scroll().offset), 0));
    frame.render_widget(paragraph, area);
}
