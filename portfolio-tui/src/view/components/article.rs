//! 文章浮层组件
//!
//! 整个屏幕是背景（点击即关闭），中间的 `document::article_overlay`
//! 区域是文章内容。内容全部从渲染表面的文本槽和 `ArticleBody` 容器读取。

use portfolio_core::surface::{ContainerId, SlotId};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{document, App};
use crate::view::theme::{colors, Styles};

/// 渲染文章浮层
pub fn render(app: &App, frame: &mut Frame) {
    let c = colors();
    let screen = frame.area();
    let surface = &app.surface;
    let slot = |id: SlotId| surface.text(id).unwrap_or_default().to_string();

    // 背景
    frame.render_widget(Clear, screen);
    frame.render_widget(Block::default().style(Style::default().bg(c.surface)), screen);

    let area = document::article_overlay(screen);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Line::from(Span::styled(
            format!(" [x] {} ", t().journal.close_button),
            Styles::button(false),
        )))
        .title_alignment(Alignment::Right)
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Style::default().bg(c.bg).fg(c.fg));

    let mut lines = vec![
        Line::from(vec![
            Span::raw(slot(SlotId::ArticleIcon)),
            Span::raw(" "),
            Span::styled(slot(SlotId::ArticleTitle), Styles::title()),
        ]),
        Line::from(Span::styled(slot(SlotId::ArticleDate), Styles::muted())),
        Line::from(""),
    ];

    for paragraph in surface.paragraphs(ContainerId::ArticleBody) {
        lines.push(Line::from(paragraph.as_str()));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        slot(SlotId::ArticleClosing),
        Style::default().fg(c.accent).add_modifier(Modifier::ITALIC),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
