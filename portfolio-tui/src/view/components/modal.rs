//! 弹窗组件

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::document::centered_rect;
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
    }
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let help = &texts.help;
    let keys = &texts.hints.keys;
    let c = colors();

    let heading = |text: &'static str| {
        Line::from(Span::styled(
            format!(" {text}"),
            Style::default().fg(c.accent).add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |key: String, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("   {key:<14}"), Styles::title()),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        heading(help.global),
        entry(keys.tab.to_string(), help.switch_panel),
        entry(format!("{} / Home / End", keys.arrows_ud), help.move_select),
        entry(format!("{} / {}", keys.enter, keys.space), help.open_card),
        entry(keys.esc.to_string(), help.back),
        entry("Alt+q".to_string(), help.quit),
        Line::from(""),
        heading(help.portfolio),
        entry(keys.arrows_lr.to_string(), help.filter),
        entry("n / →".to_string(), help.next_project),
        Line::from(""),
        heading(help.journal),
        entry(format!("x / {}", keys.esc), help.close_article),
        entry(String::new(), help.click_backdrop),
        Line::from(""),
        heading(help.contact),
        entry(format!("{} / Shift+Tab", keys.arrows_ud), help.change_field),
        entry(format!("Ctrl+s / {}", keys.enter), help.send),
        Line::from(""),
        Line::from(Span::styled(help.close_hint, Styles::muted())).alignment(Alignment::Center),
    ];

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(56, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Style::default().bg(c.bg));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
