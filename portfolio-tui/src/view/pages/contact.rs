//! 联系页视图

use portfolio_core::surface::{ElementId, FormFields};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, ContactField};
use crate::view::theme::{colors, Styles};

/// 渲染联系页：邀请语、邮箱、表单与提交回执
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().contact;
    let form = app.surface.form(&ElementId::ContactForm);
    let empty = FormFields::default();
    let fields = form.map_or(&empty, |f| &f.fields);
    let messages = form.map_or(0, |f| f.messages.len());
    let focus = app.focus.is_content().then_some(app.contact_form.focus);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 邀请语 + 邮箱
            Constraint::Length(3), // 姓名
            Constraint::Length(3), // 邮箱
            Constraint::Min(3),    // 留言
            Constraint::Length(1), // 发送按钮
            Constraint::Length(u16::try_from(messages).unwrap_or(u16::MAX)),
        ])
        .split(area);

    let header = vec![
        Line::from(Span::styled(app.site.contact_cta.as_str(), Styles::title())),
        Line::from(vec![
            Span::styled(format!("{}: ", texts.email_label), Styles::muted()),
            Span::styled(app.site.contact_email.as_str(), Styles::accent()),
        ]),
    ];
    frame.render_widget(Paragraph::new(header), layout[0]);

    render_field(frame, layout[1], texts.name, &fields.name, focus == Some(ContactField::Name));
    render_field(frame, layout[2], texts.email, &fields.email, focus == Some(ContactField::Email));
    render_field(
        frame,
        layout[3],
        texts.message,
        &fields.message,
        focus == Some(ContactField::Message),
    );

    let button = Paragraph::new(Span::styled(
        format!(" {} ", texts.send),
        Styles::button(focus == Some(ContactField::Submit)),
    ));
    frame.render_widget(button, layout[4]);

    // 提交回执，按插入顺序
    if let Some(form) = form {
        let c = colors();
        let lines: Vec<Line> = form
            .messages
            .iter()
            .map(|(_, text)| {
                Line::from(Span::styled(
                    format!(" {text} "),
                    Style::default().bg(c.notice_bg).fg(c.notice_fg),
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), layout[5]);
    }
}

/// 渲染单个输入框；获得焦点时显示光标
fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let text = if focused {
        format!("{value}▏")
    } else {
        value.to_string()
    };

    let input = Paragraph::new(text)
        .style(Style::default().fg(colors().fg))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(input, area);
}
