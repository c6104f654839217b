//! 作品详情视图
//!
//! 首行是返回与下一个两个按钮（位置见 `document::detail_buttons`），
//! 其下是文本槽里的内容。

use portfolio_core::surface::SlotId;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::{detail_button_labels, t};
use crate::model::{document, App};
use crate::view::theme::{colors, Styles};

use super::blank;

/// 渲染作品详情：内容全部取自文本槽
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().portfolio;
    let c = colors();
    let slot = |id: SlotId| app.surface.text(id).unwrap_or_default().to_string();

    let (back, next) = detail_button_labels();
    let [back_area, next_area] = document::detail_buttons(area, &back, &next);
    frame.render_widget(Paragraph::new(Span::styled(back, Styles::button(false))), back_area);
    frame.render_widget(Paragraph::new(Span::styled(next, Styles::button(true))), next_area);

    let lines = vec![
        Line::from(Span::raw(slot(SlotId::ProjectHero))),
        blank(),
        Line::from(Span::styled(slot(SlotId::ProjectTitle), Styles::title())),
        Line::from(Span::styled(slot(SlotId::ProjectCategory), Styles::muted())),
        blank(),
        Line::from(Span::styled(texts.concept, Styles::accent())),
        Line::from(Span::styled(slot(SlotId::ProjectConcept), Style::default().fg(c.fg))),
        blank(),
        Line::from(Span::styled(texts.reflection, Styles::accent())),
        Line::from(Span::styled(slot(SlotId::ProjectReflection), Style::default().fg(c.fg))),
    ];

    // 按钮行与一个空行之下
    let body = Rect {
        y: area.y.saturating_add(2),
        height: area.height.saturating_sub(2),
        ..area
    };
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, body);
}
