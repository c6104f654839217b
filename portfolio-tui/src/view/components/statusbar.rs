//! 底部状态栏组件

use portfolio_core::section::SectionId;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let separator = || Span::styled(" │ ", Style::default().fg(c.surface));

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(separator());
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(separator());
        spans.push(Span::styled(msg.clone(), Styles::hint_key()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据焦点、章节和打开的视图生成快捷键提示
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let mut hints = Vec::new();

    // 文章浮层占据全部输入
    if app.is_article_open() {
        hints.push(("x", texts.common.close));
        hints.push((keys.esc, texts.common.close));
        return hints;
    }

    hints.push((keys.tab, actions.switch_panel));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push((keys.arrows_ud, actions.navigate));
            hints.push((keys.enter, actions.go));
        }
        FocusPanel::Content if app.is_project_detail_open() => {
            hints.push(("n", texts.common.next));
            hints.push(("b", texts.common.back));
        }
        FocusPanel::Content => match app.current_section() {
            SectionId::Home => {
                hints.push((keys.enter, texts.home.view_portfolio));
            }
            SectionId::About => {
                hints.push((keys.arrows_ud, actions.scroll));
            }
            SectionId::Portfolio => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.arrows_lr, actions.filter));
                hints.push((keys.space, actions.open));
            }
            SectionId::Journal => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.enter, texts.journal.read_hint));
            }
            SectionId::Contact => {
                hints.push((keys.arrows_ud, actions.field));
                hints.push(("Ctrl+s", actions.send));
            }
        },
    }

    hints.push(("?", actions.help));
    hints.push(("Alt+q", texts.common.quit));
    hints
}
