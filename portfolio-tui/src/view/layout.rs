//! 主布局渲染

use portfolio_core::section::SectionId;
use portfolio_core::surface::SlotId;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::{section_label, t};
use crate::model::{document, App};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let c = colors();
    let screen = frame.area();
    let areas = document::frame_areas(screen);

    frame.render_widget(Block::default().style(Style::default().bg(c.bg).fg(c.fg)), screen);

    render_title_bar(frame, areas.title);
    components::navigation::render(app, frame, areas.nav);
    render_page_content(app, frame, areas.page);
    components::statusbar::render(app, frame, areas.status);

    // 浮层与弹窗在最上层
    if app.is_article_open() {
        components::article::render(app, frame);
    }
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" {}", t().common.app_name))
        .style(Style::default().bg(c.surface).fg(c.fg));
    frame.render_widget(title, area);
}

/// 根据当前章节渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let section = app.current_section();
    let detail = app.is_project_detail_open();

    let page_title = if detail {
        format!(
            " {} · {} ",
            section_label(SectionId::Portfolio),
            app.surface.text(SlotId::ProjectTitle).unwrap_or_default()
        )
    } else {
        format!(" {} ", section_label(section))
    };

    let block = Block::default()
        .title(page_title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 作品详情替换整个主内容区
    if detail {
        pages::project_detail::render(app, frame, inner_area);
        return;
    }

    match section {
        SectionId::Home => pages::home::render(app, frame, inner_area),
        SectionId::About => pages::about::render(app, frame, inner_area),
        SectionId::Portfolio => pages::portfolio::render(app, frame, inner_area),
        SectionId::Journal => pages::journal::render(app, frame, inner_area),
        SectionId::Contact => pages::contact::render(app, frame, inner_area),
    }
}
