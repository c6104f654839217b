//! 内容面板更新逻辑
//!
//! 按当前页面把内容消息交给对应的状态机，再把返回的 Effect 应用到渲染表面。

use std::time::Instant;

use portfolio_core::fade_in::Bounds;
use portfolio_core::section::SectionId;
use portfolio_core::viewer::{BrowserEvent, ReaderEvent};
use portfolio_core::KeyInput;

use crate::i18n::{filter_label, t};
use crate::message::ContentMessage;
use crate::model::document::{
    about_height, card_bounds, journal_card_bounds, max_offset, portfolio_height, reveal_offset,
};
use crate::model::state::Selection;
use crate::model::{App, ContactField};

use super::{apply_effects, refresh_fade_in};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 列表导航 / 滚动 ==========
        ContentMessage::SelectPrevious => move_cursor(app, Step::Previous),
        ContentMessage::SelectNext => move_cursor(app, Step::Next),
        ContentMessage::SelectFirst => move_cursor(app, Step::First),
        ContentMessage::SelectLast => move_cursor(app, Step::Last),
        ContentMessage::Activate(key) => activate(app, key),

        // ========== 作品页 ==========
        ContentMessage::PrevFilter => step_filter(app, false),
        ContentMessage::NextFilter => step_filter(app, true),
        ContentMessage::NextProject => {
            if app.is_project_detail_open() {
                let effects = app.projects.handle(BrowserEvent::Advance);
                apply_effects(app, effects);
            }
        }
        ContentMessage::CloseProject => {
            if app.is_project_detail_open() {
                let effects = app.projects.handle(BrowserEvent::Close);
                apply_effects(app, effects);
                refresh_fade_in(app);
            }
        }

        // ========== 文章浮层 ==========
        ContentMessage::CloseArticle => read(app, ReaderEvent::CloseButton),
        ContentMessage::ArticleKey(key) => read(app, ReaderEvent::Key(key)),

        // ========== 联系表单 ==========
        ContentMessage::PrevField => app.contact_form.focus = app.contact_form.focus.prev(),
        ContentMessage::NextField => app.contact_form.focus = app.contact_form.focus.next(),
        ContentMessage::Input(c) => edit_field(app, |value| value.push(c)),
        ContentMessage::Backspace => edit_field(app, |value| {
            value.pop();
        }),
        ContentMessage::Submit(now) => submit(app, now),
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Previous,
    Next,
    First,
    Last,
}

impl Step {
    fn apply(self, selection: &mut Selection, len: usize) {
        match self {
            Step::Previous => selection.select_previous(),
            Step::Next => selection.select_next(len),
            Step::First => selection.select_first(),
            Step::Last => selection.select_last(len),
        }
    }
}

// ========== 列表导航处理 ==========

fn move_cursor(app: &mut App, step: Step) {
    if app.is_project_detail_open() {
        return;
    }

    match app.current_section() {
        SectionId::Portfolio => {
            let len = app.visible_project_ids().len();
            step.apply(&mut app.portfolio, len);
            let index = app.portfolio.selected;
            // 第一张卡片连同筛选栏一起露出
            let target = if index == 0 {
                Bounds::new(0, card_bounds(0).bottom())
            } else {
                card_bounds(index)
            };
            scroll_to_reveal(app, target);
        }
        SectionId::Journal => {
            let len = app.journal.catalog().len();
            step.apply(&mut app.articles, len);
            scroll_to_reveal(app, journal_card_bounds(app.articles.selected));
        }
        SectionId::About => {
            let viewport = app.viewport();
            let max = max_offset(
                about_height(&app.site.about_bio, viewport.width),
                u32::from(viewport.height),
            );
            let offset = app.surface.scroll().offset;
            let next = match step {
                Step::Previous => offset.saturating_sub(1),
                Step::Next => offset.saturating_add(1).min(max),
                Step::First => 0,
                Step::Last => max,
            };
            app.surface.scroll_to(next);
        }
        SectionId::Home | SectionId::Contact => return,
    }

    refresh_fade_in(app);
}

fn scroll_to_reveal(app: &mut App, target: Bounds) {
    let rows = u32::from(app.viewport().height);
    let current = app.surface.scroll().offset;
    let offset = reveal_offset(current, target, rows);
    if offset != current {
        app.surface.scroll_to(offset);
    }
}

// ========== 卡片与链接 ==========

fn activate(app: &mut App, key: KeyInput) {
    if app.is_project_detail_open() {
        return;
    }

    match app.current_section() {
        // 首屏的"查看作品"是一个 #portfolio 锚点链接
        SectionId::Home if key == KeyInput::Enter => {
            let effects = app.sections.follow(&SectionId::Portfolio.href());
            apply_effects(app, effects);
            refresh_fade_in(app);
        }
        SectionId::Portfolio if key.activates_card() => {
            let Some(id) = app
                .visible_project_ids()
                .get(app.portfolio.selected)
                .map(|id| (*id).to_string())
            else {
                return;
            };
            let effects = app.projects.handle(BrowserEvent::Open(id));
            apply_effects(app, effects);
            app.clear_status();
        }
        SectionId::Journal => {
            let Some(id) = app
                .journal
                .catalog()
                .at(app.articles.selected)
                .map(|article| article.id.clone())
            else {
                return;
            };
            read(app, ReaderEvent::CardKey { id, key });
        }
        _ => {}
    }
}

fn read(app: &mut App, event: ReaderEvent) {
    let was_open = app.is_article_open();
    let transition = app.journal.handle(event);
    apply_effects(app, transition.effects);
    if was_open && !app.is_article_open() {
        refresh_fade_in(app);
    }
}

// ========== 筛选 ==========

fn step_filter(app: &mut App, forward: bool) {
    let controls = app.filter.controls();
    let Some(active) = controls.iter().position(|tag| tag == app.filter.active()) else {
        return;
    };
    let target = if forward {
        active + 1
    } else if let Some(previous) = active.checked_sub(1) {
        previous
    } else {
        return;
    };
    let Some(tag) = controls.get(target).cloned() else {
        return;
    };

    let effects = app.filter.set_filter(tag.clone());
    apply_effects(app, effects);

    let visible = app.visible_project_ids().len();
    app.portfolio.clamp(visible);

    let viewport_rows = u32::from(app.viewport().height);
    let max = max_offset(portfolio_height(visible), viewport_rows);
    if app.surface.scroll().offset > max {
        app.surface.scroll_to(max);
    }

    app.set_status(format!(
        "{}: {} ({visible})",
        t().portfolio.showing,
        filter_label(&tag)
    ));
    refresh_fade_in(app);
}

// ========== 联系表单 ==========

fn edit_field(app: &mut App, edit: impl FnOnce(&mut String)) {
    let focus = app.contact_form.focus;
    if !focus.is_text() {
        return;
    }
    let form = app.contact.form().clone();
    let Some(fields) = app.surface.form_fields_mut(&form) else {
        log::debug!("Contact form {form:?} not on the surface");
        return;
    };
    let value = match focus {
        ContactField::Name => &mut fields.name,
        ContactField::Email => &mut fields.email,
        ContactField::Message | ContactField::Submit => &mut fields.message,
    };
    edit(value);
}

fn submit(app: &mut App, now: Instant) {
    let effects = app.contact.submit(now);
    apply_effects(app, effects);
    app.contact_form.focus = ContactField::Name;
}
