//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 调用              │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Effects  │              │
//！│      │ (Util)  │                                │  应用    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │  portfolio-core   │           │
//！│                                           │    状态机         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;            // 内容面板子消息
//!         mod modal;              // 弹窗子消息
//!         mod navigation;         // 导航子消息
//!
//!
//!     每一次交互都是同一个形状：
//!
//!         let effects = app.projects.handle(BrowserEvent::Advance);   // 状态机给出 Effect
//!         apply_effects(app, effects);                                // 落到渲染表面
//!         refresh_fade_in(app);                                       // 视口可能动了
//!
//!     apply_effects 对找不到目标的 Effect 只记日志并跳过，
//!     其余 Effect 照常生效。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 时钟与淡入
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     AppMessage::Tick(now)
//!         1. ContactForm::tick(now)       // 移除到期的提交回执
//!         2. refresh_fade_in()            // 重新摆放卡片、判定淡入
//!
//!     refresh_fade_in 按当前章节给被观察的元素设置文档位置：
//!         - 作品页：未被筛掉的卡片依次排在筛选栏下方
//!         - 关于页：简介块
//!         - 其它章节或详情打开时：没有位置，不会相交
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//!

mod content;
mod modal;
mod navigation;

use portfolio_core::fade_in::Bounds;
use portfolio_core::section::SectionId;
use portfolio_core::surface::{Effect, ElementId, SurfaceId};
use portfolio_core::viewer::{BrowserEvent, PointerTarget, ReaderEvent};
use portfolio_core::KeyInput;
use ratatui::layout::{Position, Rect};

use crate::i18n::detail_button_labels;
use crate::message::{AppMessage, ContentMessage};
use crate::model::document::{self, card_bounds, card_index_at, journal_card_bounds};
use crate::model::{App, FocusPanel};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),
        AppMessage::Content(content_msg) => content::update(app, content_msg),
        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::GoBack => go_back(app),

        AppMessage::ShowHelp => app.modal.show_help(),

        AppMessage::Pointer { column, row } => pointer(app, column, row),

        AppMessage::Resize { width, height } => {
            app.screen = Rect::new(0, 0, width, height);
            refresh_fade_in(app);
        }

        AppMessage::Tick(now) => {
            let effects = app.contact.tick(now);
            apply_effects(app, effects);
            refresh_fade_in(app);
        }

        AppMessage::Noop => {}
    }
}

/// Esc：由内向外逐层返回
fn go_back(app: &mut App) {
    if app.modal.is_open() {
        app.modal.close();
        app.clear_status();
    } else if app.is_article_open() {
        content::update(app, ContentMessage::ArticleKey(KeyInput::Escape));
    } else if app.is_project_detail_open() {
        content::update(app, ContentMessage::CloseProject);
    } else if app.focus.is_content() {
        app.focus = FocusPanel::Navigation;
    }
}

/// 鼠标点击：浮层打开时区分背景与内容，详情页点按钮，否则点选卡片
fn pointer(app: &mut App, column: u16, row: u16) {
    if app.modal.is_open() {
        return;
    }

    if app.is_article_open() {
        let position = Position::new(column, row);
        let event = if document::article_close_button(app.screen).contains(position) {
            ReaderEvent::CloseButton
        } else if document::article_overlay(app.screen).contains(position) {
            ReaderEvent::Pointer(PointerTarget::Content)
        } else {
            ReaderEvent::Pointer(PointerTarget::Backdrop)
        };
        let transition = app.journal.handle(event);
        apply_effects(app, transition.effects);
        refresh_fade_in(app);
        return;
    }

    if app.is_project_detail_open() {
        let (back, next) = detail_button_labels();
        let [back_area, next_area] = document::detail_buttons(app.viewport(), &back, &next);
        let position = Position::new(column, row);
        if back_area.contains(position) {
            content::update(app, ContentMessage::CloseProject);
        } else if next_area.contains(position) {
            content::update(app, ContentMessage::NextProject);
        }
        return;
    }

    let Some(doc_row) =
        document::document_row(app.viewport(), app.surface.scroll().offset, column, row)
    else {
        return;
    };
    app.focus = FocusPanel::Content;

    match app.current_section() {
        SectionId::Portfolio => {
            let ids = app.visible_project_ids();
            let Some(index) = card_index_at(doc_row, ids.len(), card_bounds) else {
                return;
            };
            let id = ids[index].to_string();
            app.portfolio.selected = index;
            let effects = app.projects.handle(BrowserEvent::Open(id));
            apply_effects(app, effects);
        }
        SectionId::Journal => {
            let len = app.journal.catalog().len();
            let Some(index) = card_index_at(doc_row, len, journal_card_bounds) else {
                return;
            };
            let Some(id) = app.journal.catalog().at(index).map(|a| a.id.clone()) else {
                return;
            };
            app.articles.selected = index;
            let transition = app.journal.handle(ReaderEvent::CardClick(id));
            apply_effects(app, transition.effects);
        }
        _ => {}
    }
}

/// 把状态机输出的 Effect 应用到渲染表面
pub(crate) fn apply_effects(app: &mut App, effects: Vec<Effect>) {
    let total = effects.len();
    let applied = portfolio_core::apply(&mut app.surface, effects);
    if applied < total {
        log::debug!("Applied {applied} of {total} effects");
    }
}

/// 按当前视口重新摆放被观察的元素并判定淡入
pub(crate) fn refresh_fade_in(app: &mut App) {
    let section = app.current_section();
    let listing = app.surface.is_shown(SurfaceId::MainContent);
    let viewport = app.viewport();

    let mut placed = 0;
    let cards: Vec<ElementId> = app.filter.cards().iter().map(|card| card.element()).collect();
    for element in cards {
        let bounds = (listing && section == SectionId::Portfolio && app.surface.is_visible(&element))
            .then(|| {
                let bounds = card_bounds(placed);
                placed += 1;
                bounds
            });
        app.fade_in.observe(element, bounds);
    }

    let about = (listing && section == SectionId::About)
        .then(|| document::about_bounds(&app.site.about_bio, viewport.width));
    app.fade_in.observe(ElementId::AboutContent, about);

    let window = Bounds::new(app.surface.scroll().offset, u32::from(viewport.height));
    let effects = app.fade_in.check(window);
    if !effects.is_empty() {
        log::debug!("Fading in {} elements", effects.len());
    }
    apply_effects(app, effects);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) fn test_app() -> App {
    use portfolio_core::content::default_catalogs;
    use portfolio_core::types::SiteConfig;

    App::new(
        SiteConfig::default(),
        default_catalogs().unwrap(),
        Rect::new(0, 0, 120, 40),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::time::{Duration, Instant};

    use portfolio_core::contact::ACK_TEXT;
    use portfolio_core::fade_in::FADE_IN_CLASS;
    use portfolio_core::filter::FilterTag;
    use portfolio_core::surface::{ContainerId, SlotId};

    use super::*;
    use crate::message::{ModalMessage, NavigationMessage};
    use crate::model::ContactField;

    fn go_to(app: &mut App, section: SectionId) {
        app.navigation.selected = app
            .navigation
            .items
            .iter()
            .position(|item| item.section == section)
            .unwrap();
        update(app, AppMessage::Navigation(NavigationMessage::Confirm));
        app.focus = FocusPanel::Content;
    }

    fn content(app: &mut App, msg: ContentMessage) {
        update(app, AppMessage::Content(msg));
    }

    fn card(id: &str) -> ElementId {
        ElementId::PortfolioCard(id.to_string())
    }

    #[test]
    fn test_navigation_follows_section_links() {
        let mut app = test_app();
        assert_eq!(app.current_section(), SectionId::Home);

        go_to(&mut app, SectionId::Journal);
        assert_eq!(app.current_section(), SectionId::Journal);
        assert_eq!(app.surface.scroll().offset, 0);
        assert!(app.surface.scroll().smooth);
    }

    #[test]
    fn test_hero_link_jumps_to_portfolio() {
        let mut app = test_app();
        app.focus = FocusPanel::Content;
        content(&mut app, ContentMessage::Activate(KeyInput::Enter));
        assert_eq!(app.current_section(), SectionId::Portfolio);
    }

    #[test]
    fn test_open_advance_and_close_project() {
        let mut app = test_app();
        go_to(&mut app, SectionId::Portfolio);

        content(&mut app, ContentMessage::SelectNext);
        content(&mut app, ContentMessage::Activate(KeyInput::Space));
        assert!(app.is_project_detail_open());
        assert!(!app.surface.is_shown(SurfaceId::MainContent));
        assert_eq!(app.surface.text(SlotId::ProjectTitle), Some("Monsoon Café"));

        content(&mut app, ContentMessage::NextProject);
        assert_eq!(app.surface.text(SlotId::ProjectTitle), Some("Quiet Studio"));

        // 五个作品，再前进三次绕回第一个
        for _ in 0..3 {
            content(&mut app, ContentMessage::NextProject);
        }
        assert_eq!(app.surface.text(SlotId::ProjectTitle), Some("The Courtyard Home"));

        update(&mut app, AppMessage::GoBack);
        assert!(!app.is_project_detail_open());
        assert!(app.surface.is_shown(SurfaceId::MainContent));
        assert_eq!(app.surface.scroll().offset, 0);
        assert!(app.focus.is_content());
    }

    #[test]
    fn test_filter_steps_through_controls() {
        let mut app = test_app();
        go_to(&mut app, SectionId::Portfolio);

        content(&mut app, ContentMessage::PrevFilter);
        assert_eq!(app.filter.active(), &FilterTag::All);

        content(&mut app, ContentMessage::NextFilter);
        assert_eq!(app.filter.active(), &FilterTag::parse("residential"));
        assert_eq!(
            app.visible_project_ids(),
            ["courtyard-home", "studio-apartment"]
        );
        assert!(app
            .surface
            .is_active(&ElementId::FilterControl(FilterTag::parse("residential"))));
        assert!(!app.surface.is_active(&ElementId::FilterControl(FilterTag::All)));
        assert!(app.status_message.is_some());

        // 在筛选后的列表中打开第二张卡片
        content(&mut app, ContentMessage::SelectLast);
        content(&mut app, ContentMessage::Activate(KeyInput::Enter));
        assert_eq!(app.projects.current_id(), Some("studio-apartment"));
    }

    #[test]
    fn test_filter_clamps_cursor() {
        let mut app = test_app();
        go_to(&mut app, SectionId::Portfolio);
        content(&mut app, ContentMessage::SelectLast);
        assert_eq!(app.portfolio.selected, 4);

        for _ in 0..3 {
            content(&mut app, ContentMessage::NextFilter);
        }
        assert_eq!(app.filter.active(), &FilterTag::parse("styling"));
        assert_eq!(app.portfolio.selected, 0);

        // 已经是最后一个按钮
        content(&mut app, ContentMessage::NextFilter);
        assert_eq!(app.filter.active(), &FilterTag::parse("styling"));
    }

    #[test]
    fn test_article_opens_by_key_and_closes_by_escape() {
        let mut app = test_app();
        go_to(&mut app, SectionId::Journal);

        content(&mut app, ContentMessage::Activate(KeyInput::Other));
        assert!(!app.is_article_open());

        content(&mut app, ContentMessage::Activate(KeyInput::Enter));
        assert!(app.is_article_open());
        assert!(!app.surface.is_shown(SurfaceId::JournalSection));
        let article = app.journal.current().unwrap().clone();
        assert_eq!(app.surface.text(SlotId::ArticleTitle), Some(article.title.as_str()));
        assert_eq!(app.surface.paragraphs(ContainerId::ArticleBody), article.body.as_slice());

        content(&mut app, ContentMessage::ArticleKey(KeyInput::Other));
        assert!(app.is_article_open());

        update(&mut app, AppMessage::GoBack);
        assert!(!app.is_article_open());
        assert!(app.surface.is_shown(SurfaceId::JournalSection));
    }

    #[test]
    fn test_article_close_button_and_reopen_replaces_body() {
        let mut app = test_app();
        go_to(&mut app, SectionId::Journal);

        content(&mut app, ContentMessage::Activate(KeyInput::Enter));
        content(&mut app, ContentMessage::CloseArticle);
        assert!(!app.is_article_open());

        content(&mut app, ContentMessage::SelectNext);
        content(&mut app, ContentMessage::Activate(KeyInput::Space));
        let article = app.journal.current().unwrap().clone();
        assert_eq!(app.articles.selected, 1);
        assert_eq!(app.surface.paragraphs(ContainerId::ArticleBody), article.body.as_slice());
    }

    #[test]
    fn test_backdrop_click_closes_article() {
        let mut app = test_app();
        go_to(&mut app, SectionId::Journal);
        content(&mut app, ContentMessage::Activate(KeyInput::Enter));

        let inside = document::article_overlay(app.screen);
        update(
            &mut app,
            AppMessage::Pointer {
                column: inside.x + 1,
                row: inside.y + 1,
            },
        );
        assert!(app.is_article_open());

        update(&mut app, AppMessage::Pointer { column: 0, row: 0 });
        assert!(!app.is_article_open());
    }

    #[test]
    fn test_clicking_close_control_closes_article() {
        let mut app = test_app();
        go_to(&mut app, SectionId::Journal);
        content(&mut app, ContentMessage::Activate(KeyInput::Enter));

        let close = document::article_close_button(app.screen);
        update(
            &mut app,
            AppMessage::Pointer {
                column: close.x + 2,
                row: close.y,
            },
        );
        assert!(!app.is_article_open());
        assert!(app.surface.is_shown(SurfaceId::JournalSection));
    }

    #[test]
    fn test_detail_buttons_respond_to_clicks() {
        let mut app = test_app();
        go_to(&mut app, SectionId::Portfolio);
        content(&mut app, ContentMessage::Activate(KeyInput::Enter));
        assert_eq!(app.surface.text(SlotId::ProjectTitle), Some("The Courtyard Home"));

        let (back, next) = detail_button_labels();
        let [back_area, next_area] = document::detail_buttons(app.viewport(), &back, &next);

        // 按钮之间的空隙不响应
        let gap = back_area.right() + 1;
        update(&mut app, AppMessage::Pointer { column: gap, row: back_area.y });
        assert_eq!(app.surface.text(SlotId::ProjectTitle), Some("The Courtyard Home"));

        update(&mut app, AppMessage::Pointer { column: next_area.x, row: next_area.y });
        assert_eq!(app.surface.text(SlotId::ProjectTitle), Some("Monsoon Café"));
        assert!(app.is_project_detail_open());

        update(&mut app, AppMessage::Pointer { column: back_area.x, row: back_area.y });
        assert!(!app.is_project_detail_open());
        assert!(app.surface.is_shown(SurfaceId::MainContent));
    }

    #[test]
    fn test_nav_link_closes_project_detail() {
        let mut app = test_app();
        go_to(&mut app, SectionId::Portfolio);
        content(&mut app, ContentMessage::Activate(KeyInput::Enter));
        assert!(app.is_project_detail_open());

        go_to(&mut app, SectionId::Journal);

        assert!(!app.is_project_detail_open());
        assert!(app.surface.is_shown(SurfaceId::MainContent));
        assert_eq!(app.current_section(), SectionId::Journal);

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.current_section(), SectionId::Journal);
        assert!(app.focus.is_navigation());
    }

    #[test]
    fn test_click_on_cards() {
        let mut app = test_app();
        go_to(&mut app, SectionId::Journal);
        app.focus = FocusPanel::Navigation;

        let viewport = app.viewport();
        // 第二张文章卡片的第一行
        let row = viewport.y + u16::try_from(journal_card_bounds(1).top).unwrap();
        update(&mut app, AppMessage::Pointer { column: viewport.x + 2, row });
        assert!(app.focus.is_content());
        assert_eq!(app.journal.current_id(), Some("material-stories"));

        update(&mut app, AppMessage::GoBack);
        go_to(&mut app, SectionId::Portfolio);
        let row = viewport.y + u16::try_from(card_bounds(0).top).unwrap();
        update(&mut app, AppMessage::Pointer { column: viewport.x + 2, row });
        assert_eq!(app.projects.current_id(), Some("courtyard-home"));
    }

    #[test]
    fn test_contact_submission_and_expiry() {
        let mut app = test_app();
        go_to(&mut app, SectionId::Contact);
        let form = ElementId::ContactForm;

        for c in "Ana".chars() {
            content(&mut app, ContentMessage::Input(c));
        }
        content(&mut app, ContentMessage::NextField);
        content(&mut app, ContentMessage::Input('a'));
        content(&mut app, ContentMessage::Backspace);
        content(&mut app, ContentMessage::Input('@'));
        assert_eq!(app.surface.form(&form).unwrap().fields.name, "Ana");
        assert_eq!(app.surface.form(&form).unwrap().fields.email, "@");

        let t0 = Instant::now();
        content(&mut app, ContentMessage::Submit(t0));
        let state = app.surface.form(&form).unwrap();
        assert!(state.fields.is_empty());
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].1, ACK_TEXT);
        assert_eq!(app.contact_form.focus, ContactField::Name);

        update(&mut app, AppMessage::Tick(t0 + Duration::from_secs(4)));
        assert_eq!(app.surface.form(&form).unwrap().messages.len(), 1);

        update(&mut app, AppMessage::Tick(t0 + Duration::from_secs(5)));
        assert!(app.surface.form(&form).unwrap().messages.is_empty());
    }

    #[test]
    fn test_two_submissions_expire_independently() {
        let mut app = test_app();
        go_to(&mut app, SectionId::Contact);
        let form = ElementId::ContactForm;

        let t0 = Instant::now();
        content(&mut app, ContentMessage::Submit(t0));
        content(&mut app, ContentMessage::Submit(t0 + Duration::from_secs(2)));
        assert_eq!(app.surface.form(&form).unwrap().messages.len(), 2);

        update(&mut app, AppMessage::Tick(t0 + Duration::from_secs(5)));
        assert_eq!(app.surface.form(&form).unwrap().messages.len(), 1);

        update(&mut app, AppMessage::Tick(t0 + Duration::from_secs(7)));
        assert!(app.surface.form(&form).unwrap().messages.is_empty());
    }

    #[test]
    fn test_fade_in_follows_viewport() {
        let mut app = test_app();
        // 视口 8 行，底部收缩 2 行后只剩 0..6
        update(&mut app, AppMessage::Resize { width: 100, height: 12 });
        go_to(&mut app, SectionId::Portfolio);

        assert!(app.surface.has_class(&card("courtyard-home"), FADE_IN_CLASS));
        assert!(!app.surface.has_class(&card("monsoon-cafe"), FADE_IN_CLASS));
        assert!(!app.surface.has_class(&ElementId::AboutContent, FADE_IN_CLASS));

        content(&mut app, ContentMessage::SelectNext);
        assert!(app.surface.scroll().offset > 0);
        assert!(app.surface.has_class(&card("monsoon-cafe"), FADE_IN_CLASS));

        // 回到顶部也不会撤销
        content(&mut app, ContentMessage::SelectFirst);
        assert_eq!(app.surface.scroll().offset, 0);
        assert!(app.surface.has_class(&card("monsoon-cafe"), FADE_IN_CLASS));
    }

    #[test]
    fn test_filtered_out_cards_do_not_fade_in() {
        let mut app = test_app();
        update(&mut app, AppMessage::Resize { width: 100, height: 12 });
        go_to(&mut app, SectionId::Portfolio);
        for _ in 0..3 {
            content(&mut app, ContentMessage::NextFilter);
        }

        // 只剩 festive-table，排在第一张的位置
        assert!(app.surface.has_class(&card("festive-table"), FADE_IN_CLASS));
        assert!(!app.surface.has_class(&card("boutique-store"), FADE_IN_CLASS));
    }

    #[test]
    fn test_about_fades_in_on_arrival() {
        let mut app = test_app();
        go_to(&mut app, SectionId::About);
        update(&mut app, AppMessage::Tick(Instant::now()));
        assert!(app.surface.has_class(&ElementId::AboutContent, FADE_IN_CLASS));
    }

    #[test]
    fn test_escape_walks_back_to_navigation() {
        let mut app = test_app();
        update(&mut app, AppMessage::ShowHelp);
        assert!(app.modal.is_open());
        update(&mut app, AppMessage::ToggleFocus);
        assert!(app.focus.is_navigation());

        update(&mut app, AppMessage::Modal(ModalMessage::Close));
        assert!(!app.modal.is_open());

        update(&mut app, AppMessage::ToggleFocus);
        assert!(app.focus.is_content());
        update(&mut app, AppMessage::GoBack);
        assert!(app.focus.is_navigation());

        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }
}
