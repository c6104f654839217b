//! 应用主状态结构

use portfolio_core::contact::ContactForm;
use portfolio_core::fade_in::{FadeInOptions, FadeInWatcher};
use portfolio_core::filter::FilterController;
use portfolio_core::section::{SectionId, SectionNav};
use portfolio_core::surface::{ElementId, SurfaceId};
use portfolio_core::types::SiteConfig;
use portfolio_core::{ArticleReader, CatalogBrowser, Catalogs, MemorySurface};
use ratatui::layout::Rect;

use super::document::{self, FADE_IN_MARGIN_ROWS};
use super::state::{ContactState, ModalState, Selection};
use super::{FocusPanel, NavigationState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 页面文案与配色
    pub site: SiteConfig,

    /// 渲染表面：View 层从这里读取页面当前的样子
    pub surface: MemorySurface,

    // === 交互状态机 ===
    pub sections: SectionNav,
    pub projects: CatalogBrowser,
    pub journal: ArticleReader,
    pub filter: FilterController,
    pub contact: ContactForm,
    pub fade_in: FadeInWatcher,

    // === 各页面状态 ===
    /// 作品卡片光标（在可见卡片中计数）
    pub portfolio: Selection,
    /// 文章卡片光标
    pub articles: Selection,
    /// 联系表单焦点
    pub contact_form: ContactState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 终端大小
    pub screen: Rect,
}

impl App {
    /// 用站点配置和目录创建应用实例
    pub fn new(site: SiteConfig, catalogs: Catalogs, screen: Rect) -> Self {
        let surface = MemorySurface::for_site(&catalogs);
        let filter = FilterController::for_catalog(&catalogs.projects);
        let sections = SectionNav::new(surface.sections().to_vec());
        let navigation = NavigationState::new(sections.sections());

        let mut fade_in = FadeInWatcher::new(FadeInOptions {
            bottom_margin: FADE_IN_MARGIN_ROWS,
            ..FadeInOptions::default()
        });
        for card in filter.cards() {
            fade_in.observe(card.element(), None);
        }
        fade_in.observe(ElementId::AboutContent, None);

        let contact = ContactForm::new(ElementId::ContactForm);
        let Catalogs { projects, articles } = catalogs;

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation,
            status_message: None,
            site,
            surface,
            sections,
            projects: CatalogBrowser::new(projects),
            journal: ArticleReader::new(articles),
            filter,
            contact,
            fade_in,
            portfolio: Selection::default(),
            articles: Selection::default(),
            contact_form: ContactState::default(),
            modal: ModalState::new(),
            screen,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 视口当前所在的章节
    pub fn current_section(&self) -> SectionId {
        self.surface.scroll().section
    }

    pub fn is_project_detail_open(&self) -> bool {
        self.surface.is_shown(SurfaceId::ProjectDetail)
    }

    pub fn is_article_open(&self) -> bool {
        self.surface.is_shown(SurfaceId::ArticleDetail)
    }

    /// 当前未被筛选隐藏的作品 ID，按目录顺序
    pub fn visible_project_ids(&self) -> Vec<&str> {
        self.projects
            .catalog()
            .iter()
            .filter(|p| {
                self.surface
                    .is_visible(&ElementId::PortfolioCard(p.id.clone()))
            })
            .map(|p| p.id.as_str())
            .collect()
    }

    /// 可滚动文档的视口
    pub fn viewport(&self) -> Rect {
        document::page_viewport(self.screen)
    }
}
