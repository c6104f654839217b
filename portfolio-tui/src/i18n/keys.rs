//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **页面内容归对应页面**：如 `portfolio.*`, `journal.*`
//! 3. **跨组件复用归 `common.*`**
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 作品、文章与联系页的文案来自内容文件和站点配置，不在这里。

/// 所有翻译文本的根结构
pub struct Translations {
    pub common: CommonTexts,
    pub hints: HintTexts,
    pub nav: NavTexts,
    pub home: HomeTexts,
    pub about: AboutTexts,
    pub portfolio: PortfolioTexts,
    pub journal: JournalTexts,
    pub contact: ContactTexts,
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub back: &'static str,
    pub close: &'static str,
    pub next: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub space: &'static str,
    pub arrows_lr: &'static str,
    pub arrows_ud: &'static str,
}

/// 动作描述
pub struct ActionTexts {
    pub switch_panel: &'static str,
    pub navigate: &'static str,
    pub go: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub filter: &'static str,
    pub scroll: &'static str,
    pub field: &'static str,
    pub send: &'static str,
    pub help: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

pub struct NavTexts {
    pub title: &'static str,
    pub home: &'static str,
    pub about: &'static str,
    pub portfolio: &'static str,
    pub journal: &'static str,
    pub contact: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

pub struct HomeTexts {
    pub eyebrow: &'static str,
    pub view_portfolio: &'static str,
}

pub struct AboutTexts {
    pub heading: &'static str,
}

pub struct PortfolioTexts {
    /// "All" 筛选按钮
    pub all: &'static str,
    /// 筛选后的状态栏前缀
    pub showing: &'static str,
    pub no_projects: &'static str,
    pub concept: &'static str,
    pub reflection: &'static str,
    pub next_project: &'static str,
    pub back_to_portfolio: &'static str,
}

pub struct JournalTexts {
    pub no_articles: &'static str,
    pub close_button: &'static str,
    pub read_hint: &'static str,
}

pub struct ContactTexts {
    pub email_label: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub message: &'static str,
    pub send: &'static str,
}

// ============================================================================
// 帮助弹窗
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub portfolio: &'static str,
    pub journal: &'static str,
    pub contact: &'static str,
    pub switch_panel: &'static str,
    pub move_select: &'static str,
    pub open_card: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
    pub filter: &'static str,
    pub next_project: &'static str,
    pub close_article: &'static str,
    pub click_backdrop: &'static str,
    pub change_field: &'static str,
    pub send: &'static str,
    pub close_hint: &'static str,
}
