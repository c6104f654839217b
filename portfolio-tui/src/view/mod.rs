//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读 Model，把它画到终端上。页面"长什么样"全部取自渲染表面：
//!
//!     surface.is_shown(ProjectDetail)     → 画作品详情而不是列表
//!     surface.is_shown(ArticleDetail)     → 在最上层画文章浮层
//!     surface.is_visible(card)            → 卡片是否被筛掉
//!     surface.has_class(card, "fade-in")  → 卡片是否已经淡入（之前以弱化色绘制）
//!     surface.is_active(filter_control)   → 哪个筛选按钮高亮
//!     surface.text(slot)                  → 详情页各个文本槽
//!     surface.scroll()                    → 当前章节与滚动偏移
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 导航 + 页面 + 状态栏
//!         mod components;     // 导航、状态栏、文章浮层、帮助弹窗
//!         mod pages;          // 各章节页面
//!         pub mod theme;      // 主题颜色
//!
//!     区域划分与 Update 层共用 model::document，
//!     所以卡片的行位置、浮层的范围在两边完全一致。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
