//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                                │
//！│                                                                             │
//！│   ┌─────────┐        ┌───────────┐        ┌──────────┐                      │
//！│   │  Event  │ ─────▶ │  Message  │ ─────▶ │  Update  │                      │
//！│   │   层    │  翻译   │    层     │  消费   │    层    │                      │
//！│   └─────────┘        └───────────┘        └────┬─────┘                      │
//！│        ▲                                       │ 调用                       │
//！│        │                                       ▼                            │
//！│   ┌─────────┐                          ┌────────────────┐                   │
//！│   │  View   │                          │ portfolio-core │                   │
//！│   │   层    │                          │    状态机      │                   │
//！│   └────┬────┘                          └───────┬────────┘                   │
//！│        │                                       │ Vec<Effect>                │
//！│        │        ┌──────────────────┐           ▼                            │
//！│        └─ 读取 ─│  Model 层         │ ◀── apply(&mut surface, effects)      │
//！│                 │  MemorySurface   │                                        │
//！│                 └──────────────────┘                                        │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 章节导航
//!
//!         pub mod document;   // 文档几何（卡片位置、视口、浮层）
//!         pub mod state;      // 页面数据状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App 同时持有两类东西：
//!
//!         · portfolio-core 的状态机
//!             projects: CatalogBrowser        // 作品详情 + 循环"下一个"
//!             journal: ArticleReader          // 文章浮层
//!             filter: FilterController        // 作品筛选
//!             contact: ContactForm            // 提交回执及其定时移除
//!             fade_in: FadeInWatcher          // 滚动淡入
//!             sections: SectionNav            // 锚点导航
//!
//!         · 它们的输出落到的地方
//!             surface: MemorySurface
//!
//!     状态机只返回 Vec<Effect>，Update 层把它们应用到 surface，
//!     View 层只读 surface 来决定画什么：
//!         - 哪个区域显示（列表 / 作品详情 / 文章浮层）
//!         - 卡片是否被筛掉、是否已经淡入
//!         - 详情页各个文本槽的内容
//!         - 当前章节和滚动偏移
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、页面（章节）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     没有单独的 Page 枚举。当前页面就是视口所在的章节：
//!         app.current_section() == surface.scroll().section
//!
//!     导航栏确认 → SectionNav::follow("#journal") → ScrollIntoView
//!         → surface 的章节切换 → 下一帧渲染对应页面
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、文档几何（document）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     淡入判定需要知道卡片在文档中的行位置，点击背景需要知道浮层区域。
//!     这些计算放在 document.rs，Update 与 View 共用同一份。
//!

mod app;
mod focus;
mod navigation;

pub mod document;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::NavigationState;
pub use state::{ContactField, Modal};
