//!
//! src/backend/mod.rs
//! Backend 层：启动时的数据来源
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 应用配置（主题、语言、页面文案、内容路径）
//!         mod content_service;    // 作品与文章目录
//!
//!
//!     两个服务都以 trait 暴露，本地实现从 JSON 文件读取：
//!
//!         ConfigService::load()   → AppConfig
//!         ContentService::load()  → portfolio_core::Catalogs
//!
//!     main.rs 在进入主循环前调用一次，其后的一切交互
//!     都由 portfolio-core 的状态机完成，不再访问 Backend。
//!

mod config_service;
mod content_service;

pub use config_service::{ConfigService, LocalConfigService};
pub use content_service::{ContentService, LocalContentService};
