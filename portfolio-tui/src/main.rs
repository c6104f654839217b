//! Portfolio TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与内容加载 (`backend/`)
//!
//! 页面交互逻辑（作品详情、文章浮层、筛选、淡入、联系表单）都在
//! `portfolio-core` 中，这里只负责把按键翻译成对它们的调用并画出结果。
//!
//!
//! main.rs
//! Portfolio TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入数据目录，终端留给界面
//!     load config             // 语言、主题、站点文案、内容文件路径
//!     load content            // 作品与文章目录
//!     init_terminal()         // 初始化终端，得到 terminal: Terminal<...>
//!     model::App::new()       // 创建 APP 实例
//!     with_restore(..)        // 读取终端大小、运行 app.rs 主循环，
//!                             // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//!
//! 当启动程序时，main.rs：
//!     `init_terminal()`         // from util/terminal.rs
//!
//!     有：
//!         · enable_raw_mode()
//!             - 以关闭终端行缓冲模式、关闭回显与允许读取单个按键事件
//!         · execute!(io::stdout , EnterAlternateScreen , EnableMouseCapture)?
//!             - 切换到 备用屏幕，并接收鼠标点击
//!         · 返回 Terminal 对象
//!
//!
//!     App::new()              // from model/app.rs
//!     创建终端初始状态（在 /app.rs 下细嗦）
//!
//!
//!     进入主循环 app::run()   // from /app.rs

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use ratatui::layout::Rect;

use backend::{ConfigService, ContentService, LocalConfigService, LocalContentService};
use i18n::{set_language, Language};
use util::{init_logging, init_terminal, restore_terminal, with_restore};
use view::theme::set_theme;

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志
    let log_path = init_logging()?;
    log::info!("Portfolio TUI starting, logging to {}", log_path.display());

    // 2. 配置
    let config = LocalConfigService::new().load()?;
    let language = Language::from_code(&config.language).unwrap_or_else(|| {
        log::warn!("Unknown language {:?}, falling back to en-US", config.language);
        Language::default()
    });
    set_language(language);
    set_theme(config.theme, &config.site.palette);
    log::info!("Language: {}, theme: {:?}", language.code(), config.theme);

    // 3. 内容
    let catalogs = LocalContentService::new(config.content_path.clone()).load()?;

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环；之后无论成功失败都恢复终端
    let site = config.site;
    let result = with_restore(
        &mut terminal,
        |terminal| {
            let size = terminal.size().context("Failed to read terminal size")?;
            let screen = Rect::new(0, 0, size.width, size.height);
            let mut app = model::App::new(site, catalogs, screen);
            app::run(terminal, &mut app)
        },
        restore_terminal,
    );

    if let Err(ref e) = result {
        log::error!("Portfolio TUI exited with error: {e:#}");
    }
    result
}
