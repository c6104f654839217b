//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!     terminal.rs     终端的初始化和恢复（原始模式、备用屏幕、鼠标捕获）
//!     logging.rs      文件日志（tracing-subscriber + EnvFilter）
//!
//!
//!     初始化终端：
//!
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显：联系表单的输入由应用自己绘制
//!
//!         · Alternate Screen（备用屏幕）
//!             - 退出后自动恢复主屏幕内容
//!
//!         · Mouse Capture（鼠标捕获）
//!             - 文章浮层打开时，点击背景即关闭
//!
//!
//!     日志：
//!         终端的 stdout 已被界面占用，日志只能写文件：
//!             <data_local_dir>/portfolio-tui/portfolio-tui.log
//!         过滤级别读取环境变量 PORTFOLIO_LOG，默认 info。
//!
//!
//! 无论程序是正常退出还是发生错误，都必须调用 restore_terminal()！
//!     —— 去往 src/app.rs 主循环吧
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, with_restore, Term};
