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
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! Event 层把按键、鼠标、窗口变化和时钟翻译成 Message，
//! Update 层根据 Message 驱动 portfolio-core 的状态机。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息（退出、焦点、返回、时钟、鼠标……）
//!         mod content;        // 内容面板子消息（卡片、筛选、浮层、表单）
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 导航栏子消息
//!
//!
//!     带时间的消息：
//!         AppMessage::Tick(Instant)               // 主循环每 100ms 左右发送
//!         ContentMessage::Submit(Instant)         // 按下提交的时刻
//!
//!     时间由 Event 层在边界处读取，Update 层本身不读时钟，
//!     测试因此可以任意构造时刻。
//!
//!     鼠标：
//!         AppMessage::Pointer { column, row }
//!         Update 层根据文章浮层区域判断点到的是背景还是内容。
//!
//!
//! 最后，Event 将消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
