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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘、鼠标、窗口变化转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     handle_event 接收以下 Event 类型：
//!         Event::Key(KeyEvent)            // 键盘事件
//!         Event::Mouse(MouseEvent)        // 鼠标左键按下 → AppMessage::Pointer
//!         Event::Resize(width, height)    // 终端大小改变 → AppMessage::Resize
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 键盘事件的优先级
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     1. 帮助弹窗打开          → handle_modal_keys
//!     2. Ctrl+C / Alt+q       → 退出
//!     3. 文章浮层打开          → handle_article_keys
//!            Esc   → ArticleKey(Escape)      // 由 ArticleReader 决定是否关闭
//!            x     → CloseArticle            // 关闭按钮
//!     4. 焦点在联系表单        → handle_contact_keys
//!            字符   → Input(c)               // ? 和 n 也只是字符
//!            Ctrl+S / 提交按钮上 Enter → Submit(now)
//!     5. 全局快捷键            ?、Alt+h、Esc、Tab
//!     6. 按焦点分发            handle_navigation_keys / handle_content_keys
//!
//!
//!     卡片的键盘激活：
//!         Enter → Activate(KeyInput::Enter)
//!         空格  → Activate(KeyInput::Space)
//!         是否打开由 portfolio-core 判断（KeyInput::activates_card）。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
