//! 应用主消息枚举

use std::time::Instant;

use super::{ContentMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 返回（关闭弹窗、详情或浮层）
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 鼠标左键按下（屏幕坐标）
    Pointer { column: u16, row: u16 },

    /// 终端大小改变
    Resize { width: u16, height: u16 },

    /// 时钟推进：到期回执移除、淡入判定
    Tick(Instant),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
