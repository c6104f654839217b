//! 内容面板消息
//!
//! 同一条消息在不同页面含义不同，由 update/content.rs 按当前页面分发。

use std::time::Instant;

use portfolio_core::KeyInput;

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 / 滚动 ==========
    /// 上一项（或上滚一行）
    SelectPrevious,
    /// 下一项（或下滚一行）
    SelectNext,
    /// 第一项
    SelectFirst,
    /// 最后一项
    SelectLast,
    /// 在选中的卡片或链接上按下按键
    Activate(KeyInput),

    // ========== 作品页 ==========
    /// 上一个筛选按钮
    PrevFilter,
    /// 下一个筛选按钮
    NextFilter,
    /// 详情页"下一个作品"
    NextProject,
    /// 详情页"返回"
    CloseProject,

    // ========== 文章浮层 ==========
    /// 浮层关闭按钮
    CloseArticle,
    /// 浮层打开时的按键
    ArticleKey(KeyInput),

    // ========== 联系表单 ==========
    PrevField,
    NextField,
    Input(char),
    Backspace,
    /// 提交表单（携带提交时刻）
    Submit(Instant),
}
