//! 日志文章相关类型定义

use serde::{Deserialize, Serialize};

/// 日志文章
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// 文章 ID（目录内唯一）
    pub id: String,
    /// 图标字符
    pub icon: String,
    /// 标题
    pub title: String,
    /// 发布日期（展示文本）
    pub date: String,
    /// 卡片摘要
    #[serde(default)]
    pub excerpt: String,
    /// 正文段落（按顺序渲染）
    pub body: Vec<String>,
    /// 结语
    pub closing: String,
}
