//! 项目相关类型定义

use serde::{Deserialize, Serialize};

/// 作品集项目
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    /// 项目 ID（目录内唯一）
    pub id: String,
    /// 项目标题
    pub title: String,
    /// 展示用分类文本
    pub category: String,
    /// 筛选用分类标签（对应筛选按钮）
    pub tag: String,
    /// 详情页头图字符
    pub emoji: String,
    /// 设计理念
    pub concept: String,
    /// 项目回顾
    pub reflection: String,
}
