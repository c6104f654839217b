//! 国际化（i18n）模块
//!
//! 界面文字的多语言支持。使用纯 Rust 结构体方案，编译期类型检查。
//! 作品、文章等内容本身不翻译。

use std::sync::atomic::{AtomicUsize, Ordering};

use portfolio_core::filter::FilterTag;
use portfolio_core::section::SectionId;

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::Translations;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 简体中文（中国）
    ZhCn,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0);

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &zh_cn::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::ZhCn => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 章节名称
pub fn section_label(section: SectionId) -> &'static str {
    let nav = &t().nav;
    match section {
        SectionId::Home => nav.home,
        SectionId::About => nav.about,
        SectionId::Portfolio => nav.portfolio,
        SectionId::Journal => nav.journal,
        SectionId::Contact => nav.contact,
    }
}

/// 作品详情按钮文字：返回列表、下一个作品
pub fn detail_button_labels() -> (String, String) {
    let texts = &t().portfolio;
    (
        format!(" ← {} ", texts.back_to_portfolio),
        format!(" {} → ", texts.next_project),
    )
}

/// 筛选按钮上的文字：分类标签首字母大写
pub fn filter_label(tag: &FilterTag) -> String {
    match tag {
        FilterTag::All => t().portfolio.all.to_string(),
        FilterTag::Category(category) => {
            let mut chars = category.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect())
                .unwrap_or_default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("zh"), Some(Language::ZhCn));
        assert_eq!(Language::from_code("en-US").unwrap().code(), "en-US");
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_filter_label() {
        assert_eq!(filter_label(&FilterTag::parse("residential")), "Residential");
        assert_eq!(filter_label(&FilterTag::Category(String::new())), "");
    }
}
