//! 测试辅助模块
//!
//! 提供小型示例目录和便捷的测试工厂方法。

#![allow(clippy::panic)]

use crate::catalog::{Catalog, Catalogs};
use crate::types::{Article, Project};

pub fn project(id: &str, title: &str, tag: &str) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        category: format!("{title} / {tag}"),
        tag: tag.to_string(),
        emoji: format!("[{id}]"),
        concept: format!("{title} concept"),
        reflection: format!("{title} reflection"),
    }
}

pub fn article(id: &str, title: &str, body: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        icon: "✎".to_string(),
        title: title.to_string(),
        date: "2024".to_string(),
        excerpt: String::new(),
        body: body.iter().map(|p| (*p).to_string()).collect(),
        closing: format!("{title} closing"),
    }
}

/// `p1: Loft`, `p2: Villa`, `p3: Studio`
pub fn sample_projects() -> Catalog<Project> {
    Catalog::new(vec![
        project("p1", "Loft", "residential"),
        project("p2", "Villa", "commercial"),
        project("p3", "Studio", "residential"),
    ])
    .unwrap_or_else(|e| panic!("sample projects: {e}"))
}

pub fn sample_articles() -> Catalog<Article> {
    let mut light = article("a1", "On Light", &["Morning light.", "Evening light."]);
    light.icon = "☀".to_string();
    light.date = "March 2024".to_string();
    light.closing = "Let the light in.".to_string();

    Catalog::new(vec![light, article("a2", "On Clay", &["Clay and lime."])])
        .unwrap_or_else(|e| panic!("sample articles: {e}"))
}

pub fn sample_catalogs() -> Catalogs {
    Catalogs {
        projects: sample_projects(),
        articles: sample_articles(),
    }
}
