//! 内容服务
//!
//! 提供作品与文章目录。未配置内容文件时使用内置内容。

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use portfolio_core::content::default_catalogs;
use portfolio_core::Catalogs;

/// 内容服务 trait
pub trait ContentService: Send + Sync {
    /// 加载目录
    fn load(&self) -> Result<Catalogs>;
}

/// 本地内容服务
pub struct LocalContentService {
    path: Option<PathBuf>,
}

impl LocalContentService {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl ContentService for LocalContentService {
    fn load(&self) -> Result<Catalogs> {
        let catalogs = match &self.path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read content {}", path.display()))?;
                Catalogs::from_json(&raw)
                    .with_context(|| format!("Invalid content {}", path.display()))?
            }
            None => default_catalogs().context("Built-in content is invalid")?,
        };

        log::info!(
            "Loaded {} projects and {} articles",
            catalogs.projects.len(),
            catalogs.articles.len()
        );
        Ok(catalogs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn write_content(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("portfolio-content-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_builtin_content() {
        let catalogs = LocalContentService::new(None).load().unwrap();
        assert!(!catalogs.projects.is_empty());
        assert!(!catalogs.articles.is_empty());
    }

    #[test]
    fn test_content_file() {
        let path = write_content(
            "content.json",
            r#"{
                "projects": [{
                    "id": "loft", "title": "Loft", "category": "Residential", "tag": "residential",
                    "emoji": "🏠", "concept": "Open plan.", "reflection": "Light everywhere."
                }],
                "articles": [{
                    "id": "light", "icon": "☀", "title": "On Light", "date": "2024",
                    "body": ["One.", "Two."], "closing": "Fin."
                }]
            }"#,
        );
        let catalogs = LocalContentService::new(Some(path)).load().unwrap();
        assert_eq!(catalogs.projects.keys().collect::<Vec<_>>(), ["loft"]);
        assert_eq!(catalogs.articles.get("light").unwrap().body.len(), 2);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let path = write_content(
            "duplicate.json",
            r#"{
                "projects": [
                    { "id": "a", "title": "A", "category": "", "tag": "x", "emoji": "", "concept": "", "reflection": "" },
                    { "id": "a", "title": "B", "category": "", "tag": "x", "emoji": "", "concept": "", "reflection": "" }
                ],
                "articles": []
            }"#,
        );
        assert!(LocalContentService::new(Some(path)).load().is_err());
    }
}
