//! Immutable, ordered record catalogs

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{Article, Project};

/// A record addressable by a catalog key
pub trait CatalogRecord {
    fn id(&self) -> &str;
}

impl CatalogRecord for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl CatalogRecord for Article {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Fixed collection of records, kept in definition order.
///
/// Built once before any interaction and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalog<R> {
    records: Vec<R>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl<R: CatalogRecord> Catalog<R> {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(records: Vec<R>) -> CoreResult<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id().to_string(), position).is_some() {
                return Err(CoreError::DuplicateKey(record.id().to_string()));
            }
        }
        Ok(Self { records, index })
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.position(id).map(|position| &self.records[position])
    }

    /// Position of `id` in definition order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn at(&self, position: usize) -> Option<&R> {
        self.records.get(position)
    }

    /// Keys in definition order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(CatalogRecord::id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: CatalogRecord> Default for Catalog<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<'a, R> IntoIterator for &'a Catalog<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<'de, R> Deserialize<'de> for Catalog<R>
where
    R: Deserialize<'de> + CatalogRecord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let records = Vec::<R>::deserialize(deserializer)?;
        Self::new(records).map_err(serde::de::Error::custom)
    }
}

/// Both catalogs the site is built from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalogs {
    pub projects: Catalog<Project>,
    pub articles: Catalog<Article>,
}

impl Catalogs {
    /// Decode catalogs from a JSON document with `projects` and `articles` arrays.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::InvalidContent(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_utils::{project, sample_projects};

    #[test]
    fn test_keys_keep_definition_order() {
        let catalog = sample_projects();
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["p1", "p2", "p3"]);
        assert_eq!(catalog.position("p3"), Some(2));
        assert_eq!(catalog.get("p2").unwrap().title, "Villa");
    }

    #[test]
    fn test_unknown_key() {
        let catalog = sample_projects();
        assert!(catalog.get("p9").is_none());
        assert!(!catalog.contains("p9"));
        assert_eq!(catalog.position("p9"), None);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = Catalog::new(vec![
            project("p1", "Loft", "residential"),
            project("p1", "Villa", "residential"),
        ]);
        assert!(matches!(result, Err(CoreError::DuplicateKey(ref k)) if k == "p1"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "projects": [
                {"id": "p1", "title": "Loft", "category": "Residential", "tag": "residential",
                 "emoji": "🏠", "concept": "c", "reflection": "r"}
            ],
            "articles": [
                {"id": "a1", "icon": "✎", "title": "On Light", "date": "May 2024",
                 "body": ["one", "two"], "closing": "end"}
            ]
        }"#;
        let catalogs = Catalogs::from_json(json).unwrap();
        assert_eq!(catalogs.projects.len(), 1);
        assert_eq!(catalogs.articles.get("a1").unwrap().body.len(), 2);
        assert!(catalogs.articles.get("a1").unwrap().excerpt.is_empty());
    }

    #[test]
    fn test_from_json_duplicate_is_invalid_content() {
        let json = r#"{"projects": [], "articles": [
            {"id": "a1", "icon": "", "title": "", "date": "", "body": [], "closing": ""},
            {"id": "a1", "icon": "", "title": "", "date": "", "body": [], "closing": ""}
        ]}"#;
        let err = Catalogs::from_json(json).unwrap_err();
        assert!(matches!(err, CoreError::InvalidContent(ref m) if m.contains("a1")));
        assert!(err.is_expected());
    }
}
