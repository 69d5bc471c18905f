use serde::{Deserialize, Serialize};

use crate::entry::DocEntry;

/// 查询的附加条件，默认不限类别、不限数量
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct QueryOptions {
    /// 只保留该类别的记录（忽略大小写）
    pub category: Option<String>,
    /// 排序后最多保留的结果数
    pub limit: Option<usize>,
}

impl QueryOptions {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn accepts(&self, entry: &DocEntry) -> bool {
        self.category
            .as_deref()
            .is_none_or(|tag| entry.category.matches(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accepts_everything() {
        let entry = DocEntry::new("#A", "Home", "Widget", "", "type");
        assert!(QueryOptions::default().accepts(&entry));
    }

    #[test]
    fn test_category_filter() {
        let entry = DocEntry::new("#A", "Home", "Widget", "", "type");
        assert!(QueryOptions::default().with_category("TYPE").accepts(&entry));
        assert!(!QueryOptions::default().with_category("function").accepts(&entry));
    }

    #[test]
    fn test_deserialize_kebab_case() {
        let options: QueryOptions = serde_json::from_str(r#"{"limit": 3}"#).unwrap();
        assert_eq!(options, QueryOptions::default().with_limit(3));
    }
}
