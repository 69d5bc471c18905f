//! 内存搜索索引
//!
//! 加载时为每条记录的标题和正文各生成一份小写副本，查询时线性扫描。
//! 结果排序：
//! 1. 标题命中优先于仅正文命中
//! 2. 标题较短者优先
//! 3. 加载顺序

use std::collections::HashSet;
use std::path::Path;

use crate::entry::{Category, DocEntry};
use crate::error::{IndexError, Result};
use crate::loader;
use crate::options::QueryOptions;

/// 逐字符转小写，不做上下文相关的映射（如希腊字母词尾 Σ → ς）
fn fold(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// 单条记录的小写检索字段
#[derive(Debug, Clone)]
struct Folded {
    title: String,
    text: String,
}

impl Folded {
    fn new(entry: &DocEntry) -> Self {
        Self {
            title: fold(&entry.title),
            text: fold(&entry.text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchKind {
    Title,
    Text,
}

/// 从一份搜索索引文件加载的只读记录集合
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<DocEntry>,
    folded: Vec<Folded>,
}

impl SearchIndex {
    /// 解析序列化的搜索索引，支持的格式见 [`loader`]
    pub fn load(raw: &str) -> Result<Self> {
        let entries = loader::parse_entries(raw)?;
        let index = Self::from_entries(entries);
        tracing::debug!("[doc-index] 已加载 {} 条记录", index.size());
        Ok(index)
    }

    pub fn load_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("[doc-index] 读取索引文件: {}", path.display());
        Self::load(&raw)
    }

    pub fn from_entries(entries: Vec<DocEntry>) -> Self {
        let folded = entries.iter().map(Folded::new).collect();
        Self { entries, folded }
    }

    pub fn query(&self, text: &str) -> Result<Vec<&DocEntry>> {
        self.query_with(text, &QueryOptions::default())
    }

    /// 返回标题或正文包含 `text` 的记录（忽略大小写）
    ///
    /// `text` 按原样匹配，不去除首尾空白；全为空白时返回
    /// [`IndexError::InvalidQuery`]。
    pub fn query_with(&self, text: &str, options: &QueryOptions) -> Result<Vec<&DocEntry>> {
        if text.trim().is_empty() {
            return Err(IndexError::InvalidQuery);
        }

        let needle = fold(text);
        let mut hits: Vec<(MatchKind, usize, &DocEntry)> = self
            .entries
            .iter()
            .zip(&self.folded)
            .filter(|(entry, _)| options.accepts(entry))
            .filter_map(|(entry, folded)| {
                let kind = if folded.title.contains(&needle) {
                    MatchKind::Title
                } else if folded.text.contains(&needle) {
                    MatchKind::Text
                } else {
                    return None;
                };
                Some((kind, entry.title.chars().count(), entry))
            })
            .collect();

        // 稳定排序：键相同时保持加载顺序
        hits.sort_by_key(|&(kind, title_len, _)| (kind, title_len));

        let limit = options.limit.unwrap_or(usize::MAX);
        let results: Vec<&DocEntry> = hits
            .into_iter()
            .take(limit)
            .map(|(_, _, entry)| entry)
            .collect();

        tracing::trace!("[doc-index] 查询 '{}' 命中 {} 条记录", text, results.len());
        Ok(results)
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[DocEntry] {
        &self.entries
    }

    /// 去重后的页面名，按首次出现顺序
    pub fn pages(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|entry| entry.page.as_str())
            .filter(|page| seen.insert(*page))
            .collect()
    }

    /// 各类别的记录数，按首次出现顺序
    pub fn categories(&self) -> Vec<(&Category, usize)> {
        let mut counts: Vec<(&Category, usize)> = Vec::new();
        for entry in &self.entries {
            match counts.iter().position(|(category, _)| *category == &entry.category) {
                Some(i) => counts[i].1 += 1,
                None => counts.push((&entry.category, 1)),
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const WIDGET: &str = r##"{"docs":[{"location":"#A","page":"Home","title":"Widget","text":"A widget does X","category":"type"}]}"##;

    fn sample() -> SearchIndex {
        SearchIndex::from_entries(vec![
            DocEntry::new("#intro", "Guide", "Introduction", "Build a parser step by step", "section"),
            DocEntry::new("#Parser", "API", "Parser", "Type holding parser state", "type"),
            DocEntry::new("#parse", "API", "parse", "Run the parser over input", "function"),
            DocEntry::new("#", "API", "API", "Parser\nparse\nTokenizer", "page"),
            DocEntry::new("#ParserError", "API", "ParserError", "", "type"),
            DocEntry::new("#Tokenizer", "API", "Tokenizer", "Splits input for the PARSER", "type"),
        ])
    }

    fn locations(hits: &[&DocEntry]) -> Vec<String> {
        hits.iter().map(|e| e.location.clone()).collect()
    }

    #[test]
    fn test_widget_title_match() {
        let index = SearchIndex::load(WIDGET).unwrap();
        let hits = index.query("widget").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].location, "#A");
    }

    #[test]
    fn test_no_match_is_empty() {
        let index = SearchIndex::load(WIDGET).unwrap();
        assert!(index.query("nonexistent").unwrap().is_empty());
    }

    #[test]
    fn test_empty_index_returns_nothing() {
        let index = SearchIndex::load(r#"{"docs":[]}"#).unwrap();
        assert_eq!(index.size(), 0);
        assert!(index.is_empty());
        assert!(index.query("anything").unwrap().is_empty());
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n")]
    fn test_blank_query_rejected(#[case] query: &str) {
        let index = sample();
        assert!(matches!(index.query(query), Err(IndexError::InvalidQuery)));
    }

    #[test]
    fn test_ordering() {
        let index = sample();
        let hits = index.query("parse").unwrap();
        // title hits first, each group by title length
        assert_eq!(
            locations(&hits),
            vec!["#parse", "#Parser", "#ParserError", "#", "#Tokenizer", "#intro"]
        );
    }

    #[test]
    fn test_equal_title_length_keeps_load_order() {
        let index = SearchIndex::from_entries(vec![
            DocEntry::new("#b", "P", "beta", "", "section"),
            DocEntry::new("#a", "P", "alfa", "", "section"),
            DocEntry::new("#c", "P", "zeta", "", "section"),
        ]);
        assert_eq!(locations(&index.query("a").unwrap()), vec!["#b", "#a", "#c"]);
    }

    #[test]
    fn test_case_insensitive() {
        let index = sample();
        let lower = index.query("tokenizer").unwrap();
        let upper = index.query("TOKENIZER").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(locations(&lower), vec!["#Tokenizer", "#"]);
    }

    #[rstest]
    #[case("Σ")]
    #[case("ΟΔΟΣ")]
    #[case("οδοσ")]
    fn test_greek_final_sigma_matches_title(#[case] query: &str) {
        let index = SearchIndex::from_entries(vec![DocEntry::new("#A", "Home", "ΟΔΟΣ", "", "type")]);
        let hits = index.query(query).unwrap();
        assert_eq!(locations(&hits), vec!["#A"]);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let index = sample();
        // " parser" only occurs inside texts, never in a title
        let hits = index.query(" parser").unwrap();
        assert_eq!(locations(&hits), vec!["#parse", "#Parser", "#Tokenizer", "#intro"]);
    }

    #[test]
    fn test_every_hit_contains_query() {
        let index = sample();
        for query in ["parse", "Type", "input", "x", "er\np"] {
            let needle = fold(query);
            for hit in index.query(query).unwrap() {
                assert!(
                    fold(&hit.title).contains(&needle) || fold(&hit.text).contains(&needle),
                    "{query:?} returned {hit:?}"
                );
            }
        }
    }

    #[test]
    fn test_query_is_idempotent() {
        let index = sample();
        assert_eq!(index.query("parse").unwrap(), index.query("parse").unwrap());
    }

    #[test]
    fn test_category_filter_and_limit() {
        let index = sample();
        let types = QueryOptions::default().with_category("type");
        assert_eq!(
            locations(&index.query_with("parse", &types).unwrap()),
            vec!["#Parser", "#ParserError", "#Tokenizer"]
        );

        let limited = types.with_limit(1);
        assert_eq!(locations(&index.query_with("parse", &limited).unwrap()), vec!["#Parser"]);
    }

    #[test]
    fn test_failed_query_leaves_index_usable() {
        let index = sample();
        assert!(index.query("").is_err());
        assert_eq!(index.size(), 6);
        assert_eq!(index.query("tokenizer").unwrap().len(), 2);
    }

    #[test]
    fn test_pages_and_categories() {
        let index = sample();
        assert_eq!(index.pages(), vec!["Guide", "API"]);

        let categories: Vec<(&str, usize)> = index
            .categories()
            .into_iter()
            .map(|(category, count)| (category.as_str(), count))
            .collect();
        assert_eq!(
            categories,
            vec![("section", 1), ("type", 3), ("function", 1), ("page", 1)]
        );
    }

    #[test]
    fn test_load_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search_index.js");
        assert!(matches!(SearchIndex::load_path(&path), Err(IndexError::Io { .. })));
    }

    #[test]
    fn test_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search_index.js");
        std::fs::write(&path, format!("var documenterSearchIndex = {WIDGET}")).unwrap();
        let index = SearchIndex::load_path(&path).unwrap();
        assert_eq!(index.size(), 1);
    }

    #[test]
    fn test_index_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchIndex>();
    }
}
