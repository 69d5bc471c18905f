//! 索引记录

use serde::Serialize;
use std::fmt;

/// 记录所描述的文档单元类别（`page`、`section`、`type`、`function` 等），
/// 原样保留生成器给出的字符串
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 与类别名比较（忽略 ASCII 大小写）
    pub fn matches(&self, tag: &str) -> bool {
        self.0.eq_ignore_ascii_case(tag)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// 一条可检索的文档单元
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocEntry {
    /// 页面 URL 加章节锚点，如 `man/guide/#Setup`，不保证唯一
    pub location: String,
    pub page: String,
    pub title: String,
    pub text: String,
    pub category: Category,
}

impl DocEntry {
    pub fn new(
        location: impl Into<String>,
        page: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
        category: impl Into<Category>,
    ) -> Self {
        Self {
            location: location.into(),
            page: page.into(),
            title: title.into(),
            text: text.into(),
            category: category.into(),
        }
    }

    /// `location` 中第一个 `#` 之前的部分
    pub fn path(&self) -> &str {
        self.location
            .split_once('#')
            .map_or(self.location.as_str(), |(path, _)| path)
    }

    /// `location` 中第一个 `#` 之后的部分，没有 `#` 时为空
    pub fn anchor(&self) -> &str {
        self.location
            .split_once('#')
            .map_or("", |(_, anchor)| anchor)
    }
}
