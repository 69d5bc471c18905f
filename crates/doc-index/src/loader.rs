//! 解析文档生成器输出的搜索索引
//!
//! 支持的格式：
//! - `{"docs": [ ... ]}`
//! - 直接的 `[ ... ]` 记录数组
//! - 以上两种外包一层 JavaScript 赋值（Documenter 实际生成的格式）：
//!   `var documenterSearchIndex = {"docs": [ ... ]}`
//!
//! 任意一条记录格式错误都会导致整个索引被拒绝。

use serde::Deserialize;
use serde_json::Value;

use crate::entry::DocEntry;
use crate::error::{IndexError, Result};

/// 单条记录的原始结构，字段全部可选，以便缺失必填字段时按字段名报错
#[derive(Debug, Deserialize)]
struct RawEntry {
    location: Option<String>,
    category: Option<String>,
    #[serde(default)]
    page: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

pub fn parse_entries(raw: &str) -> Result<Vec<DocEntry>> {
    let body = strip_assignment(raw);
    let value: Value = serde_json::from_str(body)
        .map_err(|e| IndexError::format(format!("invalid JSON: {e}")))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("docs") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(IndexError::format(format!(
                    "`docs` must be an array, found {}",
                    kind_of(&other)
                )));
            }
            None => return Err(IndexError::format("missing top-level `docs` array")),
        },
        other => {
            return Err(IndexError::format(format!(
                "top-level value must be an array or an object with `docs`, found {}",
                kind_of(&other)
            )));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| parse_entry(position, item))
        .collect()
}

fn parse_entry(position: usize, item: Value) -> Result<DocEntry> {
    if !item.is_object() {
        return Err(IndexError::format(format!(
            "entry {position} must be an object, found {}",
            kind_of(&item)
        )));
    }

    let raw: RawEntry = serde_json::from_value(item)
        .map_err(|e| IndexError::format(format!("entry {position}: {e}")))?;

    let location = raw.location.ok_or_else(|| missing(position, "location"))?;
    let category = raw.category.ok_or_else(|| missing(position, "category"))?;

    Ok(DocEntry::new(
        location,
        raw.page.unwrap_or_default(),
        raw.title.unwrap_or_default(),
        raw.text.unwrap_or_default(),
        category.as_str(),
    ))
}

fn missing(position: usize, field: &str) -> IndexError {
    IndexError::format(format!("entry {position} is missing `{field}`"))
}

/// 去掉 BOM、开头的 `var name =`（或 `let`/`const`）以及结尾的 `;`
fn strip_assignment(raw: &str) -> &str {
    let trimmed = raw.trim().trim_start_matches('\u{FEFF}').trim_start();
    let is_assignment = ["var", "let", "const"].iter().any(|keyword| {
        trimmed
            .strip_prefix(keyword)
            .and_then(|rest| rest.chars().next())
            .is_some_and(char::is_whitespace)
    });
    if !is_assignment {
        return trimmed;
    }

    match trimmed.split_once('=') {
        Some((_, rhs)) => rhs.trim().trim_end_matches(';').trim_end(),
        None => trimmed,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
