use super::{Command, load_index};
use crate::config::Config;
use crate::error::Result;
use doc_index::{DocEntry, QueryOptions};
use std::path::PathBuf;

pub struct QueryCommand {
    config: Config,
    index: Option<PathBuf>,
    query: String,
    options: QueryOptions,
    json: bool,
}

impl QueryCommand {
    pub fn new(
        cfg: Config,
        index: Option<PathBuf>,
        query: String,
        category: Option<String>,
        limit: Option<usize>,
        json: bool,
    ) -> Self {
        // 命令行参数覆盖配置文件中的默认值
        let mut options = cfg.search.clone();
        if category.is_some() {
            options.category = category;
        }
        if limit.is_some() {
            options.limit = limit;
        }

        Self {
            config: cfg,
            index,
            query,
            options,
            json,
        }
    }
}

impl Command for QueryCommand {
    fn execute(&self) -> Result<()> {
        let index = load_index(&self.config, self.index.as_ref())?;
        let hits = index.query_with(&self.query, &self.options)?;
        tracing::debug!("'{}' matched {} of {} entries", self.query, hits.len(), index.size());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&hits)?);
            return Ok(());
        }

        if hits.is_empty() {
            println!("No matching entries");
        }
        for hit in hits {
            println!("{}", format_hit(hit));
        }
        Ok(())
    }
}

fn format_hit(entry: &DocEntry) -> String {
    let title = if entry.title.is_empty() {
        entry.page.as_str()
    } else {
        entry.title.as_str()
    };
    format!("[{}] {}\n    {} ({})", entry.category, title, entry.location, entry.page)
}
