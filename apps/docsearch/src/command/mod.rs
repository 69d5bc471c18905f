pub mod query;
pub mod stats;

use crate::config::Config;
use crate::error::{OptionExt, Result, WrapErr};
use doc_index::SearchIndex;
use std::path::PathBuf;

pub use query::QueryCommand;
pub use stats::StatsCommand;

pub trait Command {
    fn execute(&self) -> Result<()>;
}

/// Load the index named on the command line, or the one from the config file.
fn load_index(config: &Config, index: Option<&PathBuf>) -> Result<SearchIndex> {
    let path = index
        .or(config.index_path.as_ref())
        .ok_or_eyre("no search index given; pass --index or set `index-path` in the config file")?;

    SearchIndex::load_path(path)
        .wrap_err_with(|| format!("Load search index {} error", path.display()))
}
