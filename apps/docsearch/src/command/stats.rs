use super::{Command, load_index};
use crate::config::Config;
use crate::error::Result;
use std::path::PathBuf;

pub struct StatsCommand {
    config: Config,
    index: Option<PathBuf>,
}

impl StatsCommand {
    pub fn new(cfg: Config, index: Option<PathBuf>) -> Self {
        Self { config: cfg, index }
    }
}

impl Command for StatsCommand {
    fn execute(&self) -> Result<()> {
        let index = load_index(&self.config, self.index.as_ref())?;

        println!("entries: {}", index.size());
        println!("pages: {}", index.pages().len());
        for (category, count) in index.categories() {
            println!("  {category:<12} {count}");
        }
        Ok(())
    }
}
