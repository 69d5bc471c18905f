use crate::error::Result;
use config::create_strategy;
use doc_index::QueryOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// 未指定 `--index` 时使用的索引文件
    pub index_path: Option<PathBuf>,
    /// 默认查询选项，命令行参数优先
    pub search: QueryOptions,
}

const EXAMPLE_CONFIG: &str = r#"# docsearch 配置文件
#
# 此文件在首次运行时自动创建

# 默认搜索索引文件（Documenter 生成的 search_index.js）
# index-path = "/path/to/docs/build/search_index.js"

[search]
# 默认只显示某一类条目
# category = "function"

# 默认最多显示的结果数
# limit = 20
"#;

impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    pub fn load() -> Result<Config> {
        let strategy = create_strategy()?;
        Self::load_from(&config::config_file_path(&strategy))
    }

    pub fn load_from(config_path: &Path) -> Result<Config> {
        match std::fs::read_to_string(config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // 配置文件不存在，创建示例配置文件
                Self::create_example_config(config_path)?;
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, EXAMPLE_CONFIG)?;
        tracing::info!("已创建配置文件: {}", config_path.display());
        Ok(())
    }
}
