//! 文档搜索索引
//!
//! 加载静态文档生成器输出的 `{"docs": [...]}` 搜索索引，
//! 提供忽略大小写的子串查询。索引是普通的值，每份索引文件构建一个实例，
//! 显式传递给调用方。

pub mod entry;
pub mod error;
pub mod index;
pub mod loader;
pub mod options;

pub use entry::{Category, DocEntry};
pub use error::{IndexError, Result};
pub use index::SearchIndex;
pub use options::QueryOptions;
