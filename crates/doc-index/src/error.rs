use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// 索引文件格式错误，不加载任何记录
    #[error("malformed search index: {reason}")]
    Format { reason: String },

    /// 查询为空或只含空白字符
    #[error("query must not be empty or whitespace")]
    InvalidQuery,

    #[error("failed to read search index {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        IndexError::Format {
            reason: reason.into(),
        }
    }
}
