use std::path::PathBuf;
use thiserror::Error;

/// 写入存储时可能出现的错误。
///
/// 所有变体都属于“上传失败”，区分它们只是为了诊断信息更清楚。
#[derive(Debug, Error)]
pub enum StorageError {
    /// 本地文件无法读取（不存在、无权限等）
    #[error("无法读取文件 {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 计算摘要之后、发送之前文件长度发生了变化
    #[error("文件 {} 在读取过程中被修改: 预期 {expected} 字节，实际 {actual} 字节", path.display())]
    Modified {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    /// 远端存储拒绝或未能完成写入
    #[error("写入对象 {key} 失败: {message}")]
    Put { key: String, message: String },
}

impl StorageError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
