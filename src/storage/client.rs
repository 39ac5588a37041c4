use super::{FileRecord, StorageError};
use async_trait::async_trait;
use mockall::automock;
use std::path::Path;

/// 存储客户端接口
///
/// 上传流程只依赖这个接口，具体的后端（S3 或测试用的 mock）
/// 由调用方在启动时构造并显式传入。
#[automock]
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// 将本地文件以指定的逻辑名称写入存储。
    ///
    /// # 参数
    ///
    /// * `name` - 记录的逻辑名称。
    /// * `path` - 要上传的本地文件路径。
    ///
    /// # 返回值
    ///
    /// 写入成功后由存储端生成的 `FileRecord`。
    async fn write_file(&self, name: &str, path: &Path) -> Result<FileRecord, StorageError>;
}
