//! S3 存储客户端
//!
//! 该模块负责把本地文件写入 S3（或 S3 兼容服务）的存储桶。

use super::{FileRecord, StorageClient, StorageError};
use crate::config::StorageConfig;
use crate::utils::checksum::{FileDigest, digest_file};
use crate::utils::content_type::content_type_for;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::RequestChecksumCalculation;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// 对象元数据中保存逻辑名称的键
pub const METADATA_RECORD_NAME: &str = "record-name";

/// 对象元数据中保存压缩方式的键
pub const METADATA_COMPRESSION: &str = "compression";

/// 基于 `aws_sdk_s3::Client` 的存储客户端。
#[derive(Debug, Clone)]
pub struct S3StorageClient {
    client: Arc<Client>,
    bucket: String,
}

impl S3StorageClient {
    /// 使用已有的 S3 客户端创建实例。
    pub fn new(client: Arc<Client>, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// 根据存储配置构造 S3 客户端。
    ///
    /// 请求只在协议要求时才附加 SDK 自动计算的校验和，
    /// 内容完整性由我们自己计算的 `Content-MD5` 保证。
    ///
    /// # 参数
    ///
    /// * `config` - 存储配置。
    ///
    /// # 返回值
    ///
    /// 配置好的 `S3StorageClient`。
    pub async fn connect(config: &StorageConfig) -> Self {
        let sdk_config = config.load_sdk_config().await;
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.force_path_style)
            .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
            .build();

        tracing::info!(
            bucket = %config.bucket,
            endpoint = config.endpoint.as_deref().unwrap_or("default"),
            "S3 客户端已初始化"
        );

        Self::new(Arc::new(Client::from_conf(s3_config)), config.bucket.clone())
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl StorageClient for S3StorageClient {
    async fn write_file(&self, name: &str, path: &Path) -> Result<FileRecord, StorageError> {
        let digest = digest_file(path)
            .await
            .map_err(|e| StorageError::io(path, e))?;
        let content_type = content_type_for(path);

        let record_id = Uuid::new_v4().to_string();
        let key = FileRecord::object_key(name, &record_id);

        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| StorageError::io(path, std::io::Error::other(e)))?;
        ensure_unchanged(path, digest.size, body.size_hint().1)?;

        let FileDigest { md5: checksum, size } = digest;
        tracing::debug!(bucket = %self.bucket, %key, size, "开始写入对象");

        let output = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(body)
            .content_type(&content_type)
            .content_md5(&checksum)
            .metadata(METADATA_RECORD_NAME, name)
            .metadata(METADATA_COMPRESSION, "raw")
            .send()
            .await
            .map_err(|e| StorageError::Put {
                key: key.clone(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(FileRecord {
            record_id,
            name: name.to_string(),
            key,
            size,
            checksum,
            content_type,
            e_tag: output.e_tag().map(str::to_string),
        })
    }
}

/// 校验待发送的请求体长度与计算摘要时读到的长度一致。
///
/// 两次读取之间文件被改写时，记录中的大小和校验和将与实际发送的内容不符。
fn ensure_unchanged(
    path: &Path,
    digest_size: u64,
    body_size: Option<u64>,
) -> Result<(), StorageError> {
    match body_size {
        Some(actual) if actual != digest_size => Err(StorageError::Modified {
            path: path.to_path_buf(),
            expected: digest_size,
            actual,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_unchanged_same_size() {
        assert!(ensure_unchanged(Path::new("/tmp/upload.txt"), 11, Some(11)).is_ok());
    }

    #[test]
    /// 读取摘要之后文件长度发生变化
    fn test_ensure_unchanged_detects_resize() {
        let err = ensure_unchanged(Path::new("/tmp/upload.txt"), 11, Some(20)).unwrap_err();
        assert!(matches!(
            err,
            StorageError::Modified {
                expected: 11,
                actual: 20,
                ..
            }
        ));
    }

    #[test]
    fn test_ensure_unchanged_unknown_body_size() {
        assert!(ensure_unchanged(Path::new("/tmp/upload.txt"), 11, None).is_ok());
    }

    #[tokio::test]
    /// 请求体长度与摘要来自同一个文件时保持一致
    async fn test_body_size_matches_digest() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hello world").unwrap();

        let digest = digest_file(file.path()).await.unwrap();
        let body = ByteStream::from_path(file.path()).await.unwrap();
        assert_eq!(body.size_hint().1, Some(digest.size));
        assert!(ensure_unchanged(file.path(), digest.size, body.size_hint().1).is_ok());
    }
}
