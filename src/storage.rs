//! 存储模块
//!
//! 此模块包含了与外部存储交互所需的全部类型：
//! - 存储客户端接口（`StorageClient`）
//! - 基于 S3 的客户端实现
//! - 写入结果记录（`FileRecord`）
//! - 存储错误类型

pub mod client;
pub mod error;
pub mod record;
pub mod s3;

// 重新导出主要的公共接口
pub use client::{MockStorageClient, StorageClient};
pub use error::StorageError;
pub use record::FileRecord;
pub use s3::S3StorageClient;
