//! 文件上传工具库
//!
//! 这是一个把本地文件写入对象存储的小工具，主要功能包括：
//! - 从环境变量加载存储配置并构造 S3 客户端
//! - 解析相对于可执行文件的上传路径
//! - 以固定的逻辑名称写入文件并返回记录标识

pub mod config;
pub mod storage;
pub mod uploader;
pub mod utils;

use tracing_subscriber::fmt::time::LocalTime;

/// 初始化日志
///
/// 日志统一写到标准错误，标准输出只留给记录标识。
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(LocalTime::rfc_3339())
        .with_max_level(tracing::Level::INFO)
        .init();
}
