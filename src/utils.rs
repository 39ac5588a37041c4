//! 工具函数模块
//!
//! 此模块包含了项目中使用的各种工具函数：
//! - 路径处理工具（词法规范化）
//! - 内容类型检测
//! - 文件校验和计算

pub mod checksum;
pub mod content_type;
pub mod path;
