//! 存储客户端的配置模块。
//!
//! 该模块负责从环境变量加载存储配置，并据此构造 AWS SDK 配置。
//! 这些变量只配置外部存储客户端，上传流程本身没有任何可配置项。

use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::SdkConfig;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::config::Credentials;
use thiserror::Error;

/// 未配置区域时使用的默认区域
pub const DEFAULT_REGION: &str = "us-east-1";

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("必须设置 {0}")]
    Missing(&'static str),

    #[error("{name} 的值无效: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("S3_ACCESS_KEY_ID 与 S3_SECRET_ACCESS_KEY 必须同时设置")]
    IncompleteCredentials,
}

/// 静态访问凭据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// 存储配置
///
/// # 环境变量
///
/// * `S3_BUCKET` - 存储桶名称（必填）
/// * `S3_REGION` - 区域（默认走 AWS 标准提供链，最终回退到 us-east-1）
/// * `S3_ENDPOINT` - S3 兼容服务的端点 URL
/// * `S3_ACCESS_KEY_ID` / `S3_SECRET_ACCESS_KEY` - 静态凭据，缺省时使用 AWS 标准凭据链
/// * `S3_FORCE_PATH_STYLE` - 是否使用路径风格的请求地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub credentials: Option<StaticCredentials>,
    pub force_path_style: bool,
}

impl StorageConfig {
    /// 从进程环境变量加载配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 通过任意的查找函数加载配置。
    ///
    /// 空字符串视为未设置。
    ///
    /// # 参数
    ///
    /// * `lookup` - 根据变量名返回变量值的函数。
    ///
    /// # 返回值
    ///
    /// 解析好的 `StorageConfig`，或描述缺失/无效项的 `ConfigError`。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bucket = get("S3_BUCKET").ok_or(ConfigError::Missing("S3_BUCKET"))?;

        let credentials = match (get("S3_ACCESS_KEY_ID"), get("S3_SECRET_ACCESS_KEY")) {
            (Some(access_key_id), Some(secret_access_key)) => Some(StaticCredentials {
                access_key_id,
                secret_access_key,
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteCredentials),
        };

        let force_path_style = match get("S3_FORCE_PATH_STYLE") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                name: "S3_FORCE_PATH_STYLE",
                value,
            })?,
            None => false,
        };

        Ok(Self {
            bucket,
            region: get("S3_REGION"),
            endpoint: get("S3_ENDPOINT"),
            credentials,
            force_path_style,
        })
    }

    /// 根据配置构造 AWS SDK 配置。
    pub async fn load_sdk_config(&self) -> SdkConfig {
        let region_provider = RegionProviderChain::first_try(self.region.clone().map(Region::new))
            .or_default_provider()
            .or_else(Region::new(DEFAULT_REGION));

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);

        if let Some(creds) = &self.credentials {
            loader = loader.credentials_provider(Credentials::new(
                creds.access_key_id.clone(),
                creds.secret_access_key.clone(),
                None,
                None,
                "manual-credentials",
            ));
        }

        if let Some(endpoint) = &self.endpoint {
            loader = loader.endpoint_url(endpoint.clone());
        }

        loader.load().await
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
