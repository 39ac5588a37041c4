use anyhow::Context;
use file_uploader::config::StorageConfig;
use file_uploader::storage::S3StorageClient;
use file_uploader::{init_tracing, uploader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载 .env 文件
    dotenvy::dotenv().ok();
    init_tracing();

    let dir = uploader::executable_dir().context("无法确定可执行文件所在目录")?;

    let config = StorageConfig::from_env().context("存储配置无效")?;
    let client = S3StorageClient::connect(&config).await;

    let mut stdout = std::io::stdout().lock();
    uploader::run(&client, &dir, &mut stdout).await?;

    Ok(())
}
