use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// 每次读取的块大小
const BLOCK_SIZE: usize = 64 * 1024;

/// 一次读取得到的文件摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDigest {
    /// MD5，Base64 编码，可以直接作为 `Content-MD5` 头部使用
    pub md5: String,
    /// 实际读取的字节数
    pub size: u64,
}

/// 流式读取文件，在同一遍读取中计算 MD5 和大小。
pub async fn digest_file(path: &Path) -> std::io::Result<FileDigest> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut context = md5::Context::new();
    let mut buffer = vec![0u8; BLOCK_SIZE];
    let mut size = 0u64;

    loop {
        let read = file.read(&mut buffer).await?;
        if read == 0 {
            break;
        }
        context.consume(&buffer[..read]);
        size += read as u64;
    }

    Ok(FileDigest {
        md5: STANDARD.encode(context.compute().0),
        size,
    })
}
