//! 上传流程
//!
//! 解析相对于可执行文件所在目录的上传路径，以固定的逻辑名称写入一次，
//! 然后输出得到的记录标识。失败时不做任何重试或转换，错误原样向上传播。

use crate::storage::{FileRecord, StorageClient, StorageError};
use crate::utils::path::normalize_lexically;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 写入时使用的逻辑名称
pub const UPLOAD_NAME: &str = "test-file";

/// 上传文件相对于可执行文件所在目录的路径
pub const UPLOAD_RELATIVE_PATH: &str = "../files/upload.txt";

/// 获取当前可执行文件所在的目录（已解析符号链接）。
///
/// 结果与进程的当前工作目录无关。
pub fn executable_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?.canonicalize()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} 没有父目录", exe.display()),
        )
    })
}

/// 计算上传文件的绝对路径：`<dir>/../files/upload.txt`。
///
/// # 参数
///
/// * `dir` - 可执行文件所在的目录，应为绝对路径。
///
/// # 返回值
///
/// 折叠了 `..` 之后的绝对路径。
pub fn resolve_upload_path(dir: &Path) -> PathBuf {
    normalize_lexically(dir.join(UPLOAD_RELATIVE_PATH))
}

/// 执行一次上传。
///
/// 不检查文件是否存在，文件访问错误由存储客户端报告。
pub async fn upload<C>(client: &C, dir: &Path) -> Result<FileRecord, StorageError>
where
    C: StorageClient + ?Sized,
{
    let file_path = resolve_upload_path(dir);
    tracing::info!(name = UPLOAD_NAME, path = %file_path.display(), "开始上传");

    let record = client.write_file(UPLOAD_NAME, &file_path).await?;

    tracing::info!(
        record_id = %record.record_id,
        key = %record.key,
        size = record.size,
        "上传完成"
    );
    Ok(record)
}

/// 上传并把记录标识写到 `out`，末尾带换行。
///
/// 上传失败时 `out` 不会收到任何内容。
pub async fn run<C, W>(client: &C, dir: &Path, out: &mut W) -> anyhow::Result<FileRecord>
where
    C: StorageClient + ?Sized,
    W: Write,
{
    let record = upload(client, dir).await.context("上传失败")?;

    writeln!(out, "{}", record.record_id)?;
    out.flush()?;
    Ok(record)
}
