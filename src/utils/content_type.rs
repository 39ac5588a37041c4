use std::path::Path;

/// 无法识别扩展名时使用的内容类型
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// 根据文件路径的扩展名推断 MIME 类型
///
/// # 示例
///
/// ```
/// use file_uploader::utils::content_type::content_type_for;
///
/// assert_eq!(content_type_for("files/upload.txt"), "text/plain");
/// assert_eq!(content_type_for("files/upload"), "application/octet-stream");
/// ```
pub fn content_type_for(path: impl AsRef<Path>) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string()
}
