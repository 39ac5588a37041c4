use std::path::{Component, Path, PathBuf};

/// 对路径做词法规范化，折叠 `.` 与 `..`，不访问文件系统
///
/// 根目录之上的 `..` 会被丢弃；相对路径开头无法折叠的 `..` 会被保留。
///
/// # 参数
///
/// * `path` - 要规范化的路径
///
/// # 返回值
///
/// 规范化之后的路径
///
/// # 示例
///
/// ```
/// use file_uploader::utils::path::normalize_lexically;
/// use std::path::PathBuf;
///
/// assert_eq!(normalize_lexically("/opt/app/bin/../files/upload.txt"), PathBuf::from("/opt/app/files/upload.txt"));
/// assert_eq!(normalize_lexically("/a/./b/"), PathBuf::from("/a/b"));
/// assert_eq!(normalize_lexically("/.."), PathBuf::from("/"));
/// assert_eq!(normalize_lexically("../x"), PathBuf::from("../x"));
/// ```
pub fn normalize_lexically(path: impl AsRef<Path>) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.as_ref().components() {
        match component {
            Component::Prefix(_) | Component::RootDir => result.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let last = result.components().next_back();
                match last {
                    Some(Component::Normal(_)) => {
                        result.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => result.push(".."),
                }
            }
            Component::Normal(part) => result.push(part),
        }
    }

    result
}
