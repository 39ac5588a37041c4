/// 一次成功写入后得到的文件记录。
///
/// 记录由存储客户端创建，上传流程只读取一次 `record_id`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// 记录标识，每次写入都会生成新的值
    pub record_id: String,
    /// 写入时使用的逻辑名称
    pub name: String,
    /// 对象在存储桶中的键
    pub key: String,
    /// 文件大小（字节）
    pub size: u64,
    /// 文件内容的 MD5，Base64 编码（与 `Content-MD5` 头部一致）
    pub checksum: String,
    pub content_type: String,
    pub e_tag: Option<String>,
}

impl FileRecord {
    /// 根据逻辑名称和记录标识生成对象键，格式为 `<name>/<record_id>`。
    pub fn object_key(name: &str, record_id: &str) -> String {
        format!("{}/{}", name.trim_matches('/'), record_id)
    }
}
