//! Upload Cleanup
//!
//! 负责删除预设引用的本地上传图片

use std::path::PathBuf;
use tokio::fs;

/// 上传图片清理
#[derive(Debug, Clone)]
pub struct UploadCleanup {
    /// 上传目录: {work_dir}/uploads/
    uploads_dir: PathBuf,
}

impl UploadCleanup {
    pub fn new(uploads_dir: PathBuf) -> Self {
        Self { uploads_dir }
    }

    /// 删除上传文件
    ///
    /// 返回是否删除成功；文件不存在或删除失败只记录日志
    pub async fn remove(&self, file_name: &str) -> bool {
        let file_path = self.uploads_dir.join(file_name);

        match fs::remove_file(&file_path).await {
            Ok(_) => {
                tracing::info!(file = %file_name, "Upload removed");
                true
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(file = %file_name, "Upload already gone");
                false
            }
            Err(e) => {
                tracing::warn!(file = %file_name, error = %e, "Failed to delete upload");
                false
            }
        }
    }

    /// 获取上传文件路径
    pub fn upload_path(&self, file_name: &str) -> PathBuf {
        self.uploads_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_remove_existing_and_missing() {
        let dir = TempDir::new().unwrap();
        let cleanup = UploadCleanup::new(dir.path().to_path_buf());
        std::fs::write(cleanup.upload_path("1700-1.png"), b"png").unwrap();

        assert!(cleanup.remove("1700-1.png").await);
        assert!(!cleanup.upload_path("1700-1.png").exists());
        assert!(!cleanup.remove("1700-1.png").await);
    }
}
