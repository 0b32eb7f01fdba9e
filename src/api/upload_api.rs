// ==========================================
// 作品集内容管理 - PDF 上传 API
// ==========================================
// 文件名: <unix 毫秒>-<清洗后的原文件名>
// 清洗: [A-Za-z0-9._-] 以外的字符替换为 _
// ==========================================

use crate::api::auth_api::AuthApi;
use crate::api::error::{ApiError, ApiResult};
use crate::config::SiteConfigReader;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// 上传的文件
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
}

/// 文件名清洗
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

pub struct UploadApi {
    auth: Arc<AuthApi>,
    config: Arc<dyn SiteConfigReader>,
}

impl UploadApi {
    pub fn new(auth: Arc<AuthApi>, config: Arc<dyn SiteConfigReader>) -> Self {
        Self { auth, config }
    }

    /// 上传 PDF 报告
    ///
    /// # 返回
    /// - Ok(UploadResponse): 存储后的文件名
    /// - Err(ApiError::UploadError): 未提供文件 / 非 PDF / 写盘失败
    pub async fn upload_pdf(
        &self,
        token: Option<&str>,
        file: Option<UploadedFile>,
    ) -> ApiResult<UploadResponse> {
        self.auth.require_admin(token)?;

        let file = file.ok_or_else(|| ApiError::UploadError("No file provided".to_string()))?;
        if file.content_type.trim() != PDF_CONTENT_TYPE {
            return Err(ApiError::UploadError(
                "Only PDF files are allowed".to_string(),
            ));
        }

        let upload_dir = self.config.get_upload_dir().await?;
        let filename = format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            sanitize_file_name(&file.file_name)
        );

        write_file(&upload_dir, &filename, &file.bytes).await?;
        info!(filename = %filename, size = file.bytes.len(), "PDF 已上传");

        Ok(UploadResponse { filename })
    }
}

async fn write_file(dir: &Path, filename: &str, bytes: &[u8]) -> ApiResult<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| ApiError::UploadError(format!("Failed to create upload directory: {}", e)))?;
    tokio::fs::write(dir.join(filename), bytes)
        .await
        .map_err(|e| ApiError::UploadError(format!("Failed to save file: {}", e)))?;
    Ok(())
}
