// ==========================================
// 作品集内容管理 - API 层错误类型
// ==========================================
// 职责: 定义 API 层错误类型，转换 Repository / 导入错误为用户可读消息
// 约定: Display 文本直接返回给调用方（英文）
// ==========================================

use crate::importer::ImportError;
use crate::repository::error::RepositoryError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 鉴权错误
    // ==========================================
    #[error("{0}")]
    Unauthorised(String),

    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    // ==========================================
    // 导入 / 上传错误
    // ==========================================
    #[error("{0}")]
    ImportError(String),

    #[error("{0}")]
    UploadError(String),

    // ==========================================
    // 数据访问错误
    // ==========================================
    #[error("database error: {0}")]
    DatabaseError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 稳定的错误码（供前端分支判断）
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Unauthorised(_) => "UNAUTHORISED",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::ImportError(_) => "IMPORT_ERROR",
            ApiError::UploadError(_) => "UPLOAD_ERROR",
            ApiError::DatabaseError(_) => "DATABASE_ERROR",
            ApiError::InternalError(_) | ApiError::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// 对应的 HTTP 状态码
    pub fn http_status(&self) -> u16 {
        match self {
            ApiError::Unauthorised(_) => 401,
            ApiError::InvalidInput(_) | ApiError::ImportError(_) | ApiError::UploadError(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::DatabaseError(_) | ApiError::InternalError(_) | ApiError::Other(_) => 500,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

/// 统一错误响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} not found: {}", entity, id))
            }
            RepositoryError::FieldValueError { field, message } => {
                ApiError::InvalidInput(format!("{}: {}", field, message))
            }
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
            other => ApiError::DatabaseError(other.to_string()),
        }
    }
}

// ==========================================
// 从 ImportError 转换（仅结构性错误会走到这里）
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_conversion() {
        let repo_err = RepositoryError::NotFound {
            entity: "Project".to_string(),
            id: "p-1".to_string(),
        };
        let api_err: ApiError = repo_err.into();
        match api_err {
            ApiError::NotFound(ref msg) => {
                assert!(msg.contains("Project"));
                assert!(msg.contains("p-1"));
            }
            _ => panic!("Expected NotFound"),
        }
        assert_eq!(api_err.http_status(), 404);

        let api_err: ApiError = RepositoryError::LockError("poisoned".to_string()).into();
        assert_eq!(api_err.error_code(), "DATABASE_ERROR");
        assert_eq!(api_err.http_status(), 500);
    }

    #[test]
    fn test_structural_import_error_is_client_error() {
        let api_err: ApiError = ImportError::NoDataRows.into();
        assert_eq!(api_err.to_string(), "No data rows found in CSV");
        assert_eq!(api_err.http_status(), 400);
        assert_eq!(
            api_err.to_response(),
            ErrorResponse {
                code: "IMPORT_ERROR".to_string(),
                message: "No data rows found in CSV".to_string(),
            }
        );
    }

    #[test]
    fn test_unauthorised_status() {
        let err = ApiError::Unauthorised("Unauthorised".to_string());
        assert_eq!(err.http_status(), 401);
        assert_eq!(err.to_string(), "Unauthorised");
    }
}
