// ==========================================
// 作品集内容管理 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类: 结构性错误（整批失败）/ 行校验错误 / 行落库错误
// Display 即面向管理员的诊断文本（"Row N: ..."）
// ==========================================

use std::fmt::Display;
use thiserror::Error;

/// 落库错误没有可读信息时使用的兜底文本
pub const GENERIC_STORAGE_MESSAGE: &str = "database error";

/// 导入模块错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    // ===== 结构性错误（整批终止，不调用持久化网关）=====
    #[error("No data rows found in CSV")]
    NoDataRows,

    // ===== 行校验错误 =====
    #[error("Row {row}: missing required fields: {}", .fields.join(", "))]
    MissingRequiredFields { row: usize, fields: Vec<String> },

    #[error("Row {row}: invalid latitude/longitude")]
    InvalidCoordinates { row: usize },

    // ===== 行落库错误 =====
    #[error("Row {row}: {message}")]
    Persistence { row: usize, message: String },
}

impl ImportError {
    /// 由存储层错误构造行落库错误（空信息时回落到 "database error"）
    pub fn persistence(row: usize, err: &impl Display) -> Self {
        let message = err.to_string();
        let message = if message.trim().is_empty() {
            GENERIC_STORAGE_MESSAGE.to_string()
        } else {
            message
        };
        ImportError::Persistence { row, message }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, ImportError::NoDataRows)
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ImportError::MissingRequiredFields { .. } | ImportError::InvalidCoordinates { .. }
        )
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = ImportError::MissingRequiredFields {
            row: 3,
            fields: vec!["client".to_string(), "role".to_string()],
        };
        assert_eq!(err.to_string(), "Row 3: missing required fields: client, role");
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_coordinates_message() {
        let err = ImportError::InvalidCoordinates { row: 7 };
        assert_eq!(err.to_string(), "Row 7: invalid latitude/longitude");
    }

    #[test]
    fn test_persistence_falls_back_to_generic_message() {
        let err = ImportError::persistence(5, &"");
        assert_eq!(err.to_string(), "Row 5: database error");

        let err = ImportError::persistence(6, &"UNIQUE constraint failed: project.id");
        assert_eq!(err.to_string(), "Row 6: UNIQUE constraint failed: project.id");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_structural_error_message() {
        assert!(ImportError::NoDataRows.is_structural());
        assert_eq!(ImportError::NoDataRows.to_string(), "No data rows found in CSV");
    }
}
