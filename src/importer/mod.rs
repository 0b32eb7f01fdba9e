// ==========================================
// 作品集内容管理 - 导入层
// ==========================================
// 职责: CSV 文本 → 项目记录（逐行校验，逐行落库）
// ==========================================

// 模块声明
pub mod csv_parser;
pub mod data_cleaner;
pub mod error;
pub mod outcome;
pub mod project_importer_impl;
pub mod project_importer_trait;
pub mod row_validator;

// 重导出核心类型
pub use csv_parser::{parse_csv_line, CsvTextParser, ParsedRow, ParsedTable};
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use outcome::ImportOutcome;
pub use project_importer_impl::ProjectImporterImpl;
pub use row_validator::RowValidator as RowValidatorImpl;
pub use row_validator::REQUIRED_FIELDS;

// 重导出 Trait 接口
pub use project_importer_trait::{DataCleaner, ProjectImporter, RowValidator, TabularParser};

/// 以默认组件装配导入器
pub fn default_importer<R>(project_repo: R) -> ProjectImporterImpl<R>
where
    R: crate::repository::ProjectRepository,
{
    ProjectImporterImpl::new(
        project_repo,
        Box::new(CsvTextParser),
        Box::new(RowValidatorImpl::new(Box::new(DataCleanerImpl))),
    )
}
