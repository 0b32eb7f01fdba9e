// ==========================================
// 作品集内容管理 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 作品集网站后台（项目库 / 页面内容 / CSV 批量导入）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - CSV 批量导入
pub mod importer;

// 配置层 - 站点配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一/建表）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{NewProject, Project, ProjectPatch, ProjectSummary};
pub use importer::{ImportError, ImportOutcome, ProjectImporter};
pub use api::{ApiError, ImportReport};
pub use app::AppState;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Portfolio CMS";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
