// ==========================================
// 作品集内容管理 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和 API 实例
// ==========================================

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::api::{AuthApi, ContentApi, ImportApi, ProjectApi, UploadApi};
use crate::config::{ConfigManager, SiteConfigReader};
use crate::db::{init_schema, open_sqlite_connection};
use crate::repository::{
    ProjectRepository, ProjectRepositoryImpl, SessionRepository, SiteContentRepository,
};

/// 数据库路径环境变量
pub const DB_PATH_ENV: &str = "PORTFOLIO_CMS_DB_PATH";

/// 应用状态
///
/// 所有仓储共享同一个 SQLite 连接
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    pub config: Arc<ConfigManager>,
    pub project_repo: Arc<ProjectRepositoryImpl>,

    pub auth_api: Arc<AuthApi>,
    pub project_api: Arc<ProjectApi>,
    pub content_api: Arc<ContentApi>,
    pub upload_api: Arc<UploadApi>,
    pub import_api: Arc<ImportApi>,
}

impl AppState {
    /// 创建新的 AppState 实例
    ///
    /// # 说明
    /// 打开（或新建）数据库并建表，然后装配全部 API
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        let conn =
            open_sqlite_connection(&db_path).map_err(|e| format!("无法打开数据库: {}", e))?;
        init_schema(&conn).map_err(|e| format!("数据库建表失败: {}", e))?;
        let conn = Arc::new(Mutex::new(conn));

        // ==========================================
        // 初始化 Repository 层
        // ==========================================
        let config = Arc::new(
            ConfigManager::from_connection(conn.clone())
                .map_err(|e| format!("配置管理器初始化失败: {}", e))?,
        );
        let project_repo = Arc::new(ProjectRepositoryImpl::from_connection(conn.clone()));
        let session_repo = Arc::new(SessionRepository::from_connection(conn.clone()));
        let content_repo = Arc::new(SiteContentRepository::from_connection(conn));

        // ==========================================
        // 初始化 API 层
        // ==========================================
        let config_reader: Arc<dyn SiteConfigReader> = config.clone();
        let shared_projects: Arc<dyn ProjectRepository> = project_repo.clone();

        let auth_api = Arc::new(AuthApi::new(session_repo, config_reader.clone()));
        let project_api = Arc::new(ProjectApi::new(auth_api.clone(), shared_projects));
        let content_api = Arc::new(ContentApi::new(auth_api.clone(), content_repo));
        let upload_api = Arc::new(UploadApi::new(auth_api.clone(), config_reader));
        let import_api = Arc::new(ImportApi::new(auth_api.clone(), project_repo.clone()));

        tracing::info!("AppState初始化完成");

        Ok(Self {
            db_path,
            config,
            project_repo,
            auth_api,
            project_api,
            content_api,
            upload_api,
            import_api,
        })
    }
}

/// 获取默认数据库路径
///
/// # 优先级
/// 1. 环境变量 PORTFOLIO_CMS_DB_PATH
/// 2. 用户数据目录/portfolio-cms/portfolio_cms.db
/// 3. ./portfolio_cms.db
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./portfolio_cms.db");
    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join("portfolio-cms");
        // 目录创建失败时回落到当前目录
        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("portfolio_cms.db");
        }
    }

    path.to_string_lossy().to_string()
}
