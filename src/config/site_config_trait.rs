// ==========================================
// 作品集内容管理 - 站点配置读取 Trait
// ==========================================
// 职责: 定义认证 / 上传模块所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::repository::RepositoryResult;
use async_trait::async_trait;
use std::path::PathBuf;

// ==========================================
// SiteConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从 config_kv 表读取）
#[async_trait]
pub trait SiteConfigReader: Send + Sync {
    /// 管理员共享口令
    ///
    /// # 返回
    /// - Some(String): 已配置的口令
    /// - None: 未配置（此时所有登录均失败）
    ///
    /// # 来源优先级
    /// 1. config_kv.admin_password
    /// 2. 环境变量 PORTFOLIO_ADMIN_PASSWORD
    async fn get_admin_password(&self) -> RepositoryResult<Option<String>>;

    /// 会话有效期（秒）
    ///
    /// # 默认值
    /// - 604800（7 天）
    async fn get_session_max_age_secs(&self) -> RepositoryResult<i64>;

    /// PDF 上传目录
    ///
    /// # 默认值
    /// - public/uploads
    async fn get_upload_dir(&self) -> RepositoryResult<PathBuf>;
}
