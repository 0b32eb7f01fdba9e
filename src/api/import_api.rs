// ==========================================
// 作品集内容管理 - 项目导入 API
// ==========================================
// 职责: 管理员鉴权 + 调用导入器 + 组装 {count, total, errors} 报告
// ==========================================

use crate::api::auth_api::AuthApi;
use crate::api::error::ApiResult;
use crate::importer::{default_importer, ImportOutcome, ProjectImporter};
use crate::repository::ProjectRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// 导入报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// 成功落库行数
    pub count: usize,
    /// 数据行总数
    pub total: usize,
    /// 失败行诊断（"Row N: ..."）
    pub errors: Vec<String>,
}

impl From<ImportOutcome> for ImportReport {
    fn from(outcome: ImportOutcome) -> Self {
        Self {
            count: outcome.count,
            total: outcome.total,
            errors: outcome.errors(),
        }
    }
}

/// 导入 API
pub struct ImportApi {
    auth: Arc<AuthApi>,
    importer: Box<dyn ProjectImporter>,
}

impl ImportApi {
    /// 以默认组件创建
    pub fn new<R>(auth: Arc<AuthApi>, project_repo: R) -> Self
    where
        R: ProjectRepository + 'static,
    {
        Self::with_importer(auth, Box::new(default_importer(project_repo)))
    }

    pub fn with_importer(auth: Arc<AuthApi>, importer: Box<dyn ProjectImporter>) -> Self {
        Self { auth, importer }
    }

    /// 导入项目 CSV
    ///
    /// # 返回
    /// - Ok(ImportReport): 逐行结果（部分失败也返回 Ok）
    /// - Err(ApiError::Unauthorised): 未登录
    /// - Err(ApiError::ImportError): 无数据行
    pub async fn import_projects(
        &self,
        token: Option<&str>,
        csv_text: &str,
    ) -> ApiResult<ImportReport> {
        self.auth.require_admin(token)?;

        let outcome = self.importer.import_from_text(csv_text).await?;
        info!(count = outcome.count, total = outcome.total, "CSV 导入请求完成");
        Ok(outcome.into())
    }
}
