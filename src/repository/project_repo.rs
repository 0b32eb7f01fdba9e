// ==========================================
// 作品集内容管理 - 项目 Repository Trait
// ==========================================
// 职责: 定义项目数据访问接口（不包含业务逻辑）
// 红线: Repository 不含业务规则，只做数据 CRUD
// ==========================================

use crate::domain::project::{NewProject, Project, ProjectPatch, ProjectSummary};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;
use std::sync::Arc;

// ==========================================
// ProjectRepository Trait
// ==========================================
// 用途: 项目持久化网关（CSV 导入 / 后台 CRUD / 公开查询）
// 实现者: ProjectRepositoryImpl（使用 rusqlite）
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// 新建一条项目记录
    ///
    /// # 返回
    /// - Ok(Project): 落库后的完整记录（含生成的 id 与时间戳）
    /// - Err: 存储引擎拒绝写入
    async fn create(&self, project: NewProject) -> RepositoryResult<Project>;

    /// 按主键查询
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Project>>;

    /// 已发布项目摘要（按 start_date 倒序）
    async fn list_published(&self) -> RepositoryResult<Vec<ProjectSummary>>;

    /// 全部项目（后台列表，按 start_date 倒序）
    async fn list_all(&self) -> RepositoryResult<Vec<Project>>;

    /// 全量更新可编辑字段
    ///
    /// # 说明
    /// - pdf_report 为 None 时保留原附件
    /// - 记录不存在 → RepositoryError::NotFound
    async fn update(&self, id: &str, project: NewProject) -> RepositoryResult<Project>;

    /// 部分更新
    async fn patch(&self, id: &str, patch: ProjectPatch) -> RepositoryResult<Project>;

    /// 删除
    ///
    /// # 返回
    /// - 记录不存在 → RepositoryError::NotFound
    async fn delete(&self, id: &str) -> RepositoryResult<()>;

    /// 记录总数
    async fn count(&self) -> RepositoryResult<usize>;
}

// 共享仓储（导入 API 与项目 API 共用同一实例）
#[async_trait]
impl<T> ProjectRepository for Arc<T>
where
    T: ProjectRepository + ?Sized,
{
    async fn create(&self, project: NewProject) -> RepositoryResult<Project> {
        (**self).create(project).await
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Project>> {
        (**self).find_by_id(id).await
    }

    async fn list_published(&self) -> RepositoryResult<Vec<ProjectSummary>> {
        (**self).list_published().await
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Project>> {
        (**self).list_all().await
    }

    async fn update(&self, id: &str, project: NewProject) -> RepositoryResult<Project> {
        (**self).update(id, project).await
    }

    async fn patch(&self, id: &str, patch: ProjectPatch) -> RepositoryResult<Project> {
        (**self).patch(id, patch).await
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        (**self).delete(id).await
    }

    async fn count(&self) -> RepositoryResult<usize> {
        (**self).count().await
    }
}
