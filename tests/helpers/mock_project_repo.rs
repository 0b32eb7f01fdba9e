// ==========================================
// Mock 项目仓储 - 用于导入器集成测试
// ==========================================
// 记录每次调用；可指定按标题失败，模拟存储引擎拒绝写入
// ==========================================

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use portfolio_cms::domain::{NewProject, Project, ProjectPatch, ProjectSummary};
use portfolio_cms::repository::{ProjectRepository, RepositoryError, RepositoryResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct MockProjectRepository {
    /// 标题 → 失败时返回的错误信息
    failures: HashMap<String, String>,
    created: Mutex<Vec<Project>>,
    create_calls: AtomicUsize,
}

impl MockProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定标题的行写入失败
    pub fn fail_on_title(mut self, title: &str, message: &str) -> Self {
        self.failures.insert(title.to_string(), message.to_string());
        self
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// 成功写入的标题（按调用顺序）
    pub fn created_titles(&self) -> Vec<String> {
        self.created
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.title.clone())
            .collect()
    }

    pub fn created(&self) -> Vec<Project> {
        self.created.lock().unwrap().clone()
    }

    fn unsupported(&self) -> RepositoryError {
        RepositoryError::InternalError("not supported by mock".to_string())
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn create(&self, project: NewProject) -> RepositoryResult<Project> {
        let n = self.create_calls.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(message) = self.failures.get(&project.title) {
            return Err(RepositoryError::DatabaseQueryError(message.clone()));
        }

        let project = project.into_project(format!("mock-{}", n), Utc::now());
        self.created.lock().unwrap().push(project.clone());
        Ok(project)
    }

    async fn find_by_id(&self, _id: &str) -> RepositoryResult<Option<Project>> {
        Err(self.unsupported())
    }

    async fn list_published(&self) -> RepositoryResult<Vec<ProjectSummary>> {
        Err(self.unsupported())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Project>> {
        Err(self.unsupported())
    }

    async fn update(&self, _id: &str, _project: NewProject) -> RepositoryResult<Project> {
        Err(self.unsupported())
    }

    async fn patch(&self, _id: &str, _patch: ProjectPatch) -> RepositoryResult<Project> {
        Err(self.unsupported())
    }

    async fn delete(&self, _id: &str) -> RepositoryResult<()> {
        Err(self.unsupported())
    }

    async fn count(&self) -> RepositoryResult<usize> {
        Ok(self.created.lock().unwrap().len())
    }
}
