// ==========================================
// 作品集内容管理 - 项目 API
// ==========================================
// 职责: 公开查询（详情 / 已发布列表）+ 后台 CRUD（需管理员会话）
// 表单: 坐标可为数字或数字字符串；可选文本空串视为缺省
// ==========================================

use crate::api::auth_api::AuthApi;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::project::{NewProject, Project, ProjectPatch, ProjectSummary};
use crate::importer::{DataCleaner, DataCleanerImpl};
use crate::repository::ProjectRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

// ==========================================
// CoordinateInput - 坐标输入（数字或字符串）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateInput {
    Number(f64),
    Text(String),
}

impl CoordinateInput {
    fn to_finite(&self) -> Option<f64> {
        match self {
            CoordinateInput::Number(v) => Some(*v).filter(|v| v.is_finite()),
            CoordinateInput::Text(s) => DataCleanerImpl.parse_coordinate(Some(s.as_str())),
        }
    }
}

impl From<f64> for CoordinateInput {
    fn from(v: f64) -> Self {
        CoordinateInput::Number(v)
    }
}

// ==========================================
// ProjectInput - 后台项目表单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInput {
    pub title: String,
    pub reference: Option<String>,
    pub sector: String,
    pub client: String,
    pub contract_value: Option<String>,
    pub design_fee: Option<String>,
    pub contract: Option<String>,
    pub description: String,
    pub role: String,
    pub latitude: Option<CoordinateInput>,
    pub longitude: Option<CoordinateInput>,
    pub location: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_ongoing: bool,
    pub pdf_report: Option<String>,
    pub published: bool,
    pub skills: Vec<String>,
}

impl Default for ProjectInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            reference: None,
            sector: String::new(),
            client: String::new(),
            contract_value: None,
            design_fee: None,
            contract: None,
            description: String::new(),
            role: String::new(),
            latitude: None,
            longitude: None,
            location: String::new(),
            start_date: String::new(),
            end_date: None,
            is_ongoing: false,
            pdf_report: None,
            published: true,
            skills: Vec::new(),
        }
    }
}

impl ProjectInput {
    /// 校验并转换为待落库项目
    ///
    /// # 返回
    /// - Err(ApiError::InvalidInput): 必填字段为空 / 坐标非法
    pub fn into_new_project(self) -> ApiResult<NewProject> {
        let cleaner = DataCleanerImpl;

        let required = [
            ("title", &self.title),
            ("sector", &self.sector),
            ("client", &self.client),
            ("description", &self.description),
            ("role", &self.role),
            ("location", &self.location),
            ("startDate", &self.start_date),
        ];
        let mut missing: Vec<&str> = required
            .iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();
        if self.latitude.is_none() {
            missing.push("latitude");
        }
        if self.longitude.is_none() {
            missing.push("longitude");
        }
        if !missing.is_empty() {
            return Err(ApiError::InvalidInput(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let latitude = self.latitude.as_ref().and_then(CoordinateInput::to_finite);
        let longitude = self.longitude.as_ref().and_then(CoordinateInput::to_finite);
        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            return Err(ApiError::InvalidInput(
                "Invalid latitude/longitude".to_string(),
            ));
        };

        Ok(NewProject {
            title: cleaner.clean_text(Some(&self.title)),
            reference: cleaner.normalize_null(self.reference.as_deref()),
            sector: cleaner.clean_text(Some(&self.sector)),
            client: cleaner.clean_text(Some(&self.client)),
            contract_value: cleaner.normalize_null(self.contract_value.as_deref()),
            design_fee: cleaner.normalize_null(self.design_fee.as_deref()),
            contract: cleaner.normalize_null(self.contract.as_deref()),
            description: cleaner.clean_text(Some(&self.description)),
            role: cleaner.clean_text(Some(&self.role)),
            latitude,
            longitude,
            location: cleaner.clean_text(Some(&self.location)),
            start_date: cleaner.clean_text(Some(&self.start_date)),
            end_date: cleaner.normalize_null(self.end_date.as_deref()),
            is_ongoing: self.is_ongoing,
            pdf_report: cleaner.normalize_null(self.pdf_report.as_deref()),
            published: self.published,
            skills: self
                .skills
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

// ==========================================
// ProjectApi
// ==========================================
pub struct ProjectApi {
    auth: Arc<AuthApi>,
    project_repo: Arc<dyn ProjectRepository>,
}

impl ProjectApi {
    pub fn new(auth: Arc<AuthApi>, project_repo: Arc<dyn ProjectRepository>) -> Self {
        Self { auth, project_repo }
    }

    // ==========================================
    // 公开接口
    // ==========================================

    /// 项目详情
    pub async fn get_project(&self, id: &str) -> ApiResult<Project> {
        self.project_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))
    }

    /// 已发布项目摘要（按开始日期倒序）
    pub async fn list_published_projects(&self) -> ApiResult<Vec<ProjectSummary>> {
        Ok(self.project_repo.list_published().await?)
    }

    // ==========================================
    // 后台接口
    // ==========================================

    pub async fn list_all_projects(&self, token: Option<&str>) -> ApiResult<Vec<Project>> {
        self.auth.require_admin(token)?;
        Ok(self.project_repo.list_all().await?)
    }

    pub async fn create_project(
        &self,
        token: Option<&str>,
        input: ProjectInput,
    ) -> ApiResult<Project> {
        self.auth.require_admin(token)?;
        let project = self.project_repo.create(input.into_new_project()?).await?;
        info!(project_id = %project.id, "后台新建项目");
        Ok(project)
    }

    pub async fn update_project(
        &self,
        token: Option<&str>,
        id: &str,
        input: ProjectInput,
    ) -> ApiResult<Project> {
        self.auth.require_admin(token)?;
        let project = self
            .project_repo
            .update(id, input.into_new_project()?)
            .await?;
        info!(project_id = %project.id, "后台更新项目");
        Ok(project)
    }

    pub async fn patch_project(
        &self,
        token: Option<&str>,
        id: &str,
        patch: ProjectPatch,
    ) -> ApiResult<Project> {
        self.auth.require_admin(token)?;
        if patch.is_empty() {
            return Err(ApiError::InvalidInput("No fields to update".to_string()));
        }
        let coords = [patch.latitude, patch.longitude];
        if coords.iter().flatten().any(|v| !v.is_finite()) {
            return Err(ApiError::InvalidInput(
                "Invalid latitude/longitude".to_string(),
            ));
        }
        Ok(self.project_repo.patch(id, patch).await?)
    }

    pub async fn delete_project(&self, token: Option<&str>, id: &str) -> ApiResult<()> {
        self.auth.require_admin(token)?;
        self.project_repo.delete(id).await?;
        info!(project_id = %id, "后台删除项目");
        Ok(())
    }
}
