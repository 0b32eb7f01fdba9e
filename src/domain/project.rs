// ==========================================
// 作品集内容管理 - 项目领域模型
// ==========================================
// 职责: 项目实体、待落库项目、公开摘要、部分更新
// 对齐: db::init_schema project 表
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Project - 项目主数据
// ==========================================
// 用途: 仓储层读出的完整记录（后台编辑 / 详情页）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    // ===== 主键 =====
    pub id: String,

    // ===== 基础信息 =====
    pub title: String,
    pub reference: Option<String>,
    pub sector: String,
    pub client: String,
    pub contract_value: Option<String>,
    pub design_fee: Option<String>,
    pub contract: Option<String>,
    pub description: String,
    pub role: String,

    // ===== 地图坐标 =====
    pub latitude: f64,
    pub longitude: f64,
    pub location: String,

    // ===== 时间 =====
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_ongoing: bool,

    // ===== 附件与发布 =====
    pub pdf_report: Option<String>,
    pub published: bool,
    pub skills: Vec<String>,

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ==========================================
// NewProject - 待落库项目
// ==========================================
// 来源: CSV 行校验通过后的结果 / 后台表单
// 约束: 可选文本字段为空时一律为 None，不存空串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub reference: Option<String>,
    pub sector: String,
    pub client: String,
    pub contract_value: Option<String>,
    pub design_fee: Option<String>,
    pub contract: Option<String>,
    pub description: String,
    pub role: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_ongoing: bool,
    pub pdf_report: Option<String>,
    pub published: bool,
    pub skills: Vec<String>,
}

impl NewProject {
    /// 结合主键和时间戳生成完整记录
    pub fn into_project(self, id: String, now: DateTime<Utc>) -> Project {
        Project {
            id,
            title: self.title,
            reference: self.reference,
            sector: self.sector,
            client: self.client,
            contract_value: self.contract_value,
            design_fee: self.design_fee,
            contract: self.contract,
            description: self.description,
            role: self.role,
            latitude: self.latitude,
            longitude: self.longitude,
            location: self.location,
            start_date: self.start_date,
            end_date: self.end_date,
            is_ongoing: self.is_ongoing,
            pdf_report: self.pdf_report,
            published: self.published,
            skills: self.skills,
            created_at: now,
            updated_at: now,
        }
    }
}

// ==========================================
// ProjectSummary - 公开项目摘要
// ==========================================
// 用途: 项目地图 / 项目列表（仅已发布）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub sector: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub client: String,
    pub role: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_ongoing: bool,
}

impl From<&Project> for ProjectSummary {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            sector: p.sector.clone(),
            location: p.location.clone(),
            latitude: p.latitude,
            longitude: p.longitude,
            client: p.client.clone(),
            role: p.role.clone(),
            start_date: p.start_date.clone(),
            end_date: p.end_date.clone(),
            is_ongoing: p.is_ongoing,
        }
    }
}

// ==========================================
// ProjectPatch - 部分更新
// ==========================================
// 用途: 后台列表快捷操作（如切换发布状态）
// 说明: None 表示不修改该字段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub reference: Option<String>,
    pub sector: Option<String>,
    pub client: Option<String>,
    pub contract_value: Option<String>,
    pub design_fee: Option<String>,
    pub contract: Option<String>,
    pub description: Option<String>,
    pub role: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_ongoing: Option<bool>,
    pub pdf_report: Option<String>,
    pub published: Option<bool>,
    pub skills: Option<Vec<String>>,
}

impl ProjectPatch {
    /// 是否没有任何待修改字段
    pub fn is_empty(&self) -> bool {
        *self == ProjectPatch::default()
    }

    /// 将补丁应用到已有记录（不修改 id / created_at）
    pub fn apply_to(self, project: &mut Project) {
        if let Some(v) = self.title {
            project.title = v;
        }
        if let Some(v) = self.reference {
            project.reference = Some(v);
        }
        if let Some(v) = self.sector {
            project.sector = v;
        }
        if let Some(v) = self.client {
            project.client = v;
        }
        if let Some(v) = self.contract_value {
            project.contract_value = Some(v);
        }
        if let Some(v) = self.design_fee {
            project.design_fee = Some(v);
        }
        if let Some(v) = self.contract {
            project.contract = Some(v);
        }
        if let Some(v) = self.description {
            project.description = v;
        }
        if let Some(v) = self.role {
            project.role = v;
        }
        if let Some(v) = self.latitude {
            project.latitude = v;
        }
        if let Some(v) = self.longitude {
            project.longitude = v;
        }
        if let Some(v) = self.location {
            project.location = v;
        }
        if let Some(v) = self.start_date {
            project.start_date = v;
        }
        if let Some(v) = self.end_date {
            project.end_date = Some(v);
        }
        if let Some(v) = self.is_ongoing {
            project.is_ongoing = v;
        }
        if let Some(v) = self.pdf_report {
            project.pdf_report = Some(v);
        }
        if let Some(v) = self.published {
            project.published = v;
        }
        if let Some(v) = self.skills {
            project.skills = v;
        }
    }
}
