// ==========================================
// 作品集内容管理 - 领域模型层
// ==========================================
// 职责: 定义领域实体与值类型
// 红线: 不含数据访问逻辑
// ==========================================

pub mod content;
pub mod project;
pub mod session;

// 重导出核心类型
pub use content::{
    default_initiatives, AboutFact, AboutPageContent, CareerContent, ContentKey, Initiative,
    InitiativesContent, TimelineEntry,
};
pub use project::{NewProject, Project, ProjectPatch, ProjectSummary};
pub use session::AdminSession;
