// ==========================================
// 作品集内容管理 - API 层
// ==========================================
// 职责: 面向外层（HTTP 路由 / CLI）的业务接口
// 约定: 后台接口第一个参数为会话令牌
// ==========================================

pub mod auth_api;
pub mod content_api;
pub mod error;
pub mod import_api;
pub mod project_api;
pub mod upload_api;

// 重导出核心类型
pub use auth_api::{AuthApi, LoginResponse};
pub use content_api::ContentApi;
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use import_api::{ImportApi, ImportReport};
pub use project_api::{CoordinateInput, ProjectApi, ProjectInput};
pub use upload_api::{sanitize_file_name, UploadApi, UploadResponse, UploadedFile};
