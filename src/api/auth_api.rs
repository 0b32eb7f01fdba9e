// ==========================================
// 作品集内容管理 - 管理员鉴权 API
// ==========================================
// 职责: 登录（校验共享口令并签发会话）/ 登出 / 管理员校验
// 会话: 服务端 admin_session 表，令牌为 uuid v4
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::SiteConfigReader;
use crate::domain::session::AdminSession;
use crate::repository::SessionRepository;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// 登录成功响应（调用方据此设置 Cookie）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub max_age_secs: i64,
}

pub struct AuthApi {
    sessions: Arc<SessionRepository>,
    config: Arc<dyn SiteConfigReader>,
}

impl AuthApi {
    pub fn new(sessions: Arc<SessionRepository>, config: Arc<dyn SiteConfigReader>) -> Self {
        Self { sessions, config }
    }

    /// 管理员登录
    ///
    /// # 返回
    /// - Ok(LoginResponse): 口令正确，已创建会话
    /// - Err(ApiError::Unauthorised): 口令错误或未配置口令
    pub async fn login(&self, password: &str) -> ApiResult<LoginResponse> {
        let expected = self.config.get_admin_password().await?;
        let Some(expected) = expected else {
            warn!("未配置管理员口令，拒绝登录");
            return Err(ApiError::Unauthorised("Invalid password".to_string()));
        };

        if password != expected {
            warn!("管理员登录失败: 口令错误");
            return Err(ApiError::Unauthorised("Invalid password".to_string()));
        }

        let max_age_secs = self.config.get_session_max_age_secs().await?;
        let now = Utc::now();
        let session = AdminSession {
            token: Uuid::new_v4().to_string(),
            created_at: now,
            expires_at: now + Duration::seconds(max_age_secs),
        };
        self.sessions.insert(&session)?;

        info!(expires_at = %session.expires_at, "管理员登录成功");
        Ok(LoginResponse {
            token: session.token,
            max_age_secs,
        })
    }

    /// 登出（会话不存在也视为成功）
    pub fn logout(&self, token: &str) -> ApiResult<()> {
        self.sessions.delete(token)?;
        debug!("管理员会话已删除");
        Ok(())
    }

    /// 校验管理员会话
    ///
    /// # 说明
    /// - 每次校验前顺带清理过期会话
    pub fn require_admin(&self, token: Option<&str>) -> ApiResult<()> {
        let now = Utc::now();
        let purged = self.sessions.delete_expired(now)?;
        if purged > 0 {
            debug!(purged, "已清理过期会话");
        }

        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Unauthorised("Unauthorised".to_string()))?;

        match self.sessions.find(token)? {
            Some(session) if session.is_valid_at(now) => Ok(()),
            _ => Err(ApiError::Unauthorised("Unauthorised".to_string())),
        }
    }
}
