// ==========================================
// 作品集内容管理 - 管理员会话
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 管理员会话（服务端保存，令牌即 Cookie 值）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    /// 在给定时刻是否仍然有效
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
