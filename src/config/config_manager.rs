// ==========================================
// 作品集内容管理 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: config_kv 表 (key-value)
// ==========================================

use crate::config::site_config_trait::SiteConfigReader;
use crate::db::open_sqlite_connection;
use crate::repository::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// 配置键
pub mod config_keys {
    pub const ADMIN_PASSWORD: &str = "admin_password";
    pub const SESSION_MAX_AGE_SECS: &str = "session_max_age_secs";
    pub const UPLOAD_DIR: &str = "upload_dir";
}

/// 管理员口令的环境变量回落
pub const ADMIN_PASSWORD_ENV: &str = "PORTFOLIO_ADMIN_PASSWORD";

pub const DEFAULT_SESSION_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7;
pub const DEFAULT_UPLOAD_DIR: &str = "public/uploads";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：为保证连接行为一致，会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let conn_guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_config_value(&self, key: &str) -> RepositoryResult<Option<String>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 从 config_kv 表读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> RepositoryResult<String> {
        Ok(self
            .get_config_value(key)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// 写入配置（UPSERT）
    pub fn set_config_value(&self, key: &str, value: &str) -> RepositoryResult<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        conn.execute(
            "INSERT INTO config_kv (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }

    /// 所有配置（口令除外）
    pub fn list_configs(&self) -> RepositoryResult<HashMap<String, String>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;

        let mut stmt = conn.prepare("SELECT key, value FROM config_kv ORDER BY key")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut config_map = HashMap::new();
        for row in rows {
            let (key, value) = row?;
            if key == config_keys::ADMIN_PASSWORD {
                continue;
            }
            config_map.insert(key, value);
        }
        Ok(config_map)
    }
}

// ==========================================
// SiteConfigReader Trait 实现
// ==========================================
#[async_trait]
impl SiteConfigReader for ConfigManager {
    async fn get_admin_password(&self) -> RepositoryResult<Option<String>> {
        let stored = self
            .get_config_value(config_keys::ADMIN_PASSWORD)?
            .filter(|v| !v.is_empty());
        if stored.is_some() {
            return Ok(stored);
        }

        Ok(std::env::var(ADMIN_PASSWORD_ENV)
            .ok()
            .filter(|v| !v.is_empty()))
    }

    async fn get_session_max_age_secs(&self) -> RepositoryResult<i64> {
        let default = DEFAULT_SESSION_MAX_AGE_SECS.to_string();
        let value = self.get_config_or_default(config_keys::SESSION_MAX_AGE_SECS, &default)?;
        match value.trim().parse::<i64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => {
                tracing::warn!(
                    config_key = config_keys::SESSION_MAX_AGE_SECS,
                    raw_value = %value,
                    "会话有效期配置格式错误，使用默认值"
                );
                Ok(DEFAULT_SESSION_MAX_AGE_SECS)
            }
        }
    }

    async fn get_upload_dir(&self) -> RepositoryResult<PathBuf> {
        let value = self.get_config_or_default(config_keys::UPLOAD_DIR, DEFAULT_UPLOAD_DIR)?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(PathBuf::from(DEFAULT_UPLOAD_DIR));
        }
        Ok(PathBuf::from(trimmed))
    }
}
