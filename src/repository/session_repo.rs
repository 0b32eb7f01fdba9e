// ==========================================
// 作品集内容管理 - 管理员会话仓储
// ==========================================
// 红线: Repository 不含业务逻辑（有效期判断由 AuthApi 负责）
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::session::AdminSession;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex, MutexGuard};

pub struct SessionRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SessionRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    pub fn insert(&self, session: &AdminSession) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO admin_session (token, created_at, expires_at) VALUES (?1, ?2, ?3)",
            params![session.token, session.created_at, session.expires_at],
        )?;
        Ok(())
    }

    pub fn find(&self, token: &str) -> RepositoryResult<Option<AdminSession>> {
        let conn = self.get_conn()?;
        let session = conn
            .query_row(
                "SELECT token, created_at, expires_at FROM admin_session WHERE token = ?1",
                params![token],
                |row| {
                    Ok(AdminSession {
                        token: row.get(0)?,
                        created_at: row.get(1)?,
                        expires_at: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(session)
    }

    /// 删除会话（不存在时不报错）
    pub fn delete(&self, token: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute("DELETE FROM admin_session WHERE token = ?1", params![token])?;
        Ok(())
    }

    /// 清理过期会话
    ///
    /// # 返回
    /// - 删除的会话数
    pub fn delete_expired(&self, now: DateTime<Utc>) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let n = conn.execute(
            "DELETE FROM admin_session WHERE expires_at <= ?1",
            params![now],
        )?;
        Ok(n)
    }
}
