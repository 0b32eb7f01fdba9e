// ==========================================
// 作品集内容管理 - 页面内容仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 存储: site_content 表（key → JSON 文本）
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::content::ContentKey;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex, MutexGuard};

/// 页面内容仓储
/// 职责: 按键读写 JSON 文本，不解析业务结构
pub struct SiteContentRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SiteContentRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 读取原始 JSON 文本
    ///
    /// # 返回
    /// - Ok(Some(String)): 已保存的内容
    /// - Ok(None): 尚未保存过
    pub fn get_raw(&self, key: ContentKey) -> RepositoryResult<Option<String>> {
        let conn = self.get_conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM site_content WHERE key = ?1",
                params![key.as_db_key()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// 读取并解析为 JSON 值
    pub fn get_json(&self, key: ContentKey) -> RepositoryResult<Option<serde_json::Value>> {
        match self.get_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// 保存（INSERT OR UPDATE）
    pub fn upsert_json(&self, key: ContentKey, value: &serde_json::Value) -> RepositoryResult<()> {
        let raw = serde_json::to_string(value)?;
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO site_content (key, value, updated_at) VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
            params![key.as_db_key(), raw, Utc::now()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_schema;
    use serde_json::json;

    fn repo() -> SiteContentRepository {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        SiteContentRepository::from_connection(Arc::new(Mutex::new(conn)))
    }

    #[test]
    fn test_upsert_overwrites_and_keys_are_isolated() {
        let repo = repo();
        assert!(repo.get_json(ContentKey::Career).unwrap().is_none());

        repo.upsert_json(ContentKey::Career, &json!({"skills": ["A"]}))
            .unwrap();
        repo.upsert_json(ContentKey::Career, &json!({"skills": ["B"]}))
            .unwrap();

        assert_eq!(
            repo.get_json(ContentKey::Career).unwrap(),
            Some(json!({"skills": ["B"]}))
        );
        assert!(repo.get_json(ContentKey::Initiatives).unwrap().is_none());
    }
}
