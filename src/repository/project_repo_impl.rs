// ==========================================
// 作品集内容管理 - 项目 Repository 实现
// ==========================================
// 职责: 实现项目数据访问（使用 rusqlite）
// 红线: Repository 不含业务规则，只做数据 CRUD
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::project::{NewProject, Project, ProjectPatch, ProjectSummary};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::project_repo::ProjectRepository;
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;

const PROJECT_COLUMNS: &str = r#"
    id, title, reference, sector, client, contract_value, design_fee, contract,
    description, role, latitude, longitude, location, start_date, end_date,
    is_ongoing, pdf_report, published, skills, created_at, updated_at
"#;

/// 行 → Project（skills 列为 JSON 数组文本）
fn map_project_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    let skills_json: String = row.get(18)?;
    let skills: Vec<String> = serde_json::from_str(&skills_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(18, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Project {
        id: row.get(0)?,
        title: row.get(1)?,
        reference: row.get(2)?,
        sector: row.get(3)?,
        client: row.get(4)?,
        contract_value: row.get(5)?,
        design_fee: row.get(6)?,
        contract: row.get(7)?,
        description: row.get(8)?,
        role: row.get(9)?,
        latitude: row.get(10)?,
        longitude: row.get(11)?,
        location: row.get(12)?,
        start_date: row.get(13)?,
        end_date: row.get(14)?,
        is_ongoing: row.get(15)?,
        pdf_report: row.get(16)?,
        published: row.get(17)?,
        skills,
        created_at: row.get(19)?,
        updated_at: row.get(20)?,
    })
}

// ==========================================
// ProjectRepositoryImpl
// ==========================================
pub struct ProjectRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl ProjectRepositoryImpl {
    /// 创建新的 Repository 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
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

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn find_by_id_sync(conn: &Connection, id: &str) -> RepositoryResult<Option<Project>> {
        let sql = format!("SELECT {} FROM project WHERE id = ?1", PROJECT_COLUMNS);
        let project = conn
            .query_row(&sql, params![id], map_project_row)
            .optional()?;
        Ok(project)
    }

    /// 覆盖写回除 id / created_at 外的全部字段
    fn write_back(conn: &Connection, project: &Project) -> RepositoryResult<()> {
        let skills_json = serde_json::to_string(&project.skills)?;
        let affected = conn.execute(
            r#"
            UPDATE project SET
                title = ?2, reference = ?3, sector = ?4, client = ?5,
                contract_value = ?6, design_fee = ?7, contract = ?8,
                description = ?9, role = ?10, latitude = ?11, longitude = ?12,
                location = ?13, start_date = ?14, end_date = ?15, is_ongoing = ?16,
                pdf_report = ?17, published = ?18, skills = ?19, updated_at = ?20
            WHERE id = ?1
            "#,
            params![
                project.id,
                project.title,
                project.reference,
                project.sector,
                project.client,
                project.contract_value,
                project.design_fee,
                project.contract,
                project.description,
                project.role,
                project.latitude,
                project.longitude,
                project.location,
                project.start_date,
                project.end_date,
                project.is_ongoing,
                project.pdf_report,
                project.published,
                skills_json,
                project.updated_at,
            ],
        )?;

        if affected == 0 {
            return Err(not_found(&project.id));
        }
        Ok(())
    }
}

fn not_found(id: &str) -> RepositoryError {
    RepositoryError::NotFound {
        entity: "Project".to_string(),
        id: id.to_string(),
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryImpl {
    async fn create(&self, project: NewProject) -> RepositoryResult<Project> {
        let project = project.into_project(Uuid::new_v4().to_string(), Utc::now());
        let skills_json = serde_json::to_string(&project.skills)?;

        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO project (
                id, title, reference, sector, client, contract_value, design_fee, contract,
                description, role, latitude, longitude, location, start_date, end_date,
                is_ongoing, pdf_report, published, skills, created_at, updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11,
                ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21
            )
            "#,
            params![
                project.id,
                project.title,
                project.reference,
                project.sector,
                project.client,
                project.contract_value,
                project.design_fee,
                project.contract,
                project.description,
                project.role,
                project.latitude,
                project.longitude,
                project.location,
                project.start_date,
                project.end_date,
                project.is_ongoing,
                project.pdf_report,
                project.published,
                skills_json,
                project.created_at,
                project.updated_at,
            ],
        )?;

        debug!(project_id = %project.id, title = %project.title, "项目已写入");
        Ok(project)
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Project>> {
        let conn = self.get_conn()?;
        Self::find_by_id_sync(&conn, id)
    }

    async fn list_published(&self) -> RepositoryResult<Vec<ProjectSummary>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, title, sector, location, latitude, longitude, client, role,
                   start_date, end_date, is_ongoing
            FROM project
            WHERE published = 1
            ORDER BY start_date DESC
            "#,
        )?;

        let summaries = stmt
            .query_map([], |row| {
                Ok(ProjectSummary {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    sector: row.get(2)?,
                    location: row.get(3)?,
                    latitude: row.get(4)?,
                    longitude: row.get(5)?,
                    client: row.get(6)?,
                    role: row.get(7)?,
                    start_date: row.get(8)?,
                    end_date: row.get(9)?,
                    is_ongoing: row.get(10)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(summaries)
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Project>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM project ORDER BY start_date DESC",
            PROJECT_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let projects = stmt
            .query_map([], map_project_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(projects)
    }

    async fn update(&self, id: &str, project: NewProject) -> RepositoryResult<Project> {
        let conn = self.get_conn()?;
        let existing = Self::find_by_id_sync(&conn, id)?.ok_or_else(|| not_found(id))?;

        let keep_pdf = existing.pdf_report.clone();
        let mut updated = project.into_project(existing.id, existing.created_at);
        if updated.pdf_report.is_none() {
            updated.pdf_report = keep_pdf;
        }
        updated.updated_at = Utc::now();

        Self::write_back(&conn, &updated)?;
        Ok(updated)
    }

    async fn patch(&self, id: &str, patch: ProjectPatch) -> RepositoryResult<Project> {
        let conn = self.get_conn()?;
        let mut project = Self::find_by_id_sync(&conn, id)?.ok_or_else(|| not_found(id))?;

        patch.apply_to(&mut project);
        project.updated_at = Utc::now();

        Self::write_back(&conn, &project)?;
        Ok(project)
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM project WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn count(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM project", [], |row| row.get(0))?;
        Ok(n as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{configure_sqlite_connection, init_schema};

    fn in_memory_repo() -> ProjectRepositoryImpl {
        let conn = Connection::open_in_memory().unwrap();
        configure_sqlite_connection(&conn).unwrap();
        init_schema(&conn).unwrap();
        ProjectRepositoryImpl::from_connection(Arc::new(Mutex::new(conn)))
    }

    fn new_project(title: &str, start_date: &str, published: bool) -> NewProject {
        NewProject {
            title: title.to_string(),
            reference: Some("REF-1".to_string()),
            sector: "Rail".to_string(),
            client: "Network Rail".to_string(),
            contract_value: None,
            design_fee: None,
            contract: None,
            description: "Bridge works".to_string(),
            role: "Designer".to_string(),
            latitude: 52.5,
            longitude: -1.5,
            location: "Leicester".to_string(),
            start_date: start_date.to_string(),
            end_date: None,
            is_ongoing: false,
            pdf_report: None,
            published,
            skills: vec!["Eurocodes".to_string(), "AutoCAD".to_string()],
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = in_memory_repo();
        let created = repo.create(new_project("A", "2023-01", true)).await.unwrap();

        let found = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found.title, "A");
        assert_eq!(found.reference.as_deref(), Some("REF-1"));
        assert_eq!(found.skills, vec!["Eurocodes".to_string(), "AutoCAD".to_string()]);
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_published_orders_by_start_date_desc() {
        let repo = in_memory_repo();
        repo.create(new_project("Old", "2019-03", true)).await.unwrap();
        repo.create(new_project("Hidden", "2024-01", false)).await.unwrap();
        repo.create(new_project("New", "2023-08", true)).await.unwrap();

        let published = repo.list_published().await.unwrap();
        let titles: Vec<_> = published.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Old"]);

        assert_eq!(repo.list_all().await.unwrap().len(), 3);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_update_keeps_pdf_when_absent() {
        let repo = in_memory_repo();
        let mut input = new_project("A", "2023-01", true);
        input.pdf_report = Some("123-report.pdf".to_string());
        let created = repo.create(input).await.unwrap();

        let updated = repo
            .update(&created.id, new_project("A2", "2023-02", true))
            .await
            .unwrap();
        assert_eq!(updated.title, "A2");
        assert_eq!(updated.pdf_report.as_deref(), Some("123-report.pdf"));
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_patch_and_delete() {
        let repo = in_memory_repo();
        let created = repo.create(new_project("A", "2023-01", true)).await.unwrap();

        let patched = repo
            .patch(
                &created.id,
                ProjectPatch {
                    published: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!patched.published);
        assert!(repo.list_published().await.unwrap().is_empty());

        repo.delete(&created.id).await.unwrap();
        assert!(matches!(
            repo.delete(&created.id).await,
            Err(RepositoryError::NotFound { .. })
        ));
    }
}
