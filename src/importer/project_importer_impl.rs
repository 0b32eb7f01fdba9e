// ==========================================
// 作品集内容管理 - 项目导入器实现
// ==========================================
// 职责: 整合导入流程，从 CSV 文本到数据库
// 流程: 解析 → 逐行（校验 → 落库）→ 汇总
// 红线: 逐行顺序执行；单行失败不中断整批；不做事务回滚
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::outcome::ImportOutcome;
use crate::importer::project_importer_trait::{ProjectImporter, RowValidator, TabularParser};
use crate::repository::ProjectRepository;
use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// ProjectImporterImpl - 项目导入器实现
// ==========================================
pub struct ProjectImporterImpl<R>
where
    R: ProjectRepository,
{
    // 持久化网关
    project_repo: R,

    // 导入组件
    parser: Box<dyn TabularParser>,
    validator: Box<dyn RowValidator>,
}

impl<R> ProjectImporterImpl<R>
where
    R: ProjectRepository,
{
    /// 创建新的 ProjectImporter 实例
    ///
    /// # 参数
    /// - project_repo: 项目仓储（持久化网关）
    /// - parser: CSV 文本解析器
    /// - validator: 行校验器
    pub fn new(
        project_repo: R,
        parser: Box<dyn TabularParser>,
        validator: Box<dyn RowValidator>,
    ) -> Self {
        Self {
            project_repo,
            parser,
            validator,
        }
    }

    pub fn repository(&self) -> &R {
        &self.project_repo
    }
}

#[async_trait]
impl<R> ProjectImporter for ProjectImporterImpl<R>
where
    R: ProjectRepository,
{
    #[instrument(skip(self, text), fields(batch_id))]
    async fn import_from_text(&self, text: &str) -> ImportResult<ImportOutcome> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());

        info!(batch_id = %batch_id, bytes = text.len(), "开始导入项目数据");

        // === 步骤 1: 解析文本 ===
        let table = self.parser.parse(text);
        if table.is_empty() {
            warn!(batch_id = %batch_id, "CSV 无数据行，终止导入");
            return Err(ImportError::NoDataRows);
        }
        debug!(
            headers = ?table.headers,
            rows = table.rows.len(),
            "文本解析完成"
        );

        // === 步骤 2: 逐行校验 + 落库 ===
        let mut outcome = ImportOutcome::default();
        for row in &table.rows {
            let line = row.line_number;
            let result = match self.validator.validate(row) {
                Ok(project) => self
                    .project_repo
                    .create(project)
                    .await
                    .map_err(|e| ImportError::persistence(line, &e)),
                Err(e) => Err(e),
            };

            match &result {
                Ok(project) => debug!(row_number = line, project_id = %project.id, "行导入成功"),
                Err(e) if e.is_validation() => warn!(row_number = line, error = %e, "行校验失败"),
                Err(e) => warn!(row_number = line, error = %e, "行落库失败"),
            }
            outcome = outcome.record(result);
        }

        // === 步骤 3: 汇总 ===
        info!(
            batch_id = %batch_id,
            count = outcome.count,
            total = outcome.total,
            failed = outcome.failed(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "项目导入完成"
        );

        Ok(outcome)
    }
}
