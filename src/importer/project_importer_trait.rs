// ==========================================
// 作品集内容管理 - 项目导入 Trait
// ==========================================
// 职责: 定义项目导入各阶段接口（不包含实现）
// 流程: 解析 → 校验 → 落库 → 汇总
// ==========================================

use crate::domain::project::NewProject;
use crate::importer::csv_parser::{ParsedRow, ParsedTable};
use crate::importer::error::ImportResult;
use crate::importer::outcome::ImportOutcome;
use async_trait::async_trait;

// ==========================================
// ProjectImporter Trait
// ==========================================
// 用途: 项目批量导入主接口
// 实现者: ProjectImporterImpl
#[async_trait]
pub trait ProjectImporter: Send + Sync {
    /// 从 CSV 文本导入项目
    ///
    /// # 参数
    /// - text: 原始 CSV 文本（首行为表头）
    ///
    /// # 返回
    /// - Ok(ImportOutcome): 逐行结果汇总（部分行失败不影响其他行）
    /// - Err(ImportError::NoDataRows): 无数据行，未调用持久化网关
    ///
    /// # 说明
    /// - 调用方负责在此之前完成管理员鉴权
    /// - 逐行顺序执行，上一行结果确定后才处理下一行
    /// - 不做去重：重复提交同一文件会产生重复记录
    async fn import_from_text(&self, text: &str) -> ImportResult<ImportOutcome>;
}

// ==========================================
// TabularParser Trait
// ==========================================
// 用途: 文本解析接口（阶段 0，纯函数）
// 实现者: CsvTextParser
pub trait TabularParser: Send + Sync {
    /// 解析为表头 + 行记录；无数据行时返回空表
    fn parse(&self, text: &str) -> ParsedTable;
}

// ==========================================
// RowValidator Trait
// ==========================================
// 用途: 单行校验接口（阶段 1）
// 实现者: RowValidatorImpl
pub trait RowValidator: Send + Sync {
    /// 校验单行并转换为待落库项目
    ///
    /// # 返回
    /// - Ok(NewProject): 校验通过
    /// - Err: 缺少必填字段 / 坐标非法（只返回一个诊断）
    fn validate(&self, row: &ParsedRow) -> ImportResult<NewProject>;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 单元格清洗接口
// 实现者: DataCleanerImpl
pub trait DataCleaner: Send + Sync {
    /// TRIM，缺失视为空串
    fn clean_text(&self, value: Option<&str>) -> String;

    /// 标准化 NULL 值（空字符串/空白 → None）
    fn normalize_null(&self, value: Option<&str>) -> Option<String>;

    /// 解析坐标（必须为有限小数）
    fn parse_coordinate(&self, value: Option<&str>) -> Option<f64>;

    /// 解析布尔标记
    ///
    /// # 规则
    /// - default = false: 仅 "true"（忽略大小写与空白）为真
    /// - default = true: 仅 "false"（忽略大小写与空白）为假
    fn parse_flag(&self, value: Option<&str>, default: bool) -> bool;

    /// 按 `|` 切分技能列表（TRIM，丢弃空项）
    fn split_skills(&self, value: Option<&str>) -> Vec<String>;
}
