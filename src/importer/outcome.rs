// ==========================================
// 作品集内容管理 - 导入结果汇总
// ==========================================
// 逐行累加: 每行要么计入成功，要么留下一个诊断
// 不变量: failures.len() == total - count
// ==========================================

use crate::importer::error::{ImportError, ImportResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    /// 成功落库的行数
    pub count: usize,
    /// 已处理的数据行数
    pub total: usize,
    /// 失败行诊断（按行处理顺序）
    pub failures: Vec<ImportError>,
}

impl ImportOutcome {
    /// 计入一行的结果
    pub fn record<T>(mut self, result: ImportResult<T>) -> Self {
        self.total += 1;
        match result {
            Ok(_) => self.count += 1,
            Err(e) => self.failures.push(e),
        }
        self
    }

    /// 面向管理员的诊断文本
    pub fn errors(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }

    pub fn failed(&self) -> usize {
        self.total - self.count
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_counts_consistent() {
        let outcome = ImportOutcome::default()
            .record(Ok::<_, ImportError>(()))
            .record::<()>(Err(ImportError::InvalidCoordinates { row: 3 }))
            .record(Ok::<_, ImportError>(()));

        assert_eq!(outcome.count, 2);
        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.failed(), 1);
        assert_eq!(outcome.errors(), vec!["Row 3: invalid latitude/longitude"]);
        assert!(!outcome.is_clean());
    }

    #[test]
    fn test_empty_outcome_is_clean() {
        let outcome = ImportOutcome::default();
        assert!(outcome.is_clean());
        assert_eq!(outcome.failed(), 0);
    }
}
