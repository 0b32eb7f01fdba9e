// ==========================================
// 作品集内容管理 - 数据清洗器实现
// ==========================================
// 职责: TRIM / NULL 标准化 / 布尔标记 / 坐标 / 技能列表
// ==========================================

use crate::importer::project_importer_trait::DataCleaner as DataCleanerTrait;

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn clean_text(&self, value: Option<&str>) -> String {
        value.map(str::trim).unwrap_or_default().to_string()
    }

    fn normalize_null(&self, value: Option<&str>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    fn parse_coordinate(&self, value: Option<&str>) -> Option<f64> {
        value?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }

    fn parse_flag(&self, value: Option<&str>, default: bool) -> bool {
        let normalized = value.map(|v| v.trim().to_lowercase()).unwrap_or_default();
        if default {
            // 默认为真：只有明确写 false 才关闭
            normalized != "false"
        } else {
            normalized == "true"
        }
    }

    fn split_skills(&self, value: Option<&str>) -> Vec<String> {
        value
            .unwrap_or_default()
            .split('|')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_null() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.normalize_null(Some("  ")), None);
        assert_eq!(cleaner.normalize_null(Some("")), None);
        assert_eq!(
            cleaner.normalize_null(Some("  £1.2m  ")),
            Some("£1.2m".to_string())
        );
        assert_eq!(cleaner.normalize_null(None), None);
    }

    #[test]
    fn test_parse_coordinate() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_coordinate(Some(" 52.4862 ")), Some(52.4862));
        assert_eq!(cleaner.parse_coordinate(Some("-1.8904")), Some(-1.8904));
        assert_eq!(cleaner.parse_coordinate(Some("not-a-number")), None);
        assert_eq!(cleaner.parse_coordinate(Some("NaN")), None);
        assert_eq!(cleaner.parse_coordinate(Some("inf")), None);
        assert_eq!(cleaner.parse_coordinate(None), None);
    }

    #[test]
    fn test_ongoing_flag_defaults_false() {
        let cleaner = DataCleaner;
        for v in ["TRUE", "true ", "True"] {
            assert!(cleaner.parse_flag(Some(v), false), "{v:?} should be true");
        }
        for v in ["", "yes", "1", "false"] {
            assert!(!cleaner.parse_flag(Some(v), false), "{v:?} should be false");
        }
        assert!(!cleaner.parse_flag(None, false));
    }

    #[test]
    fn test_published_flag_defaults_true() {
        let cleaner = DataCleaner;
        for v in ["True", "", "1", "no"] {
            assert!(cleaner.parse_flag(Some(v), true), "{v:?} should be true");
        }
        assert!(cleaner.parse_flag(None, true));
        assert!(!cleaner.parse_flag(Some("FALSE"), true));
        assert!(!cleaner.parse_flag(Some(" false "), true));
    }

    #[test]
    fn test_split_skills() {
        let cleaner = DataCleaner;
        assert_eq!(
            cleaner.split_skills(Some("Bridge Design|Eurocodes| AutoCAD ")),
            vec!["Bridge Design", "Eurocodes", "AutoCAD"]
        );
        assert!(cleaner.split_skills(Some("")).is_empty());
        assert!(cleaner.split_skills(None).is_empty());
    }
}
