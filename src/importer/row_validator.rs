// ==========================================
// 作品集内容管理 - 行校验器实现
// ==========================================
// 职责: 必填字段校验 + 坐标校验 + 可选字段标准化
// 输出: NewProject 或单个诊断，不产生部分结果
// ==========================================

use crate::domain::project::NewProject;
use crate::importer::csv_parser::ParsedRow;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::project_importer_trait::{
    DataCleaner, RowValidator as RowValidatorTrait,
};

/// 必填列（小写；顺序即诊断中的列出顺序）
pub const REQUIRED_FIELDS: [&str; 9] = [
    "title",
    "sector",
    "client",
    "description",
    "role",
    "location",
    "startdate",
    "latitude",
    "longitude",
];

// ==========================================
// RowValidatorImpl
// ==========================================
pub struct RowValidator {
    cleaner: Box<dyn DataCleaner>,
}

impl RowValidator {
    pub fn new(cleaner: Box<dyn DataCleaner>) -> Self {
        Self { cleaner }
    }

    /// 缺失（不存在或 TRIM 后为空）的必填列
    fn missing_required(&self, row: &ParsedRow) -> Vec<String> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|column| self.cleaner.normalize_null(row.get(column)).is_none())
            .map(|column| column.to_string())
            .collect()
    }
}

impl RowValidatorTrait for RowValidator {
    fn validate(&self, row: &ParsedRow) -> ImportResult<NewProject> {
        let line = row.line_number;

        let missing = self.missing_required(row);
        if !missing.is_empty() {
            return Err(ImportError::MissingRequiredFields {
                row: line,
                fields: missing,
            });
        }

        let latitude = self.cleaner.parse_coordinate(row.get("latitude"));
        let longitude = self.cleaner.parse_coordinate(row.get("longitude"));
        let (latitude, longitude) = match (latitude, longitude) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => return Err(ImportError::InvalidCoordinates { row: line }),
        };

        let c = &self.cleaner;
        Ok(NewProject {
            title: c.clean_text(row.get("title")),
            reference: c.normalize_null(row.get("reference")),
            sector: c.clean_text(row.get("sector")),
            client: c.clean_text(row.get("client")),
            contract_value: c.normalize_null(row.get("contractvalue")),
            design_fee: c.normalize_null(row.get("designfee")),
            contract: c.normalize_null(row.get("contract")),
            description: c.clean_text(row.get("description")),
            role: c.clean_text(row.get("role")),
            latitude,
            longitude,
            location: c.clean_text(row.get("location")),
            start_date: c.clean_text(row.get("startdate")),
            end_date: c.normalize_null(row.get("enddate")),
            is_ongoing: c.parse_flag(row.get("isongoing"), false),
            pdf_report: None,
            published: c.parse_flag(row.get("published"), true),
            skills: c.split_skills(row.get("skills")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::data_cleaner::DataCleaner as DataCleanerImpl;
    use std::collections::HashMap;

    fn validator() -> RowValidator {
        RowValidator::new(Box::new(DataCleanerImpl))
    }

    fn complete_row() -> ParsedRow {
        let fields: HashMap<String, String> = [
            ("title", "Marle Pit Hill Bridge"),
            ("sector", "Rail"),
            ("client", "Network Rail"),
            ("description", "Masonry arch replacement"),
            ("role", "Lead Designer"),
            ("location", "Derbyshire"),
            ("startdate", "2023-08"),
            ("latitude", "52.95"),
            ("longitude", "-1.39"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        ParsedRow {
            line_number: 2,
            fields,
        }
    }

    fn with(mut row: ParsedRow, column: &str, value: &str) -> ParsedRow {
        row.fields.insert(column.to_string(), value.to_string());
        row
    }

    #[test]
    fn test_complete_row_with_defaults() {
        let project = validator().validate(&complete_row()).unwrap();
        assert_eq!(project.title, "Marle Pit Hill Bridge");
        assert_eq!(project.latitude, 52.95);
        assert_eq!(project.longitude, -1.39);
        assert!(!project.is_ongoing);
        assert!(project.published);
        assert!(project.skills.is_empty());
        assert_eq!(project.reference, None);
        assert_eq!(project.end_date, None);
    }

    #[test]
    fn test_missing_fields_are_combined() {
        let row = with(with(complete_row(), "client", ""), "role", "   ");
        let err = validator().validate(&row).unwrap_err();
        assert_eq!(
            err,
            ImportError::MissingRequiredFields {
                row: 2,
                fields: vec!["client".to_string(), "role".to_string()],
            }
        );
        assert!(err.to_string().contains("client"));
        assert!(err.to_string().contains("role"));
    }

    #[test]
    fn test_absent_column_counts_as_missing() {
        let mut row = complete_row();
        row.fields.remove("startdate");
        let err = validator().validate(&row).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Row 2: missing required fields: startdate"
        );
    }

    #[test]
    fn test_non_numeric_latitude_is_distinct_error() {
        let row = with(complete_row(), "latitude", "not-a-number");
        let err = validator().validate(&row).unwrap_err();
        assert_eq!(err, ImportError::InvalidCoordinates { row: 2 });
        assert_eq!(err.to_string(), "Row 2: invalid latitude/longitude");
    }

    #[test]
    fn test_optional_fields_normalized() {
        let row = with(complete_row(), "reference", " NR-001 ");
        let row = with(row, "contractvalue", "");
        let row = with(row, "isongoing", "TRUE");
        let row = with(row, "published", "false");
        let row = with(row, "skills", "Bridge Design|Eurocodes| AutoCAD ");

        let project = validator().validate(&row).unwrap();
        assert_eq!(project.reference.as_deref(), Some("NR-001"));
        assert_eq!(project.contract_value, None);
        assert!(project.is_ongoing);
        assert!(!project.published);
        assert_eq!(project.skills, vec!["Bridge Design", "Eurocodes", "AutoCAD"]);
    }

    #[test]
    fn test_blank_coordinate_is_missing_not_invalid() {
        let row = with(complete_row(), "latitude", "");
        let err = validator().validate(&row).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Row 2: missing required fields: latitude"
        );

        let row = with(with(complete_row(), "latitude", " "), "longitude", "");
        let err = validator().validate(&row).unwrap_err();
        assert_eq!(
            err,
            ImportError::MissingRequiredFields {
                row: 2,
                fields: vec!["latitude".to_string(), "longitude".to_string()],
            }
        );
    }
}
