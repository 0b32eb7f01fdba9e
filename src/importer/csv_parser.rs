// ==========================================
// 作品集内容管理 - CSV 文本解析器
// ==========================================
// 阶段 0: 原始文本 → 表头 + 行记录
// 规则:
// - CRLF / CR 统一为 LF，整体 TRIM，跳过空白行
// - 逗号分隔，双引号包裹的字段内逗号不切分，"" 表示一个引号
// - 未闭合的引号宽松处理（直到行尾都视为字段内容）
// - 表头小写化；行宽不足补空串，超出的单元格丢弃
// ==========================================

use crate::importer::project_importer_trait::TabularParser;
use std::collections::HashMap;

// ==========================================
// ParsedRow - 单行解析结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    /// 源文本行号（表头为第 1 行）
    pub line_number: usize,
    /// 小写列名 → 单元格文本（已 TRIM）
    ///
    /// 每个不同的表头各一项；重复表头以最后一列为准
    pub fields: HashMap<String, String>,
}

impl ParsedRow {
    /// 按列名取值（列不存在返回 None）
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

// ==========================================
// ParsedTable - 整体解析结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    /// 小写表头（保持原顺序，派生后不再修改）
    pub headers: Vec<String>,
    pub rows: Vec<ParsedRow>,
}

impl ParsedTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// 解析单行 CSV
///
/// # 示例
/// - `a,"b,c",d` → [`a`, `b,c`, `d`]
/// - `"He said ""hi""."` → [`He said "hi".`]
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if !in_quotes => in_quotes = true,
            '"' => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    cells.push(current.trim().to_string());
    cells
}

// ==========================================
// CsvTextParser 实现
// ==========================================
pub struct CsvTextParser;

impl TabularParser for CsvTextParser {
    fn parse(&self, text: &str) -> ParsedTable {
        // Excel 导出的 UTF-8 CSV 带 BOM，否则会粘在首个表头上
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let lines: Vec<&str> = normalized.trim().split('\n').collect();

        // 只有表头（或空文本）时没有数据行
        if lines.len() < 2 {
            return ParsedTable::default();
        }

        let headers: Vec<String> = parse_csv_line(lines[0])
            .into_iter()
            .map(|h| h.to_lowercase())
            .collect();

        let rows = lines
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                let mut cells = parse_csv_line(line).into_iter();
                let fields = headers
                    .iter()
                    .map(|h| (h.clone(), cells.next().unwrap_or_default()))
                    .collect();
                ParsedRow {
                    line_number: idx + 1,
                    fields,
                }
            })
            .collect();

        ParsedTable { headers, rows }
    }
}
