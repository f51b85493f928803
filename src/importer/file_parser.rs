// ==========================================
// 商品目录种子工具 - 表格文件解析器
// ==========================================
// 支持: 原始工作表 XML (.xml) / Excel (.xlsx/.xls) / CSV (.csv)
// 契约: 有限、不可重启的数据行序列；表头行不进入数据行
// ==========================================

use crate::importer::error::{SeedError, SeedResult};
use calamine::{open_workbook, Reader as WorkbookReader, Xlsx};
use csv::ReaderBuilder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader as XmlReader;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

// ==========================================
// RawRow - 单行原始单元格集合
// ==========================================
// 键: 列标识（列字母或表头名）；缺失/空单元格不在集合内
#[derive(Debug, Clone)]
pub struct RawRow {
    pub number: usize,                  // 源文件行号（表头行为 1）
    pub cells: HashMap<String, String>, // 列标识 → 原始文本
}

// ==========================================
// ParsedSheet - 解析结果
// ==========================================
// rows 仅含数据行: 表头行由解析器消费（表头形态）或无条件跳过（字母形态）
#[derive(Debug, Clone)]
pub struct ParsedSheet {
    pub headers: Option<Vec<String>>, // 表头形态: 按列顺序的表头名
    pub rows: Vec<RawRow>,
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: WorksheetXmlParser, WorkbookParser, CsvParser
pub trait FileParser: Send + Sync {
    /// 解析文件为数据行集合
    ///
    /// # 返回
    /// - Ok(ParsedSheet): 数据行列表（全空行已剔除）
    /// - Err: 文件读取错误、格式错误（整次运行中止）
    fn parse_sheet(&self, file_path: &Path) -> SeedResult<ParsedSheet>;
}

// ==========================================
// WorksheetXmlParser - 原始工作表 XML 解析
// ==========================================
// 行由 <row> 定位，单元格 <c r="I17"> 携带列行引用，
// 文本取自内联 <t> 节点；数值 <v> 节点不属于本形态的契约
pub struct WorksheetXmlParser;

impl FileParser for WorksheetXmlParser {
    fn parse_sheet(&self, file_path: &Path) -> SeedResult<ParsedSheet> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(SeedError::FileNotFound(file_path.display().to_string()));
        }

        let xml = std::fs::read(file_path)?;
        let mut reader = XmlReader::from_reader(xml.as_slice());
        reader.config_mut().trim_text(true);

        let mut rows = Vec::new();
        let mut buf = Vec::new();
        let mut row_count = 0usize;
        let mut in_row = false;
        let mut in_text = false;
        let mut cells: HashMap<String, String> = HashMap::new();
        let mut current_column: Option<String> = None;
        let mut current_text = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                    b"row" => {
                        in_row = true;
                        row_count += 1;
                        cells = HashMap::new();
                    }
                    b"c" if in_row => {
                        current_column = cell_reference_column(e);
                        current_text.clear();
                    }
                    b"t" if current_column.is_some() => {
                        in_text = true;
                    }
                    _ => {}
                },
                Ok(Event::Empty(ref e)) => {
                    // 自闭合 <row/> 也计入行号；自闭合 <c/> 无文本，等同缺失
                    if e.local_name().as_ref() == b"row" {
                        row_count += 1;
                    }
                }
                Ok(Event::Text(ref e)) => {
                    if in_text {
                        if let Ok(text) = e.unescape() {
                            current_text.push_str(&text);
                        }
                    }
                }
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"t" => {
                        in_text = false;
                    }
                    b"c" => {
                        if let Some(column) = current_column.take() {
                            if !current_text.is_empty() {
                                cells.insert(column, current_text.clone());
                            }
                        }
                        current_text.clear();
                    }
                    b"row" => {
                        in_row = false;
                        // 第 1 行为表头，无条件跳过；全空行同样跳过
                        if row_count > 1 && !cells.is_empty() {
                            rows.push(RawRow {
                                number: row_count,
                                cells: std::mem::take(&mut cells),
                            });
                        }
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(SeedError::WorksheetXmlError(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(ParsedSheet {
            headers: None,
            rows,
        })
    }
}

// 从 <c r="I17"> 提取列字母前缀
fn cell_reference_column(e: &BytesStart<'_>) -> Option<String> {
    for attr in e.attributes().filter_map(|a| a.ok()) {
        if attr.key.as_ref() == b"r" {
            if let Ok(reference) = String::from_utf8(attr.value.to_vec()) {
                let column: String = reference
                    .chars()
                    .take_while(|c| c.is_ascii_alphabetic())
                    .collect();
                if !column.is_empty() {
                    return Some(column.to_uppercase());
                }
            }
        }
    }
    None
}

// ==========================================
// WorkbookParser - 打包工作簿解析
// ==========================================
// 首个工作表第 1 行作为表头，数据行按表头名键控
pub struct WorkbookParser;

impl FileParser for WorkbookParser {
    fn parse_sheet(&self, file_path: &Path) -> SeedResult<ParsedSheet> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(SeedError::FileNotFound(file_path.display().to_string()));
        }

        // 打开 Excel 文件
        let mut workbook: Xlsx<_> = open_workbook(file_path)
            .map_err(|e: calamine::XlsxError| SeedError::ExcelParseError(e.to_string()))?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(SeedError::ExcelParseError("Excel 文件无工作表".to_string()));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| SeedError::ExcelParseError(e.to_string()))?;

        // 提取表头（第一行）
        let mut data_rows = range.rows();
        let header_row = data_rows
            .next()
            .ok_or_else(|| SeedError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // 读取数据行
        let mut rows = Vec::new();
        for (idx, data_row) in data_rows.enumerate() {
            let mut cells = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    let value = cell.to_string().trim().to_string();
                    if !header.is_empty() && !value.is_empty() {
                        cells.insert(header.clone(), value);
                    }
                }
            }

            // 跳过完全空白的行
            if cells.is_empty() {
                continue;
            }

            rows.push(RawRow {
                number: idx + 2,
                cells,
            });
        }

        Ok(ParsedSheet {
            headers: Some(headers),
            rows,
        })
    }
}

// ==========================================
// CsvParser - CSV 导出解析
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_sheet(&self, file_path: &Path) -> SeedResult<ParsedSheet> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(SeedError::FileNotFound(file_path.display().to_string()));
        }

        // 打开 CSV 文件
        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let mut cells = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    let trimmed = value.trim();
                    if !header.is_empty() && !trimmed.is_empty() {
                        cells.insert(header.clone(), trimmed.to_string());
                    }
                }
            }

            // 跳过完全空白的行
            if cells.is_empty() {
                continue;
            }

            rows.push(RawRow {
                number: row_idx + 2,
                cells,
            });
        }

        Ok(ParsedSheet {
            headers: Some(headers),
            rows,
        })
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> SeedResult<ParsedSheet> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "xml" => WorksheetXmlParser.parse_sheet(path),
            "xlsx" | "xls" => WorkbookParser.parse_sheet(path),
            "csv" => CsvParser.parse_sheet(path),
            _ => Err(SeedError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SHEET_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData>
    <row r="1">
      <c r="F1" t="inlineStr"><is><t>Selling Price</t></is></c>
      <c r="I1" t="inlineStr"><is><t>Title</t></is></c>
    </row>
    <row r="2">
      <c r="F2" t="inlineStr"><is><t>120</t></is></c>
      <c r="G2" t="inlineStr"><is><t> 200g </t></is></c>
      <c r="I2" t="inlineStr"><is><t>Marie Gold &amp;amp; Co</t></is></c>
    </row>
    <row r="3"/>
    <row r="4">
      <c r="F4" t="inlineStr"><is><t>85</t></is></c>
      <c r="I4" t="inlineStr"><is><t>Butter Cookies</t></is></c>
    </row>
  </sheetData>
</worksheet>"#;

    #[test]
    fn test_worksheet_xml_parser_basic() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SHEET_XML.as_bytes()).unwrap();

        let parser = WorksheetXmlParser;
        let sheet = parser.parse_sheet(temp_file.path()).unwrap();

        // 表头行与空行不进入数据行
        assert_eq!(sheet.rows.len(), 2);
        assert!(sheet.headers.is_none());

        let first = &sheet.rows[0];
        assert_eq!(first.number, 2);
        assert_eq!(first.cells.get("F"), Some(&"120".to_string()));
        assert_eq!(first.cells.get("I"), Some(&"Marie Gold &amp; Co".to_string()));
    }

    #[test]
    fn test_worksheet_xml_parser_keeps_entity_text_raw() {
        // XML 层解码一次（&amp;amp; → &amp;），剩余实体留给输出层处理
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SHEET_XML.as_bytes()).unwrap();

        let sheet = WorksheetXmlParser.parse_sheet(temp_file.path()).unwrap();
        let name = sheet.rows[0].cells.get("I").unwrap();
        assert!(name.contains("&amp;"));
    }

    #[test]
    fn test_worksheet_xml_parser_skips_header_row_unconditionally() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SHEET_XML.as_bytes()).unwrap();

        let sheet = WorksheetXmlParser.parse_sheet(temp_file.path()).unwrap();
        for row in &sheet.rows {
            assert!(row.number > 1);
            assert_ne!(row.cells.get("I"), Some(&"Title".to_string()));
        }
    }

    #[test]
    fn test_worksheet_xml_parser_file_not_found() {
        let parser = WorksheetXmlParser;
        let result = parser.parse_sheet(Path::new("non_existent.xml"));
        assert!(matches!(result, Err(SeedError::FileNotFound(_))));
    }

    #[test]
    fn test_worksheet_xml_parser_ignores_value_nodes() {
        // <v> 数值节点不属于内联文本契约，等同缺失单元格
        let xml = r#"<worksheet><sheetData>
            <row r="1"><c r="I1"><is><t>Title</t></is></c></row>
            <row r="2"><c r="F2"><v>99</v></c><c r="I2"><is><t>Rusk</t></is></c></row>
        </sheetData></worksheet>"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(xml.as_bytes()).unwrap();

        let sheet = WorksheetXmlParser.parse_sheet(temp_file.path()).unwrap();
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0].cells.get("F"), None);
        assert_eq!(sheet.rows[0].cells.get("I"), Some(&"Rusk".to_string()));
    }

    #[test]
    fn test_csv_parser_valid_file() {
        // 创建临时 CSV 文件
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Title,Selling Price,Size").unwrap();
        writeln!(temp_file, "Marie Gold,35,100g").unwrap();
        writeln!(temp_file, "Butter Cookies,85,250g").unwrap();

        let parser = CsvParser;
        let sheet = parser.parse_sheet(temp_file.path()).unwrap();

        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(
            sheet.headers.as_deref(),
            Some(&["Title".to_string(), "Selling Price".to_string(), "Size".to_string()][..])
        );
        assert_eq!(sheet.rows[0].number, 2);
        assert_eq!(sheet.rows[0].cells.get("Title"), Some(&"Marie Gold".to_string()));
        assert_eq!(sheet.rows[0].cells.get("Selling Price"), Some(&"35".to_string()));
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Title,Selling Price").unwrap();
        writeln!(temp_file, "Marie Gold,35").unwrap();
        writeln!(temp_file, ",").unwrap(); // 空行
        writeln!(temp_file, "Butter Cookies,85").unwrap();

        let parser = CsvParser;
        let sheet = parser.parse_sheet(temp_file.path()).unwrap();

        // 应跳过空行
        assert_eq!(sheet.rows.len(), 2);
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let parser = CsvParser;
        let result = parser.parse_sheet(Path::new("non_existent.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_universal_parser_unsupported_format() {
        let result = UniversalFileParser.parse("products.pdf");
        assert!(matches!(result, Err(SeedError::UnsupportedFormat(_))));
    }
}
