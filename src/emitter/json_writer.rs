// ==========================================
// 商品目录种子工具 - 工作簿 JSON 导出
// ==========================================
// 职责: 打包工作簿 → 按表头顺序键控的记录数组（缩进序列化）
// 键序 = 表头序（serde_json preserve_order）
// ==========================================

use crate::importer::error::{SeedError, SeedResult};
use calamine::{open_workbook, Data, Reader as WorkbookReader, Xlsx};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

// ==========================================
// WorkbookDump - 导出结果
// ==========================================
#[derive(Debug, Clone)]
pub struct WorkbookDump {
    pub headers: Vec<String>,             // 表头（按列顺序，可能含空名占位）
    pub records: Vec<Map<String, Value>>, // 每行一个对象，键序 = 表头序
}

pub struct WorkbookJsonDumper;

impl WorkbookJsonDumper {
    /// 读取工作簿首个工作表并写出 JSON 文件
    ///
    /// # 参数
    /// - source: 工作簿路径（.xlsx/.xls）
    /// - output: JSON 输出路径（存在则覆盖）
    ///
    /// # 返回
    /// - Ok(WorkbookDump): 表头与记录（控制台预览的数据来源）
    /// - Err: 文件读取错误、格式错误、序列化错误
    pub fn dump(&self, source: &Path, output: &Path) -> SeedResult<WorkbookDump> {
        // 检查文件存在
        if !source.exists() {
            return Err(SeedError::FileNotFound(source.display().to_string()));
        }

        // 检查扩展名
        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" && ext != "xls" {
            return Err(SeedError::UnsupportedFormat(ext));
        }

        // 打开 Excel 文件
        let mut workbook: Xlsx<_> = open_workbook(source)
            .map_err(|e: calamine::XlsxError| SeedError::ExcelParseError(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(SeedError::ExcelParseError("Excel 文件无工作表".to_string()));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| SeedError::ExcelParseError(e.to_string()))?;

        // 提取表头（第一行）
        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| SeedError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let records = rows_to_objects(&headers, rows);

        // 写出 JSON（2 空格缩进）
        let file = File::create(output)
            .map_err(|e| SeedError::OutputWriteError(format!("{}: {}", output.display(), e)))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &records)?;

        Ok(WorkbookDump { headers, records })
    }
}

/// 数据行 → 表头键控对象
///
/// 键序 = 表头序；空名表头列被忽略；全空行丢弃
pub fn rows_to_objects<'a, I>(headers: &[String], rows: I) -> Vec<Map<String, Value>>
where
    I: Iterator<Item = &'a [Data]>,
{
    let mut records = Vec::new();
    for row in rows {
        let mut object = Map::new();
        for (idx, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = row.get(idx).map(cell_to_json).unwrap_or(Value::Null);
            object.insert(header.clone(), value);
        }

        // 跳过完全空白的行
        if object.values().all(Value::is_null) {
            continue;
        }
        records.push(object);
    }
    records
}

// 单元格类型映射: 文本 → 字符串，数字 → 数字，空/错误 → null
fn cell_to_json(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::Int(i) => Value::Number((*i).into()),
        Data::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Data::Bool(b) => Value::Bool(*b),
        Data::Error(_) => Value::Null,
        other => Value::String(other.to_string()),
    }
}
