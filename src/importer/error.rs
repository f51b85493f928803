// ==========================================
// 商品目录种子工具 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
///
/// 首个不可恢复错误即中止整次运行；行级问题不在此处建模，
/// 而是作为 RowViolation 进入汇总统计
#[derive(Error, Debug)]
pub enum SeedError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xml/.xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("工作表 XML 解析失败: {0}")]
    WorksheetXmlError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 输出相关错误 =====
    #[error("输出写入失败: {0}")]
    OutputWriteError(String),

    #[error("JSON 序列化失败: {0}")]
    JsonError(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for SeedError {
    fn from(err: std::io::Error) -> Self {
        SeedError::FileReadError(err.to_string())
    }
}

// 实现 From<quick_xml::Error>
impl From<quick_xml::Error> for SeedError {
    fn from(err: quick_xml::Error) -> Self {
        SeedError::WorksheetXmlError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for SeedError {
    fn from(err: csv::Error) -> Self {
        SeedError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for SeedError {
    fn from(err: calamine::Error) -> Self {
        SeedError::ExcelParseError(err.to_string())
    }
}

// 实现 From<calamine::XlsxError>
impl From<calamine::XlsxError> for SeedError {
    fn from(err: calamine::XlsxError) -> Self {
        SeedError::ExcelParseError(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for SeedError {
    fn from(err: serde_json::Error) -> Self {
        SeedError::JsonError(err.to_string())
    }
}

/// Result 类型别名
pub type SeedResult<T> = Result<T, SeedError>;
