// ==========================================
// 商品目录种子工具 - 输出层
// ==========================================
// 职责: SQL 种子脚本渲染与写入、工作簿 JSON 导出
// ==========================================

pub mod json_writer;
pub mod sql_writer;

pub use json_writer::{WorkbookDump, WorkbookJsonDumper};
pub use sql_writer::{decode_entities, escape_sql_literal, SqlScriptWriter};
