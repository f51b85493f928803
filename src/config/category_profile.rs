// ==========================================
// 商品目录种子工具 - 品类配置
// ==========================================
// 职责: 将各脚本原本内嵌的常量（列映射/路径/品类标签）表达为显式配置值
// ==========================================

use std::path::PathBuf;

// ==========================================
// LetterColumnMap - 原始工作表列字母映射
// ==========================================
// 用途: 原始 sheet XML 形态（单元格以列字母定位）
#[derive(Debug, Clone)]
pub struct LetterColumnMap {
    pub name: &'static str,           // 商品名称列
    pub price: &'static str,          // 售价列
    pub original_price: &'static str, // 原价列
    pub size: &'static str,           // 规格列
    pub image_url: &'static str,      // 图片 URL 列
}

impl Default for LetterColumnMap {
    // 两类品类导出共用的固定列布局
    fn default() -> Self {
        Self {
            name: "I",
            price: "F",
            original_price: "E",
            size: "G",
            image_url: "J",
        }
    }
}

// ==========================================
// HeaderColumnMap - 表头名称映射
// ==========================================
// 用途: 打包工作簿 / CSV 形态（单元格以表头名定位）
// 说明: 仅 name/price 必配，其余列可缺省
#[derive(Debug, Clone)]
pub struct HeaderColumnMap {
    pub name: String,
    pub price: String,
    pub original_price: Option<String>,
    pub size: Option<String>,
    pub image_url: Option<String>,
}

// ==========================================
// ColumnMapping - 列到字段的静态映射表
// ==========================================
// 每个品类脚本持有与其表格布局对应的一份，不做推断
#[derive(Debug, Clone)]
pub enum ColumnMapping {
    ByLetter(LetterColumnMap),
    ByHeader(HeaderColumnMap),
}

// ==========================================
// CategoryBootstrap - 品类引导语句配置
// ==========================================
// 用途: 商品插入前保证品类行存在、主键默认生成器就位
// 说明: 并非每个品类都需要（biscuits 无，oils 有）
#[derive(Debug, Clone)]
pub struct CategoryBootstrap {
    pub description: String, // categories.description
    pub display_order: i32,  // categories.display_order
}

// ==========================================
// CategoryProfile - 单次运行的完整配置
// ==========================================
#[derive(Debug, Clone)]
pub struct CategoryProfile {
    pub category: String,                     // 品类常量（写入每条记录，不读表格）
    pub title: String,                        // SQL 文件首行注释
    pub extra_comments: Vec<String>,          // 附加注释行（如执行指引）
    pub source_path: PathBuf,                 // 输入文件（.xml/.xlsx/.xls/.csv）
    pub output_path: PathBuf,                 // 输出 SQL 文件（存在则覆盖）
    pub json_dump_path: Option<PathBuf>,      // 可选: 工作簿形态附加 JSON 导出
    pub mapping: ColumnMapping,               // 列映射表
    pub bootstrap: Option<CategoryBootstrap>, // 可选引导语句
}
