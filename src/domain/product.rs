// ==========================================
// 商品目录种子工具 - 商品领域模型
// ==========================================
// 职责: 导入管道中间结构与最终商品记录
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// RawProductRecord - 导入中间结构体
// ==========================================
// 用途: 导入管道中间产物（文件解析 → 字段映射 → 此结构）
// 生命周期: 仅在导入流程内
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProductRecord {
    pub name: Option<String>,           // 商品名称
    pub price: Option<String>,          // 售价（数字字面量文本）
    pub original_price: Option<String>, // 原价（缺省回退为售价）
    pub size: Option<String>,           // 规格
    pub image_url: Option<String>,      // 图片 URL

    // 元信息
    pub row_number: usize, // 原始文件行号（用于汇总报告）
}

// ==========================================
// ProductRecord - 合格商品记录
// ==========================================
// 不变量: name/price 去空白后非空，price/original_price 已通过数字文本校验
// 生命周期: 构造后立即渲染为一条 INSERT 语句，不跨运行存活
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,           // 商品名称（原始表格文本，实体解码在输出层进行）
    pub price: String,          // 售价（输出为无引号数字字面量）
    pub original_price: String, // 原价（缺省时等于 price）
    pub size: String,           // 规格（可为空串）
    pub image_url: String,      // 图片 URL（可为空串）
    pub category: String,       // 品类常量（来自配置，不读表格）
}

// ==========================================
// DropKind - 行丢弃原因分类
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropKind {
    MissingRequired, // 必填字段缺失（静默跳过，仅计数）
    InvalidNumber,   // 数字字段非法（警告级，跳过该行）
}

// ==========================================
// RowViolation - 行级违规记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowViolation {
    pub row_number: usize, // 原始文件行号
    pub field: String,     // 违规字段
    pub kind: DropKind,    // 丢弃原因分类
    pub message: String,   // 违规描述
}

// ==========================================
// SeedSummary - 运行汇总统计
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSummary {
    pub total_rows: usize,       // 数据行总数（不含表头）
    pub retained: usize,         // 合格记录数 = 商品 INSERT 语句数
    pub missing_required: usize, // 必填缺失丢弃数
    pub invalid_number: usize,   // 数字非法丢弃数
}

// ==========================================
// SeedReport - 运行结果
// ==========================================
// 用途: 管道返回值，控制台汇总的数据来源
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedReport {
    pub summary: SeedSummary,          // 汇总统计
    pub products: Vec<ProductRecord>,  // 保留记录（预览取前 3 条）
    pub violations: Vec<RowViolation>, // 行级违规明细
    pub sql_path: String,              // 生成的 SQL 文件路径
    pub json_path: Option<String>,     // 可选 JSON 导出路径
}
