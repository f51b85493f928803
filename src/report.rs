// ==========================================
// 商品目录种子工具 - 控制台汇总输出
// ==========================================
// 职责: 运行后人工核对用的摘要，不影响输出文件内容
// ==========================================

use crate::domain::SeedReport;
use crate::emitter::{decode_entities, WorkbookDump};

/// 打印种子脚本运行摘要与前 3 条商品预览
pub fn print_seed_report(report: &SeedReport) {
    println!("Total products extracted: {}", report.summary.retained);
    println!("{}", "=".repeat(80));

    println!();
    println!("✅ SQL file generated: {}", report.sql_path);
    println!("✅ Total SQL statements: {}", report.summary.retained);
    if let Some(json_path) = &report.json_path {
        println!("✅ JSON file generated: {}", json_path);
    }

    let dropped = report.summary.missing_required + report.summary.invalid_number;
    if dropped > 0 {
        println!(
            "⚠️  Skipped rows: {} (missing required: {}, invalid number: {})",
            dropped, report.summary.missing_required, report.summary.invalid_number
        );
    }

    println!();
    println!("First 3 products:");
    for (idx, product) in report.products.iter().take(3).enumerate() {
        println!();
        println!("  Product {}:", idx + 1);
        // 预览展示解码后的名称，SQL 文件中的转义不受影响
        println!("    Name: {}", decode_entities(&product.name));
        println!("    Price: ₹{}", product.price);
        println!("    Original: ₹{}", product.original_price);
        println!("    Size: {}", product.size);
    }
}

/// 打印工作簿 JSON 导出摘要（表头 + 前 3 条记录）
pub fn print_workbook_dump(dump: &WorkbookDump, output_path: &str) {
    let headers: Vec<&str> = dump
        .headers
        .iter()
        .filter(|h| !h.is_empty())
        .map(|h| h.as_str())
        .collect();
    println!("Headers: {:?}", headers);
    println!("{}", "=".repeat(80));
    println!("Total products: {}", dump.records.len());
    println!("{}", "=".repeat(80));

    for (idx, record) in dump.records.iter().take(3).enumerate() {
        println!();
        println!("Product {}:", idx + 1);
        for (key, value) in record.iter() {
            println!("  {}: {}", key, value);
        }
    }

    println!();
    println!("✅ Data saved to {}", output_path);
}
