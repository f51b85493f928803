// ==========================================
// 饼干/曲奇工作簿 JSON 导出
// ==========================================
// 输入: PRODUCT EXCEL/Biscuits & Cookies.xlsx
// 输出: biscuits_cookies_data.json
// ==========================================

use anyhow::Context;
use catalog_seeder::emitter::WorkbookJsonDumper;
use catalog_seeder::{logging, report};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    logging::init();

    let source = Path::new("PRODUCT EXCEL/Biscuits & Cookies.xlsx");
    let output = Path::new("biscuits_cookies_data.json");

    let dump = WorkbookJsonDumper
        .dump(source, output)
        .context("工作簿 JSON 导出失败")?;

    report::print_workbook_dump(&dump, &output.display().to_string());
    Ok(())
}
