// ==========================================
// 食用油种子脚本生成
// ==========================================
// 输入: temp_oil/xl/worksheets/sheet1.xml（原始工作表 XML）
// 输出: insert_cooking_oil.sql（含品类引导语句）
// ==========================================

use anyhow::Context;
use catalog_seeder::config::profiles;
use catalog_seeder::importer::CatalogSeeder;
use catalog_seeder::{logging, report};

fn main() -> anyhow::Result<()> {
    logging::init();

    let profile = profiles::cooking_oil();
    let seed_report = CatalogSeeder
        .run(&profile)
        .with_context(|| format!("生成 {} 品类种子脚本失败", profile.category))?;

    report::print_seed_report(&seed_report);
    Ok(())
}
