// ==========================================
// 饼干/曲奇种子脚本生成
// ==========================================
// 输入: temp_excel/xl/worksheets/sheet1.xml（原始工作表 XML）
// 输出: insert_biscuits_to_bakery.sql
// ==========================================

use anyhow::Context;
use catalog_seeder::config::profiles;
use catalog_seeder::importer::CatalogSeeder;
use catalog_seeder::{logging, report};

fn main() -> anyhow::Result<()> {
    logging::init();

    let profile = profiles::biscuits();
    let seed_report = CatalogSeeder
        .run(&profile)
        .with_context(|| format!("生成 {} 品类种子脚本失败", profile.category))?;

    report::print_seed_report(&seed_report);
    Ok(())
}
