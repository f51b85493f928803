// ==========================================
// 商品目录种子工具 - 主入口
// ==========================================
// 说明: 实际迁移由各品类二进制执行，此入口仅做索引
// ==========================================

fn main() {
    println!("==================================================");
    println!("{} v{}", catalog_seeder::APP_NAME, catalog_seeder::VERSION);
    println!("==================================================");
    println!();
    println!("每个品类对应一个独立的种子脚本二进制（无参数调用）:");
    println!();
    println!("  cargo run --bin seed_biscuits       # 饼干/曲奇 → bakery 品类 SQL");
    println!("  cargo run --bin seed_cooking_oil    # 食用油 → oils 品类 SQL（含引导语句）");
    println!("  cargo run --bin dump_biscuits_json  # 工作簿 → JSON 导出");
    println!();
    println!("输入/输出路径与列映射内嵌于各二进制的品类配置中");
}
