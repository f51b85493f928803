// ==========================================
// 商品目录种子工具 - SQL 脚本生成器
// ==========================================
// 职责: INSERT 语句渲染、字符串字面量转义、脚本文件写入
// 转义顺序: 先实体解码，后单引号加倍（颠倒会产生漏转义）
// ==========================================

use crate::config::{CategoryBootstrap, CategoryProfile};
use crate::domain::ProductRecord;
use crate::importer::error::{SeedError, SeedResult};
use quick_xml::escape::unescape_with;
use std::borrow::Cow;
use std::fs;

// 目标表列布局（固定）
const PRODUCTS_COLUMNS: &str =
    "(name, price, original_price, category, size, image_url, in_stock, rating)";

/// 解码字符实体（命名与数字形式）
///
/// 源表格文本常见二次转义（如 `&amp;`、`&apos;`、`&#8217;`），
/// 统一还原为纯文本后再做 SQL 转义
pub fn decode_entities(raw: &str) -> Cow<'_, str> {
    match unescape_with(raw, resolve_entity) {
        Ok(decoded) => decoded,
        // 无法识别的实体保持原样
        Err(_) => Cow::Borrowed(raw),
    }
}

// 命名实体表: XML 预定义五个 + 目录文本中常见的 HTML 实体
fn resolve_entity(entity: &str) -> Option<&'static str> {
    match entity {
        "lt" => Some("<"),
        "gt" => Some(">"),
        "amp" => Some("&"),
        "apos" => Some("'"),
        "quot" => Some("\""),
        "nbsp" => Some("\u{a0}"),
        "ndash" => Some("\u{2013}"),
        "mdash" => Some("\u{2014}"),
        "lsquo" => Some("\u{2018}"),
        "rsquo" => Some("\u{2019}"),
        "ldquo" => Some("\u{201c}"),
        "rdquo" => Some("\u{201d}"),
        "hellip" => Some("\u{2026}"),
        "reg" => Some("\u{ae}"),
        "trade" => Some("\u{2122}"),
        _ => None,
    }
}

/// SQL 字符串字面量转义: 实体解码 → 单引号加倍
pub fn escape_sql_literal(raw: &str) -> String {
    decode_entities(raw).replace('\'', "''")
}

// ==========================================
// SqlScriptWriter - 脚本渲染与写入
// ==========================================
pub struct SqlScriptWriter;

impl SqlScriptWriter {
    /// 渲染单条 INSERT 语句（两行形式，与既有种子脚本一致）
    ///
    /// in_stock/rating 为固定默认值，不从输入派生
    pub fn render_insert(&self, record: &ProductRecord) -> String {
        format!(
            "INSERT INTO products {columns}\nVALUES ('{name}', {price}, {original_price}, '{category}', '{size}', '{image_url}', true, 4.5);",
            columns = PRODUCTS_COLUMNS,
            name = escape_sql_literal(&record.name),
            price = record.price,
            original_price = record.original_price,
            category = escape_sql_literal(&record.category),
            size = escape_sql_literal(&record.size),
            image_url = escape_sql_literal(&record.image_url),
        )
    }

    /// 渲染完整脚本文本（注释头 + 可选引导语句 + 全部 INSERT）
    pub fn render_script(&self, profile: &CategoryProfile, products: &[ProductRecord]) -> String {
        let mut script = String::new();

        // 注释头: 标题 / 总数 / 生成信息
        script.push_str(&format!("-- {}\n", profile.title));
        script.push_str(&format!("-- Total products: {}\n", products.len()));
        script.push_str(&format!(
            "-- Generated automatically at {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        for comment in &profile.extra_comments {
            script.push_str(&format!("-- {}\n", comment));
        }
        script.push('\n');

        if let Some(bootstrap) = &profile.bootstrap {
            script.push_str(&self.render_bootstrap(&profile.category, bootstrap));
            script.push_str("-- STEP 3: Insert all products\n");
        }

        for (idx, record) in products.iter().enumerate() {
            if idx > 0 {
                script.push('\n');
            }
            script.push_str(&self.render_insert(record));
            script.push('\n');
        }

        script
    }

    // 引导语句: 品类行幂等插入 + 主键默认生成器
    fn render_bootstrap(&self, category: &str, bootstrap: &CategoryBootstrap) -> String {
        format!(
            "-- STEP 1: Create {category} category if it doesn't exist\n\
             INSERT INTO categories (name, description, display_order)\n\
             VALUES ('{category_lit}', '{description}', {display_order})\n\
             ON CONFLICT (name) DO NOTHING;\n\
             \n\
             -- STEP 2: Ensure products table auto-generates IDs\n\
             ALTER TABLE products ALTER COLUMN id SET DEFAULT gen_random_uuid()::text;\n\
             \n",
            category = category,
            category_lit = escape_sql_literal(category),
            description = escape_sql_literal(&bootstrap.description),
            display_order = bootstrap.display_order,
        )
    }

    /// 写入脚本文件（UTF-8，存在则覆盖）
    pub fn write_script(
        &self,
        profile: &CategoryProfile,
        products: &[ProductRecord],
    ) -> SeedResult<()> {
        let script = self.render_script(profile, products);
        fs::write(&profile.output_path, script).map_err(|e| {
            SeedError::OutputWriteError(format!("{}: {}", profile.output_path.display(), e))
        })
    }
}
