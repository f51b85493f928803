// ==========================================
// 商品目录种子工具 - 内置品类配置
// ==========================================
// 职责: 与源表格导出一一对应的预置配置
// ==========================================

use crate::config::category_profile::{
    CategoryBootstrap, CategoryProfile, ColumnMapping, LetterColumnMap,
};

/// 饼干/曲奇导出 → bakery 品类
pub fn biscuits() -> CategoryProfile {
    CategoryProfile {
        category: "bakery".to_string(),
        title: "Insert Biscuits & Cookies products into bakery category".to_string(),
        extra_comments: Vec::new(),
        source_path: "temp_excel/xl/worksheets/sheet1.xml".into(),
        output_path: "insert_biscuits_to_bakery.sql".into(),
        json_dump_path: None,
        mapping: ColumnMapping::ByLetter(LetterColumnMap::default()),
        bootstrap: None,
    }
}

/// 食用油导出 → oils 品类（含引导语句）
pub fn cooking_oil() -> CategoryProfile {
    CategoryProfile {
        category: "oils".to_string(),
        title: "Insert Cooking Oil products into oils category".to_string(),
        extra_comments: vec!["Run this script in Supabase SQL Editor".to_string()],
        source_path: "temp_oil/xl/worksheets/sheet1.xml".into(),
        output_path: "insert_cooking_oil.sql".into(),
        json_dump_path: None,
        mapping: ColumnMapping::ByLetter(LetterColumnMap::default()),
        bootstrap: Some(CategoryBootstrap {
            description: "High-quality cooking oils for all your culinary needs".to_string(),
            display_order: 4,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biscuits_profile() {
        let profile = biscuits();
        assert_eq!(profile.category, "bakery");
        assert!(profile.bootstrap.is_none());

        // 原始工作表的固定列布局
        match profile.mapping {
            ColumnMapping::ByLetter(map) => {
                assert_eq!(map.name, "I");
                assert_eq!(map.price, "F");
                assert_eq!(map.original_price, "E");
                assert_eq!(map.size, "G");
                assert_eq!(map.image_url, "J");
            }
            ColumnMapping::ByHeader(_) => panic!("biscuits 应使用列字母映射"),
        }
    }

    #[test]
    fn test_cooking_oil_profile() {
        let profile = cooking_oil();
        assert_eq!(profile.category, "oils");

        let bootstrap = profile.bootstrap.expect("oils 应携带引导语句配置");
        assert_eq!(bootstrap.display_order, 4);
    }
}
