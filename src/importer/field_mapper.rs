// ==========================================
// 商品目录种子工具 - 字段映射器
// ==========================================
// 职责: 固定列映射表 → 命名商品字段
// 说明: 不做类型校验，数字文本校验在清洗阶段进行
// ==========================================

use crate::config::{ColumnMapping, HeaderColumnMap, LetterColumnMap};
use crate::domain::RawProductRecord;
use crate::importer::file_parser::RawRow;

pub struct FieldMapper<'a> {
    mapping: &'a ColumnMapping,
}

impl<'a> FieldMapper<'a> {
    pub fn new(mapping: &'a ColumnMapping) -> Self {
        Self { mapping }
    }

    /// 将一行原始单元格映射为 RawProductRecord
    ///
    /// # 参数
    /// - row: 原始行（列标识 → 文本）
    ///
    /// # 返回
    /// - RawProductRecord: 各字段去空白，空白视为缺失
    pub fn map_row(&self, row: &RawRow) -> RawProductRecord {
        match self.mapping {
            ColumnMapping::ByLetter(map) => self.map_by_letter(row, map),
            ColumnMapping::ByHeader(map) => self.map_by_header(row, map),
        }
    }

    fn map_by_letter(&self, row: &RawRow, map: &LetterColumnMap) -> RawProductRecord {
        RawProductRecord {
            name: self.get(row, map.name),
            price: self.get(row, map.price),
            original_price: self.get(row, map.original_price),
            size: self.get(row, map.size),
            image_url: self.get(row, map.image_url),
            row_number: row.number,
        }
    }

    fn map_by_header(&self, row: &RawRow, map: &HeaderColumnMap) -> RawProductRecord {
        RawProductRecord {
            name: self.get(row, &map.name),
            price: self.get(row, &map.price),
            original_price: map
                .original_price
                .as_deref()
                .and_then(|key| self.get(row, key)),
            size: map.size.as_deref().and_then(|key| self.get(row, key)),
            image_url: map.image_url.as_deref().and_then(|key| self.get(row, key)),
            row_number: row.number,
        }
    }

    // 提取并去空白；空白视为缺失
    fn get(&self, row: &RawRow, key: &str) -> Option<String> {
        row.cells
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn letter_row(pairs: &[(&str, &str)]) -> RawRow {
        let mut cells = HashMap::new();
        for (column, value) in pairs {
            cells.insert(column.to_string(), value.to_string());
        }
        RawRow { number: 7, cells }
    }

    #[test]
    fn test_map_by_letter_basic() {
        let mapping = ColumnMapping::ByLetter(LetterColumnMap::default());
        let mapper = FieldMapper::new(&mapping);

        let row = letter_row(&[
            ("I", "Marie Gold"),
            ("F", "35"),
            ("E", "40"),
            ("G", "100g"),
            ("J", "https://cdn.example.com/marie.jpg"),
        ]);
        let record = mapper.map_row(&row);

        assert_eq!(record.name, Some("Marie Gold".to_string()));
        assert_eq!(record.price, Some("35".to_string()));
        assert_eq!(record.original_price, Some("40".to_string()));
        assert_eq!(record.size, Some("100g".to_string()));
        assert_eq!(
            record.image_url,
            Some("https://cdn.example.com/marie.jpg".to_string())
        );
        assert_eq!(record.row_number, 7);
    }

    #[test]
    fn test_map_by_letter_missing_cells_become_none() {
        let mapping = ColumnMapping::ByLetter(LetterColumnMap::default());
        let mapper = FieldMapper::new(&mapping);

        // 缺失的单元格不在行集合内
        let row = letter_row(&[("F", "35")]);
        let record = mapper.map_row(&row);

        assert_eq!(record.name, None);
        assert_eq!(record.price, Some("35".to_string()));
        assert_eq!(record.original_price, None);
    }

    #[test]
    fn test_map_trims_whitespace() {
        let mapping = ColumnMapping::ByLetter(LetterColumnMap::default());
        let mapper = FieldMapper::new(&mapping);

        let row = letter_row(&[("I", "  Marie Gold  "), ("F", "   ")]);
        let record = mapper.map_row(&row);

        assert_eq!(record.name, Some("Marie Gold".to_string()));
        // 全空白等同缺失
        assert_eq!(record.price, None);
    }

    #[test]
    fn test_map_by_header() {
        let mapping = ColumnMapping::ByHeader(HeaderColumnMap {
            name: "Title".to_string(),
            price: "Selling Price".to_string(),
            original_price: Some("MRP".to_string()),
            size: Some("Size".to_string()),
            image_url: None,
        });
        let mapper = FieldMapper::new(&mapping);

        let mut cells = HashMap::new();
        cells.insert("Title".to_string(), "Butter Cookies".to_string());
        cells.insert("Selling Price".to_string(), "85".to_string());
        cells.insert("Size".to_string(), "250g".to_string());
        let row = RawRow { number: 3, cells };

        let record = mapper.map_row(&row);
        assert_eq!(record.name, Some("Butter Cookies".to_string()));
        assert_eq!(record.price, Some("85".to_string()));
        assert_eq!(record.original_price, None);
        assert_eq!(record.size, Some("250g".to_string()));
        // 映射表未配置的列恒为缺失
        assert_eq!(record.image_url, None);
    }
}
