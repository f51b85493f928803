// ==========================================
// 商品目录种子工具 - 记录清洗与校验
// ==========================================
// 职责: NULL 标准化 / 必填判定 / 数字字面量校验 / 默认值回退
// ==========================================

use crate::domain::{DropKind, ProductRecord, RawProductRecord, RowViolation};
use tracing::warn;

pub struct DataCleaner;

impl DataCleaner {
    /// 标准化 NULL 值（空字符串/空白 → None）
    pub fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// 校验数字字面量文本（仅 ASCII 数字与至多一个小数点）
    ///
    /// price/original_price 在 SQL 中不带引号输出，必须保证是合法数字文本，
    /// 否则生成的脚本在执行时才会暴露错误
    pub fn is_numeric_literal(&self, value: &str) -> bool {
        !value.is_empty()
            && value.chars().any(|c| c.is_ascii_digit())
            && value.chars().all(|c| c.is_ascii_digit() || c == '.')
            && value.chars().filter(|c| *c == '.').count() <= 1
    }

    /// 将映射结果清洗为合格记录，或给出该行的丢弃原因
    ///
    /// # 规则
    /// - name/price 去空白后为空 → 丢弃（静默，仅计数）
    /// - price 非数字文本 → 丢弃（警告级，不中止运行）
    /// - original_price 缺失或非数字 → 回退为 price
    /// - size/image_url 缺失 → 空串
    pub fn qualify(
        &self,
        raw: RawProductRecord,
        category: &str,
    ) -> Result<ProductRecord, RowViolation> {
        let row_number = raw.row_number;

        let name = match self.normalize_null(raw.name) {
            Some(v) => v,
            None => {
                return Err(RowViolation {
                    row_number,
                    field: "name".to_string(),
                    kind: DropKind::MissingRequired,
                    message: "商品名称缺失".to_string(),
                })
            }
        };

        let price = match self.normalize_null(raw.price) {
            Some(v) => v,
            None => {
                return Err(RowViolation {
                    row_number,
                    field: "price".to_string(),
                    kind: DropKind::MissingRequired,
                    message: "售价缺失".to_string(),
                })
            }
        };

        if !self.is_numeric_literal(&price) {
            return Err(RowViolation {
                row_number,
                field: "price".to_string(),
                kind: DropKind::InvalidNumber,
                message: format!("售价不是合法数字文本: {}", price),
            });
        }

        let original_price = match self.normalize_null(raw.original_price) {
            Some(v) if self.is_numeric_literal(&v) => v,
            Some(v) => {
                // 原价字段本身可缺省，非法时回退为售价而不丢弃该行
                warn!(row_number, value = %v, "原价不是合法数字文本，回退为售价");
                price.clone()
            }
            None => price.clone(),
        };

        Ok(ProductRecord {
            name,
            price,
            original_price,
            size: self.normalize_null(raw.size).unwrap_or_default(),
            image_url: self.normalize_null(raw.image_url).unwrap_or_default(),
            category: category.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: Option<&str>, price: Option<&str>) -> RawProductRecord {
        RawProductRecord {
            name: name.map(String::from),
            price: price.map(String::from),
            original_price: None,
            size: None,
            image_url: None,
            row_number: 5,
        }
    }

    #[test]
    fn test_qualify_basic() {
        let cleaner = DataCleaner;
        let mut record = raw(Some("Marie Gold"), Some("35"));
        record.size = Some("100g".to_string());

        let product = cleaner.qualify(record, "bakery").unwrap();
        assert_eq!(product.name, "Marie Gold");
        assert_eq!(product.price, "35");
        assert_eq!(product.original_price, "35"); // 缺省回退为售价
        assert_eq!(product.size, "100g");
        assert_eq!(product.image_url, "");
        assert_eq!(product.category, "bakery");
    }

    #[test]
    fn test_qualify_missing_name_dropped_even_with_price() {
        let cleaner = DataCleaner;
        let violation = cleaner.qualify(raw(None, Some("35")), "bakery").unwrap_err();

        assert_eq!(violation.kind, DropKind::MissingRequired);
        assert_eq!(violation.field, "name");
        assert_eq!(violation.row_number, 5);
    }

    #[test]
    fn test_qualify_blank_price_dropped() {
        let cleaner = DataCleaner;
        let violation = cleaner
            .qualify(raw(Some("Marie Gold"), Some("   ")), "bakery")
            .unwrap_err();

        assert_eq!(violation.kind, DropKind::MissingRequired);
        assert_eq!(violation.field, "price");
    }

    #[test]
    fn test_qualify_invalid_price_dropped_as_warning() {
        let cleaner = DataCleaner;
        let violation = cleaner
            .qualify(raw(Some("Marie Gold"), Some("35 Rs")), "bakery")
            .unwrap_err();

        assert_eq!(violation.kind, DropKind::InvalidNumber);
        assert_eq!(violation.field, "price");
    }

    #[test]
    fn test_qualify_original_price_kept_when_valid() {
        let cleaner = DataCleaner;
        let mut record = raw(Some("Marie Gold"), Some("35"));
        record.original_price = Some("40".to_string());

        let product = cleaner.qualify(record, "bakery").unwrap();
        assert_eq!(product.original_price, "40");
    }

    #[test]
    fn test_qualify_invalid_original_price_falls_back() {
        let cleaner = DataCleaner;
        let mut record = raw(Some("Marie Gold"), Some("35"));
        record.original_price = Some("MRP 40".to_string());

        let product = cleaner.qualify(record, "bakery").unwrap();
        assert_eq!(product.original_price, "35");
    }

    #[test]
    fn test_is_numeric_literal() {
        let cleaner = DataCleaner;
        assert!(cleaner.is_numeric_literal("120"));
        assert!(cleaner.is_numeric_literal("99.5"));
        assert!(cleaner.is_numeric_literal(".5"));

        assert!(!cleaner.is_numeric_literal(""));
        assert!(!cleaner.is_numeric_literal("."));
        assert!(!cleaner.is_numeric_literal("1.2.3"));
        assert!(!cleaner.is_numeric_literal("1e5"));
        assert!(!cleaner.is_numeric_literal("-5"));
        assert!(!cleaner.is_numeric_literal("₹120"));
    }
}
