// ==========================================
// 商品目录种子工具 - 领域层
// ==========================================
// 职责: 导入管道的实体与汇总类型
// ==========================================

pub mod product;

pub use product::{
    DropKind, ProductRecord, RawProductRecord, RowViolation, SeedReport, SeedSummary,
};
