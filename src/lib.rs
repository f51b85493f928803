// ==========================================
// 商品目录种子工具 - 核心库
// ==========================================
// 技术栈: Rust + calamine + quick-xml
// 系统定位: 一次性数据迁移脚本（人工监督执行）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 表格数据读取与映射
pub mod importer;

// 输出层 - SQL 脚本与 JSON 导出
pub mod emitter;

// 配置层 - 品类配置
pub mod config;

// 日志系统
pub mod logging;

// 控制台汇总输出
pub mod report;

// ==========================================
// 重导出核心类型
// ==========================================

// 配置
pub use config::{
    CategoryBootstrap, CategoryProfile, ColumnMapping, HeaderColumnMap, LetterColumnMap,
};

// 领域类型
pub use domain::{
    DropKind, ProductRecord, RawProductRecord, RowViolation, SeedReport, SeedSummary,
};

// 输出层
pub use emitter::{SqlScriptWriter, WorkbookDump, WorkbookJsonDumper};

// 导入层
pub use importer::{CatalogSeeder, SeedError, SeedResult, UniversalFileParser};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "商品目录种子工具";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
