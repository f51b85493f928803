// ==========================================
// 商品目录种子工具 - 目录种子管道
// ==========================================
// 流程: 解析 → 映射 → 清洗校验 → 生成 SQL → 可选 JSON 导出
// 单线程单趟执行；首个不可恢复错误即中止，无部分输出清理
// ==========================================

use crate::config::CategoryProfile;
use crate::domain::{DropKind, SeedReport, SeedSummary};
use crate::emitter::{SqlScriptWriter, WorkbookJsonDumper};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::SeedResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::UniversalFileParser;
use tracing::{debug, info, warn};

pub struct CatalogSeeder;

impl CatalogSeeder {
    /// 执行一次完整的种子脚本生成
    ///
    /// # 参数
    /// - profile: 品类配置（列映射 / 路径 / 引导语句）
    ///
    /// # 返回
    /// - Ok(SeedReport): 运行结果（汇总统计 + 保留记录 + 违规明细）
    /// - Err: 文件读取/解析/写入错误（整次运行中止）
    pub fn run(&self, profile: &CategoryProfile) -> SeedResult<SeedReport> {
        info!(
            category = %profile.category,
            source = %profile.source_path.display(),
            "开始生成品类种子脚本"
        );

        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let sheet = UniversalFileParser.parse(&profile.source_path)?;
        let total_rows = sheet.rows.len();
        info!(total_rows, "文件解析完成");

        // === 步骤 2: 字段映射与清洗校验 ===
        debug!("步骤 2: 字段映射与清洗校验");
        let mapper = FieldMapper::new(&profile.mapping);
        let cleaner = DataCleaner;
        let mut products = Vec::new();
        let mut violations = Vec::new();

        for row in &sheet.rows {
            let raw = mapper.map_row(row);
            match cleaner.qualify(raw, &profile.category) {
                Ok(product) => products.push(product),
                Err(violation) => {
                    match violation.kind {
                        // 必填缺失按约定静默跳过，仅计数
                        DropKind::MissingRequired => debug!(
                            row_number = violation.row_number,
                            field = %violation.field,
                            "跳过必填缺失行"
                        ),
                        DropKind::InvalidNumber => warn!(
                            row_number = violation.row_number,
                            message = %violation.message,
                            "跳过数字非法行"
                        ),
                    }
                    violations.push(violation);
                }
            }
        }
        info!(
            retained = products.len(),
            dropped = violations.len(),
            "字段映射完成"
        );

        // === 步骤 3: 生成 SQL 脚本 ===
        debug!("步骤 3: 生成 SQL 脚本");
        SqlScriptWriter.write_script(profile, &products)?;
        info!(
            path = %profile.output_path.display(),
            statements = products.len(),
            "SQL 脚本写入完成"
        );

        // === 步骤 4: 可选 JSON 导出（工作簿形态） ===
        let json_path = match &profile.json_dump_path {
            Some(path) => {
                debug!("步骤 4: JSON 导出");
                let dump = WorkbookJsonDumper.dump(&profile.source_path, path)?;
                info!(
                    path = %path.display(),
                    records = dump.records.len(),
                    "JSON 导出完成"
                );
                Some(path.display().to_string())
            }
            None => None,
        };

        // === 汇总 ===
        let summary = SeedSummary {
            total_rows,
            retained: products.len(),
            missing_required: violations
                .iter()
                .filter(|v| v.kind == DropKind::MissingRequired)
                .count(),
            invalid_number: violations
                .iter()
                .filter(|v| v.kind == DropKind::InvalidNumber)
                .count(),
        };

        Ok(SeedReport {
            summary,
            products,
            violations,
            sql_path: profile.output_path.display().to_string(),
            json_path,
        })
    }
}
