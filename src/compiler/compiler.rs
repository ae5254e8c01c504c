//! 数据集编译器核心
//! 仅负责将原始数据集编译为可执行的正则模式表与记录索引

use std::collections::HashMap;
use std::time::Instant;
use regex::RegexBuilder;
use tracing::debug;

use super::pattern::{
    CompiledPattern, CrawlerRecord, Dataset, DeviceRecord, OsRecord, PatternTable, SoftwareRecord,
};
use crate::dataset::model::{DatasetSource, PatternRow};
use crate::error::RsuResult;

/// 数据集编译器
pub struct DatasetCompiler;

impl DatasetCompiler {
    /// 编译原始数据集
    /// 任一正则编译失败即整体失败，不返回部分数据集
    pub fn compile(source: &DatasetSource) -> RsuResult<Dataset> {
        let start = Instant::now();

        // 1. 编译三张有序模式表（保持源顺序）
        let software_patterns = Self::compile_pattern_table(&source.software_patterns)?;
        let os_patterns = Self::compile_pattern_table(&source.os_patterns)?;
        let device_patterns = Self::compile_pattern_table(&source.device_patterns)?;

        // 2. 构建记录索引（按ID；重复ID后行覆盖前行）
        let mut software_records = HashMap::new();
        for row in &source.software_records {
            software_records.insert(
                row.id,
                SoftwareRecord {
                    class_id: row.class_id,
                    family: row.name.clone(),
                    engine: row.engine.clone(),
                    vendor: row.vendor.clone(),
                    icon: row.icon.clone(),
                },
            );
        }

        let mut software_classes = HashMap::new();
        for row in &source.software_classes {
            software_classes.insert(row.id, row.label.clone());
        }

        let mut software_os_links = HashMap::new();
        for row in &source.software_os_links {
            software_os_links.insert(row.software_id, row.os_id);
        }

        let mut os_records = HashMap::new();
        for row in &source.os_records {
            os_records.insert(
                row.id,
                OsRecord {
                    name: row.name.clone(),
                    family: row.family.clone(),
                    vendor: row.vendor.clone(),
                    icon: row.icon.clone(),
                },
            );
        }

        let mut device_records = HashMap::new();
        for row in &source.device_records {
            device_records.insert(
                row.id,
                DeviceRecord {
                    name: row.name.clone(),
                    icon: row.icon.clone(),
                },
            );
        }

        let mut crawler_classes = HashMap::new();
        for row in &source.crawler_classes {
            crawler_classes.insert(row.id, row.label.clone());
        }

        let mut crawlers = HashMap::new();
        for row in &source.crawlers {
            crawlers.insert(
                row.ua_string.clone(),
                CrawlerRecord {
                    name: row.name.clone(),
                    family: row.family.clone(),
                    vendor: row.vendor.clone(),
                    class_id: row.class_id,
                },
            );
        }

        // 3. 输出编译统计
        debug!("数据集编译完成，总耗时{:?}", start.elapsed());
        debug!(
            "编译统计：软件模式{}条、OS模式{}条、设备模式{}条、软件记录{}条、爬虫精确条目{}条",
            software_patterns.len(),
            os_patterns.len(),
            device_patterns.len(),
            software_records.len(),
            crawlers.len()
        );

        Ok(Dataset {
            software_patterns,
            os_patterns,
            device_patterns,
            software_records,
            software_classes,
            software_os_links,
            os_records,
            device_records,
            crawler_classes,
            crawlers,
        })
    }

    /// 编译单张有序模式表
    fn compile_pattern_table(rows: &[PatternRow]) -> RsuResult<PatternTable> {
        let mut table = Vec::with_capacity(rows.len());
        for row in rows {
            table.push(Self::compile_single_pattern(row)?);
        }
        Ok(table)
    }

    /// 编译单个模式：先归一化外部正则，再以显式忽略大小写标志编译
    fn compile_single_pattern(row: &PatternRow) -> RsuResult<CompiledPattern> {
        let cleaned = Self::clean_regex(&row.regex);
        let regex = RegexBuilder::new(&cleaned).case_insensitive(true).build()?;

        Ok(CompiledPattern { id: row.id, regex })
    }

    /// 归一化外部正则
    /// 去掉尾部的 /si 修饰符（单行+忽略大小写）与头部的 PCRE 分隔符；
    /// 忽略大小写由编译标志统一补回，该步骤为固定契约而非实现选择
    fn clean_regex(raw: &str) -> String {
        let cleaned = raw.strip_suffix("/si").unwrap_or(raw);
        let cleaned = cleaned.strip_prefix('/').unwrap_or(cleaned);
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RsudgerError;

    fn pattern_row(id: u32, regex: &str) -> PatternRow {
        PatternRow {
            id,
            regex: regex.to_string(),
        }
    }

    #[test]
    fn test_clean_regex_strips_modifiers() {
        // 测试场景：去除 PCRE 分隔符与 /si 后缀
        assert_eq!(DatasetCompiler::clean_regex("/chrome\\/([0-9.]+)/si"), "chrome\\/([0-9.]+)");
        // 无修饰符时原样保留
        assert_eq!(DatasetCompiler::clean_regex("plain"), "plain");
        // 仅有头部分隔符
        assert_eq!(DatasetCompiler::clean_regex("/plain"), "plain");
    }

    #[test]
    fn test_compiled_pattern_is_case_insensitive() {
        // 测试场景：编译后的模式以显式标志忽略大小写
        let mut source = DatasetSource::default();
        source.software_patterns.push(pattern_row(1, "/CHROME/si"));

        let dataset = DatasetCompiler::compile(&source).unwrap();
        assert!(dataset.software_patterns[0].regex.is_match("chrome"));
        assert!(dataset.software_patterns[0].regex.is_match("Chrome"));
    }

    #[test]
    fn test_compile_preserves_pattern_order() {
        // 测试场景：模式表保持源顺序，不按ID重排
        let mut source = DatasetSource::default();
        source.os_patterns.push(pattern_row(9, "/b/si"));
        source.os_patterns.push(pattern_row(2, "/a/si"));

        let dataset = DatasetCompiler::compile(&source).unwrap();
        assert_eq!(dataset.os_patterns[0].id, 9);
        assert_eq!(dataset.os_patterns[1].id, 2);
    }

    #[test]
    fn test_compile_fails_on_malformed_regex() {
        // 测试场景：任一正则非法即整体失败
        let mut source = DatasetSource::default();
        source.software_patterns.push(pattern_row(1, "/valid/si"));
        source.device_patterns.push(pattern_row(2, "/broken(/si"));

        let result = DatasetCompiler::compile(&source);
        assert!(matches!(result, Err(RsudgerError::RegexCompileError(_))));
    }

    #[test]
    fn test_compile_builds_record_indexes() {
        // 测试场景：记录表按ID索引，爬虫表按完整UA字面值索引
        let mut source = DatasetSource::default();
        source.software_records.push(crate::dataset::SoftwareRow {
            id: 4,
            class_id: 1,
            name: "Opera".to_string(),
            engine: "Presto/Blink".to_string(),
            vendor: "Opera Software ASA.".to_string(),
            icon: "opera.png".to_string(),
        });
        source.software_os_links.push(crate::dataset::SoftwareOsRow {
            software_id: 4,
            os_id: 11,
        });
        source.crawlers.push(crate::dataset::CrawlerRow {
            ua_string: "SomeBot/1.0".to_string(),
            name: "SomeBot".to_string(),
            family: "SomeBot".to_string(),
            vendor: "X".to_string(),
            class_id: 1,
        });

        let dataset = DatasetCompiler::compile(&source).unwrap();
        assert_eq!(dataset.software_records.get(&4).unwrap().family, "Opera");
        assert_eq!(dataset.software_os_links.get(&4), Some(&11));
        assert_eq!(dataset.crawlers.get("SomeBot/1.0").unwrap().name, "SomeBot");
    }
}
