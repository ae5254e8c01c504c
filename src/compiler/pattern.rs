//! 编译后数据集模型
//! 正则编译后的只读结构，构建完成后不再变更

use std::collections::HashMap;
use regex::Regex;

/// 编译后的模式条目
/// 所在表的行顺序即匹配优先级，引擎不得重排
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub id: u32,
    pub regex: Regex,
}

/// 有序模式表（前→后线性扫描，首个命中生效）
pub type PatternTable = Vec<CompiledPattern>;

/// 编译后的软件记录（浏览器/客户端产品族）
#[derive(Debug, Clone)]
pub struct SoftwareRecord {
    pub class_id: u32,
    pub family: String,
    pub engine: String,
    pub vendor: String,
    pub icon: String,
}

/// 编译后的操作系统记录
#[derive(Debug, Clone)]
pub struct OsRecord {
    pub name: String,
    pub family: String,
    pub vendor: String,
    pub icon: String,
}

/// 编译后的设备记录
#[derive(Debug, Clone)]
pub struct DeviceRecord {
    pub name: String,
    pub icon: String,
}

/// 编译后的爬虫记录（以完整 User-Agent 字面值为键）
#[derive(Debug, Clone)]
pub struct CrawlerRecord {
    pub name: String,
    pub family: String,
    pub vendor: String,
    pub class_id: u32,
}

/// 编译后的完整数据集
/// 构建一次、只读共享；热更新由调用方整体替换，引擎不管理
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    // 三张有序模式表
    pub software_patterns: PatternTable,
    pub os_patterns: PatternTable,
    pub device_patterns: PatternTable,

    // 记录表（按ID索引；模式表中的ID允许在此缺失，缺失时降级为空字段）
    pub software_records: HashMap<u32, SoftwareRecord>,
    pub software_classes: HashMap<u32, String>,
    pub software_os_links: HashMap<u32, u32>,
    pub os_records: HashMap<u32, OsRecord>,
    pub device_records: HashMap<u32, DeviceRecord>,

    // 爬虫表（精确匹配语义，与模式表分开存放）
    pub crawler_classes: HashMap<u32, String>,
    pub crawlers: HashMap<String, CrawlerRecord>,
}
