//! 数据集数据模型定义
//! 仅存储数据集原始表与识别结果，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 保留的爬虫分类ID（不出现在软件分类表中，命中爬虫精确表时合成）
pub const CRAWLER_CLASS_ID: u32 = 99;

/// 保留的爬虫分类标签（合成值，不从分类表读取）
pub const CRAWLER_CLASS_LABEL: &str = "Crawler";

// ======== 原始数据集表（从 JSON / MessagePack 解析） ========

/// 原始模式行（正则未编译，保持数据源中的优先级顺序）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRow {
    pub id: u32,
    /// 原始正则，可携带 PCRE 分隔符与 /si 修饰符后缀
    #[serde(rename = "regstring")]
    pub regex: String,
}

/// 软件记录行（浏览器/客户端产品族，例如 Chrome）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwareRow {
    pub id: u32,
    pub class_id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub icon: String,
}

/// 分类行（软件分类与爬虫分类共用同一形状）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRow {
    pub id: u32,
    #[serde(default)]
    pub label: String,
}

/// 软件→操作系统关联行（稀疏表：大多数软件无此关联）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwareOsRow {
    pub software_id: u32,
    pub os_id: u32,
}

/// 操作系统记录行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsRow {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub icon: String,
}

/// 设备记录行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRow {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// 爬虫记录行（以完整 User-Agent 字面值为键的精确匹配表，非模式表）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerRow {
    pub ua_string: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub vendor: String,
    pub class_id: u32,
}

/// 完整原始数据集（全部逻辑表，未编译）
/// 三张模式表的行顺序即匹配优先级顺序，反序列化后不得重排
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetSource {
    #[serde(default)]
    pub software_patterns: Vec<PatternRow>,
    #[serde(default)]
    pub software_records: Vec<SoftwareRow>,
    #[serde(default)]
    pub software_classes: Vec<ClassRow>,
    #[serde(default)]
    pub software_os_links: Vec<SoftwareOsRow>,
    #[serde(default)]
    pub os_patterns: Vec<PatternRow>,
    #[serde(default)]
    pub os_records: Vec<OsRow>,
    #[serde(default)]
    pub device_patterns: Vec<PatternRow>,
    #[serde(default)]
    pub device_records: Vec<DeviceRow>,
    #[serde(default)]
    pub crawler_classes: Vec<ClassRow>,
    #[serde(default)]
    pub crawlers: Vec<CrawlerRow>,
}

// ======== 软件分类符号化 ========

/// 软件分类的符号化变体
/// 设备回退阶梯只依据该枚举分支，不比较外部数据集的原始分类ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftwareClassKind {
    /// 无任何软件分类（未命中软件模式，或命中的ID无对应记录）
    Unclassified,
    /// 移动浏览器
    MobileBrowser,
    /// 运行在非个人计算机硬件上的客户端（离线工具/库类）
    OtherHardware,
    /// 爬虫（保留分类）
    Crawler,
    /// 普通桌面客户端
    Regular,
}

impl SoftwareClassKind {
    /// 将外部数据集的分类ID映射为符号化变体
    pub fn from_class_id(class_id: u32) -> Self {
        match class_id {
            3 => SoftwareClassKind::MobileBrowser,
            5 | 10 | 20 | 50 => SoftwareClassKind::OtherHardware,
            CRAWLER_CLASS_ID => SoftwareClassKind::Crawler,
            _ => SoftwareClassKind::Regular,
        }
    }
}

// ======== 识别结果模型 ========

/// 软件识别结果（浏览器/客户端）
/// 所有字段未识别时为空字符串，无 None 状态
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoftwareInfo {
    /// 展示名：`"{family} {version}"`（版本为空时保留尾随空格，与参考行为逐字节兼容）
    pub name: String,
    pub family: String,
    pub version: String,
    pub engine: String,
    pub vendor: String,
    pub icon: String,
    pub class: String,
}

/// 操作系统识别结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsInfo {
    pub name: String,
    pub family: String,
    pub vendor: String,
    pub icon: String,
}

/// 设备识别结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub name: String,
    pub icon: String,
}

/// 爬虫识别结果（仅精确表命中时填充）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrawlerInfo {
    pub name: String,
    pub family: String,
    pub vendor: String,
    pub class: String,
}

/// 完整识别结果（四个子结果，任意子结果可整体为空，均为合法输出）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub software: SoftwareInfo,
    pub os: OsInfo,
    pub device: DeviceInfo,
    pub crawler: CrawlerInfo,
}

// ======== 为 SoftwareInfo 实现 Display trait（用于日志 / Report 输出） ========
impl fmt::Display for SoftwareInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.version.is_empty() {
            write!(f, "{} {}", self.family, self.version)
        } else {
            write!(f, "{}", self.family)
        }
    }
}

// ======== 为 OsInfo 实现 Display trait ========
impl fmt::Display for OsInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
