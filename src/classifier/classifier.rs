//! 分类器核心：整合模式匹配与记录解析，输出识别结果

use std::sync::Arc;

use super::matcher::PatternMatcher;
use crate::compiler::{Dataset, DatasetCompiler};
use crate::dataset::loader::DatasetLoader;
use crate::dataset::model::{
    DeviceInfo, LookupResult, OsInfo, SoftwareClassKind, CRAWLER_CLASS_LABEL,
};
use crate::error::RsuResult;
use crate::config::GlobalConfig;

/// User-Agent 分类器
/// 持有编译后的只读数据集；`lookup` 无状态、可跨线程无锁并发调用
#[derive(Debug, Clone)]
pub struct UaClassifier {
    dataset: Arc<Dataset>,
}

impl UaClassifier {
    /// 创建分类器（加载并编译配置指定的数据集文件）
    pub fn new(config: GlobalConfig) -> RsuResult<Self> {
        // 1. 加载原始数据集
        let source = DatasetLoader::load(&config)?;

        // 2. 编译数据集
        let dataset = DatasetCompiler::compile(&source)?;

        Ok(Self {
            dataset: Arc::new(dataset),
        })
    }

    /// 从已编译数据集创建分类器（内存构建、热替换场景）
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// 当前持有的数据集
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// 识别 User-Agent 字符串
    /// 对任意输入（含空串）都不失败；未识别的轴以空字段表示
    pub fn lookup(&self, ua: &str) -> LookupResult {
        let mut result = LookupResult::default();

        // 1. 软件模式匹配（带版本捕获）
        let (software_id, version) =
            PatternMatcher::find_first(ua, &self.dataset.software_patterns, true);

        // 软件分类符号化：无记录时保持 Unclassified 哨兵，供设备回退阶梯区分
        // “完全无分类”与“已分类为普通浏览器”
        let mut class_kind = SoftwareClassKind::Unclassified;

        if let Some(record) = software_id.and_then(|id| self.dataset.software_records.get(&id)) {
            result.software.family = record.family.clone();
            if !record.family.is_empty() {
                // 与参考行为逐字节兼容：版本为空时展示名保留尾随空格
                result.software.name = format!("{} {}", record.family, version);
            }
            result.software.version = version;
            result.software.engine = record.engine.clone();
            result.software.vendor = record.vendor.clone();
            result.software.icon = record.icon.clone();
            result.software.class = self
                .dataset
                .software_classes
                .get(&record.class_id)
                .cloned()
                .unwrap_or_default();
            class_kind = SoftwareClassKind::from_class_id(record.class_id);
        }

        // 2. 爬虫精确匹配（以完整UA字面值查表）
        // 命中时覆盖软件分类槽为保留爬虫分类，但保留第1步解析出的产品族/版本
        if let Some(crawler) = self.dataset.crawlers.get(ua) {
            result.crawler.name = crawler.name.clone();
            result.crawler.family = crawler.family.clone();
            result.crawler.vendor = crawler.vendor.clone();
            result.crawler.class = self
                .dataset
                .crawler_classes
                .get(&crawler.class_id)
                .cloned()
                .unwrap_or_default();
            result.software.class = CRAWLER_CLASS_LABEL.to_string();
            class_kind = SoftwareClassKind::Crawler;
        }

        // 3. 操作系统识别：已知软件的OS关联直接生效，否则走模式匹配
        let os_id = software_id
            .and_then(|id| self.dataset.software_os_links.get(&id).copied())
            .or_else(|| PatternMatcher::find_first(ua, &self.dataset.os_patterns, false).0);

        if let Some(os) = os_id.and_then(|id| self.dataset.os_records.get(&id)) {
            result.os = OsInfo {
                name: os.name.clone(),
                family: os.family.clone(),
                vendor: os.vendor.clone(),
                icon: os.icon.clone(),
            };
        }

        // 4. 设备识别：模式命中优先，否则按软件分类走回退阶梯
        let (device_id, _) = PatternMatcher::find_first(ua, &self.dataset.device_patterns, false);

        if let Some(device) = device_id.and_then(|id| self.dataset.device_records.get(&id)) {
            result.device = DeviceInfo {
                name: device.name.clone(),
                icon: device.icon.clone(),
            };
        } else {
            result.device = Self::fallback_device(class_kind);
        }

        result
    }

    /// 设备回退阶梯
    /// 优先级固定：显式模式命中 > 无分类空守卫 > 移动类推断 > 其它硬件类推断 > 个人计算机默认
    fn fallback_device(class_kind: SoftwareClassKind) -> DeviceInfo {
        match class_kind {
            // 无任何软件分类：信号不足，不做猜测
            SoftwareClassKind::Unclassified => DeviceInfo::default(),
            SoftwareClassKind::MobileBrowser => DeviceInfo {
                name: "Smartphone".to_string(),
                icon: "phone.png".to_string(),
            },
            SoftwareClassKind::OtherHardware | SoftwareClassKind::Crawler => DeviceInfo {
                name: "Other".to_string(),
                icon: "other.png".to_string(),
            },
            SoftwareClassKind::Regular => DeviceInfo {
                name: "Personal computer".to_string(),
                icon: "desktop.png".to_string(),
            },
        }
    }
}

// 对外暴露的简化接口（走全局分类器单例）
pub fn lookup_user_agent(ua: &str) -> RsuResult<LookupResult> {
    let classifier = super::global::get_global_classifier()?;
    Ok(classifier.lookup(ua))
}
