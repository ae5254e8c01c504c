//! 数据集模块：负责数据集的加载与数据模型定义
pub mod model;
pub mod loader;

// 导出核心接口
pub use self::model::{
    DatasetSource, PatternRow, SoftwareRow, ClassRow, SoftwareOsRow,
    OsRow, DeviceRow, CrawlerRow,
    LookupResult, SoftwareInfo, OsInfo, DeviceInfo, CrawlerInfo,
    SoftwareClassKind, CRAWLER_CLASS_ID, CRAWLER_CLASS_LABEL,
};
pub use self::loader::{DatasetLoader, DatasetFileType};
