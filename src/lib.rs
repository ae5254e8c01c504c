//! rsudger - Rust udger User-Agent 识别库

// 导出全局错误类型
pub use self::error::{RsudgerError, RsuResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出数据集模块核心接口
pub use self::dataset::{
    DatasetSource, PatternRow, SoftwareRow, ClassRow, SoftwareOsRow,
    OsRow, DeviceRow, CrawlerRow,
    LookupResult, SoftwareInfo, OsInfo, DeviceInfo, CrawlerInfo,
    SoftwareClassKind, CRAWLER_CLASS_ID, CRAWLER_CLASS_LABEL,
    DatasetLoader, DatasetFileType,
};

// 导出编译模块核心接口
pub use self::compiler::{
    CompiledPattern, PatternTable, Dataset, DatasetCompiler,
    SoftwareRecord, OsRecord, DeviceRecord, CrawlerRecord,
};

// 导出分类模块核心接口（含兼容简化调用的全局接口）
pub use self::classifier::{
    UaClassifier,
    PatternMatcher,
    init_udger,
    init_udger_with_config,
    lookup_user_agent,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod dataset;
pub mod compiler;
pub mod classifier;
