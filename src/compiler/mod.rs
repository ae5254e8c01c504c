//! 编译模块：将原始数据集编译为可执行的正则模式表与只读记录表
pub mod pattern;
pub mod compiler;

pub use self::pattern::{
    CompiledPattern, PatternTable, Dataset,
    SoftwareRecord, OsRecord, DeviceRecord, CrawlerRecord,
};
pub use self::compiler::DatasetCompiler;
