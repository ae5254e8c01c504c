//! 分类模块：User-Agent 识别核心逻辑
pub mod global;
pub mod matcher;
pub mod classifier;

// 导出核心接口
pub use self::global::{init_udger, init_udger_with_config};
pub use self::matcher::PatternMatcher;
pub use self::classifier::{UaClassifier, lookup_user_agent};
