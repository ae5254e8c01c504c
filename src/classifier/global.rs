//! 全局分类器单例管理
use once_cell::sync::OnceCell;

use super::classifier::UaClassifier;
use crate::error::{RsuResult, RsudgerError};
use crate::config::{ConfigManager, GlobalConfig};

/// 全局分类器实例
static GLOBAL_CLASSIFIER: OnceCell<UaClassifier> = OnceCell::new();

/// 初始化全局分类器（默认配置）
pub fn init_udger() -> RsuResult<()> {
    init_udger_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局分类器
pub fn init_udger_with_config(config: GlobalConfig) -> RsuResult<()> {
    if GLOBAL_CLASSIFIER.get().is_some() {
        return Ok(());
    }

    let classifier = UaClassifier::new(config)?;
    GLOBAL_CLASSIFIER.set(classifier).map_err(|_| {
        RsudgerError::ClassifierNotInitialized
    })?;

    Ok(())
}

/// 获取全局分类器
pub(crate) fn get_global_classifier() -> RsuResult<&'static UaClassifier> {
    GLOBAL_CLASSIFIER.get()
        .ok_or(RsudgerError::ClassifierNotInitialized)
}
