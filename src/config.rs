//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 数据集文件路径（.json 或 .mp）
    pub dataset_path: PathBuf,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("udger_dataset.mp"),
            verbose: false,
        }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn dataset_path(mut self, path: PathBuf) -> Self {
        self.config.dataset_path = path;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
