//! 数据集加载管理器
//! 负责从本地文件读取原始数据集（JSON 或 MessagePack，按扩展名区分）

use std::path::Path;
use rmp_serde::from_slice;
use tracing::debug;

use super::model::DatasetSource;
use crate::error::{RsuResult, RsudgerError};
use crate::config::GlobalConfig;

/// 数据集文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFileType {
    /// 明文 JSON（便于人工维护与调试）
    Json,
    /// MessagePack 压缩格式（分发用，体积小、解析快）
    MsgPack,
}

/// 数据集加载管理器
pub struct DatasetLoader;

impl DatasetLoader {
    /// 从配置指定的路径加载原始数据集
    pub fn load(config: &GlobalConfig) -> RsuResult<DatasetSource> {
        let path = &config.dataset_path;

        // 1. 检查文件存在
        if !path.exists() {
            return Err(RsudgerError::DatasetLoadError(format!(
                "数据集文件不存在：{}",
                path.display()
            )));
        }

        // 2. 读取全部字节
        let bytes = std::fs::read(path)?;

        // 3. 按文件类型解析
        let source = match Self::detect_file_type(path) {
            DatasetFileType::Json => Self::parse_json(&bytes)?,
            DatasetFileType::MsgPack => Self::parse_msgpack(&bytes)?,
        };

        debug!(
            "数据集加载成功：软件模式{}条、OS模式{}条、设备模式{}条、爬虫精确条目{}条",
            source.software_patterns.len(),
            source.os_patterns.len(),
            source.device_patterns.len(),
            source.crawlers.len()
        );

        Ok(source)
    }

    /// 按扩展名识别数据集文件类型（.json 之外一律按 MessagePack 处理）
    pub fn detect_file_type(path: &Path) -> DatasetFileType {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => DatasetFileType::Json,
            _ => DatasetFileType::MsgPack,
        }
    }

    /// 解析JSON格式数据集
    fn parse_json(bytes: &[u8]) -> RsuResult<DatasetSource> {
        let source: DatasetSource = serde_json::from_slice(bytes)?;
        Ok(source)
    }

    /// 解析MessagePack格式数据集
    fn parse_msgpack(bytes: &[u8]) -> RsuResult<DatasetSource> {
        let source: DatasetSource = from_slice(bytes)
            .map_err(|e| RsudgerError::MsgPackError(format!("反序列化失败：{}", e)))?;
        Ok(source)
    }
}
