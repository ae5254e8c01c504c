//! 全局错误类型定义

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum RsudgerError {
    // 数据集相关错误
    #[error("数据集加载失败：{0}")]
    DatasetLoadError(String),
    #[error("数据集解析失败：{0}")]
    DatasetParseError(String),

    // 编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 分类器相关错误
    #[error("分类器未初始化")]
    ClassifierNotInitialized,

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("MessagePack序列化/反序列化失败：{0}")]
    MsgPackError(String),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type RsuResult<T> = Result<T, RsudgerError>;
