//! 基础设施：配置、日志与文件持久化

pub mod config;
pub mod logger;
pub mod persistence;
