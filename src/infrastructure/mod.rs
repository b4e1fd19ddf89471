//! 基础设施模块

pub mod config;
pub mod logger;
pub mod store;
