//! 应用配置
//!
//! 各节独立提供默认值，环境变量可逐项覆盖。

use std::env;

use serde::{Deserialize, Serialize};

/// 应用配置结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub log: LogConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 5000,
            timeout_seconds: 30,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// 从环境变量读取配置，缺省项使用默认值
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(addr) = env::var("SHOP_BIND_ADDRESS") {
            config.http.bind_address = addr;
        }
        if let Ok(port) = env::var("SHOP_PORT") {
            if let Ok(port) = port.parse() {
                config.http.port = port;
            }
        }
        if let Ok(secs) = env::var("SHOP_TIMEOUT_SECONDS") {
            if let Ok(secs) = secs.parse() {
                config.http.timeout_seconds = secs;
            }
        }
        if let Ok(level) = env::var("SHOP_LOG") {
            config.log.level = level;
        }

        config
    }

    /// 监听地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.http.bind_address, self.http.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:5000");
        assert_eq!(config.http.timeout_seconds, 30);
        assert_eq!(config.log.level, "info");
    }
}
