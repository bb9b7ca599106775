//! 配置管理模块
//!
//! 提供网格工具配置的加载、解析和管理功能。
//! 支持从 TOML 配置文件加载，也支持命令行参数覆盖。
//!
//! # 配置文件格式 (shape_meshes.toml)
//!
//! ```toml
//! [sphere]
//! longitude_bands = 20
//! latitude_bands = 20
//!
//! [loader]
//! obj_path = "assets/box.obj"
//!
//! [logging]
//! level = "info"      # trace, debug, info, warn, error
//! file_output = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, Result};
use crate::geometry::sphere::MIN_RESOLUTION;

/// 顶层配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 球体生成配置
    #[serde(default)]
    pub sphere: SphereConfig,

    /// 模型加载配置
    #[serde(default)]
    pub loader: LoaderConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 经纬度球体的分辨率
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SphereConfig {
    /// 经度方向的分段数
    #[serde(default = "default_bands")]
    pub longitude_bands: u32,

    /// 纬度方向的分段数
    #[serde(default = "default_bands")]
    pub latitude_bands: u32,
}

/// 模型加载配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// 要加载的 OBJ 文件路径（可选）
    #[serde(default)]
    pub obj_path: Option<String>,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// 是否输出到文件
    #[serde(default = "default_file_output")]
    pub file_output: bool,

    /// 日志文件路径
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

// 默认值函数
fn default_bands() -> u32 { 20 }
fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_file_output() -> bool { false }
fn default_log_file() -> String { "shape_meshes.log".to_string() }

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            longitude_bands: default_bands(),
            latitude_bands: default_bands(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_output: default_file_output(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// 从配置文件加载
    ///
    /// # 参数
    ///
    /// * `path` - 配置文件路径
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use shape_meshes::core::Config;
    ///
    /// let config = Config::from_file("shape_meshes.toml")?;
    /// # Ok::<(), shape_meshes::core::ShapeMeshError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path_str.clone()))?;

        Self::from_toml_str(&contents)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// 从配置文件加载，如果文件不存在则使用默认配置
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_default()
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// 从命令行参数覆盖配置
    ///
    /// 支持的参数：
    /// - `--long <value>`: 经度分段数
    /// - `--lat <value>`: 纬度分段数
    /// - `--obj <path>`: 要加载的 OBJ 文件
    /// - `--verbose`: 日志级别设为 debug
    pub fn apply_args<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        let value_of = |flag: &str| {
            args.iter()
                .position(|a| a == flag)
                .and_then(|idx| args.get(idx + 1))
        };

        if let Some(long) = value_of("--long").and_then(|v| v.parse().ok()) {
            self.sphere.longitude_bands = long;
        }

        if let Some(lat) = value_of("--lat").and_then(|v| v.parse().ok()) {
            self.sphere.latitude_bands = lat;
        }

        if let Some(path) = value_of("--obj") {
            self.loader.obj_path = Some(path.clone());
        }

        if args.iter().any(|a| a == "--verbose") {
            self.logging.level = LogLevel::Debug;
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.sphere.longitude_bands < MIN_RESOLUTION
            || self.sphere.latitude_bands < MIN_RESOLUTION
        {
            return Err(ConfigError::InvalidValue {
                field: "sphere.longitude_bands/latitude_bands".to_string(),
                reason: format!("Sphere resolution must be at least {}", MIN_RESOLUTION),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.sphere.longitude_bands, 20);
        assert_eq!(config.sphere.latitude_bands, 20);
        assert!(config.loader.obj_path.is_none());
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [sphere]
            longitude_bands = 40

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.sphere.longitude_bands, 40);
        assert_eq!(config.sphere.latitude_bands, 20);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(!config.logging.file_output);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml_str("[sphere\nlongitude_bands = ").is_err());
    }

    #[test]
    fn test_apply_args() {
        let mut config = Config::default();
        config.apply_args(["demo", "--long", "12", "--lat", "8", "--obj", "a.obj", "--verbose"]);

        assert_eq!(config.sphere.longitude_bands, 12);
        assert_eq!(config.sphere.latitude_bands, 8);
        assert_eq!(config.loader.obj_path.as_deref(), Some("a.obj"));
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.sphere.latitude_bands = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let mut config = Config::default();
        config.sphere.longitude_bands = 36;
        config.sphere.latitude_bands = 18;
        config.loader.obj_path = Some("assets/box.obj".to_string());
        config.logging.level = LogLevel::Warn;
        config.logging.file_output = true;

        let path = std::env::temp_dir()
            .join(format!("shape_meshes_config_{}.toml", std::process::id()));
        config.save_to_file(&path).unwrap();
        let reloaded = Config::from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(reloaded.unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        assert!(Config::from_file("definitely/not/here.toml").is_err());
        let config = Config::from_file_or_default("definitely/not/here.toml");
        assert_eq!(config.sphere, SphereConfig::default());
    }
}
