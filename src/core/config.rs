//! 配置管理模块
//!
//! 支持从 TOML 配置文件加载，也支持命令行参数覆盖。
//!
//! # 配置文件格式 (config.toml)
//!
//! ```toml
//! [logging]
//! level = "info"      # trace, debug, info, warn, error
//! file_output = false
//! log_file = "tri_mesh.log"
//!
//! [import]
//! flip_texcoord_v = false
//! synthesize_normals = true
//! default_color = [0.5, 0.5, 0.5]
//!
//! [model]
//! path = "models/teapot.obj"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, Result};
use crate::geometry::mesh::DEFAULT_COLOR;

/// 全局配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,

    /// 导入配置
    #[serde(default)]
    pub import: ImportConfig,

    /// 模型配置
    #[serde(default)]
    pub model: ModelConfig,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
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

/// 导入配置
///
/// 控制 OBJ 导入过程中的可选行为。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// 是否翻转纹理坐标的 V 轴（`v' = 1 - v`）
    #[serde(default = "default_flip_v")]
    pub flip_texcoord_v: bool,

    /// 文件缺少法线时是否自动生成
    #[serde(default = "default_synthesize_normals")]
    pub synthesize_normals: bool,

    /// 未指定颜色时使用的顶点颜色
    #[serde(default = "default_color")]
    pub default_color: [f32; 3],
}

/// 模型配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// 模型文件路径
    #[serde(default = "default_model_path")]
    pub path: String,
}

// 默认值函数
fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_file_output() -> bool { false }
fn default_log_file() -> String { "tri_mesh.log".to_string() }
fn default_flip_v() -> bool { false }
fn default_synthesize_normals() -> bool { true }
fn default_color() -> [f32; 3] { DEFAULT_COLOR }
fn default_model_path() -> String { "models/teapot.obj".to_string() }

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            import: ImportConfig::default(),
            model: ModelConfig::default(),
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

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            flip_texcoord_v: default_flip_v(),
            synthesize_normals: default_synthesize_normals(),
            default_color: default_color(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

impl LogLevel {
    /// 从字符串解析日志级别（不区分大小写）
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// `EnvFilter` 使用的指令字符串
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
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
    /// # 返回值
    ///
    /// 成功返回 `Config` 实例，失败返回错误
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path_str.clone()))?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// 从配置文件加载，如果文件不存在或无法解析则使用默认配置
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
    /// - `--model <path>`: 要导入的模型文件
    /// - `--log-level <level>`: 日志级别
    /// - `--flip-v`: 翻转纹理坐标 V 轴
    /// - `--no-synthesize-normals`: 不自动生成缺失的法线
    ///
    /// 无法识别的值会被忽略，保留原配置。
    pub fn apply_args<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        if let Some(idx) = args.iter().position(|a| a == "--model") {
            if let Some(path) = args.get(idx + 1) {
                self.model.path = path.clone();
            }
        }

        if let Some(idx) = args.iter().position(|a| a == "--log-level") {
            if let Some(level) = args.get(idx + 1).and_then(|s| LogLevel::parse(s)) {
                self.logging.level = level;
            }
        }

        if args.iter().any(|a| a == "--flip-v") {
            self.import.flip_texcoord_v = true;
        }

        if args.iter().any(|a| a == "--no-synthesize-normals") {
            self.import.synthesize_normals = false;
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.model.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "model.path".to_string(),
                reason: "Model path must not be empty".to_string(),
            }.into());
        }

        if self
            .import
            .default_color
            .iter()
            .any(|c| !c.is_finite() || *c < 0.0 || *c > 1.0)
        {
            return Err(ConfigError::InvalidValue {
                field: "import.default_color".to_string(),
                reason: "Color components must be within [0, 1]".to_string(),
            }.into());
        }

        Ok(())
    }
}
