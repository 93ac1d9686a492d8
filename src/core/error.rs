//! 错误处理模块
//!
//! 定义了网格导入过程中使用的统一错误类型。
//!
//! # 错误分层
//!
//! - **致命错误**（`TriMeshError`）：格式不支持、文件无法读取等，整个导入中止，
//!   网格保持导入前的状态。
//! - **记录级错误**（`RecordError`）：某一行的数值无法解析、面的角点不足、
//!   索引越界等。该记录被跳过，解析继续，所有问题在导入结束后以
//!   `ParseDiagnostic` 列表的形式一次性返回。

use std::fmt;
use std::path::PathBuf;

/// 统一的 Result 类型
pub type Result<T> = std::result::Result<T, TriMeshError>;

/// tri_mesh 的错误类型
#[derive(Debug)]
pub enum TriMeshError {
    /// 配置错误
    Config(ConfigError),

    /// 网格加载错误
    MeshLoading(MeshLoadError),

    /// IO 错误
    Io(std::io::Error),

    /// 属性数组长度与顶点数量不一致
    AttributeMismatch {
        attribute: &'static str,
        expected: usize,
        found: usize,
    },
}

/// 配置相关的错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件未找到
    FileNotFound(String),

    /// 配置文件解析失败
    ParseError(String),

    /// 配置值无效
    InvalidValue { field: String, reason: String },
}

/// 网格加载相关的错误
///
/// 这些错误都会让整个导入失败，调用方拿到的网格不会被修改。
#[derive(Debug)]
pub enum MeshLoadError {
    /// 文件不存在
    FileNotFound(PathBuf),

    /// 不支持的文件格式
    UnsupportedFormat(String),

    /// 文件存在但无法读取
    ReadFailed { path: PathBuf, reason: String },

    /// 组装结果未通过校验
    ValidationError(String),
}

/// 单条记录的解析错误
///
/// 只影响出错的那一行，不会中止导入。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// 记录缺少必需的数值
    MissingToken { expected: usize, found: usize },

    /// 数值无法解析为浮点数
    InvalidNumber(String),

    /// 面索引无法解析为整数
    InvalidIndex(String),

    /// OBJ 索引从 1 开始，0 是非法值
    ZeroIndex,

    /// 索引引用了尚未声明的属性
    DanglingIndex {
        attribute: &'static str,
        index: i64,
        available: usize,
    },

    /// 面的角点少于 3 个
    TooFewCorners(usize),
}

/// 带行号的解析诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// 出错的行号（从 1 开始）
    pub line: usize,

    /// 出错记录的关键字（`v`、`vn`、`vt`、`f`）
    pub keyword: String,

    /// 具体错误
    pub error: RecordError,
}

impl fmt::Display for TriMeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriMeshError::Config(e) => write!(f, "Configuration error: {}", e),
            TriMeshError::MeshLoading(e) => write!(f, "Mesh loading error: {}", e),
            TriMeshError::Io(e) => write!(f, "IO error: {}", e),
            TriMeshError::AttributeMismatch { attribute, expected, found } => write!(
                f,
                "Attribute '{}' has {} entries, expected {}",
                attribute, found, expected
            ),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl fmt::Display for MeshLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshLoadError::FileNotFound(path) => write!(f, "Mesh file not found: {}", path.display()),
            MeshLoadError::UnsupportedFormat(msg) => write!(f, "Unsupported mesh format: {}", msg),
            MeshLoadError::ReadFailed { path, reason } => {
                write!(f, "Failed to read '{}': {}", path.display(), reason)
            }
            MeshLoadError::ValidationError(msg) => write!(f, "Mesh validation failed: {}", msg),
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::MissingToken { expected, found } => {
                write!(f, "expected at least {} values, found {}", expected, found)
            }
            RecordError::InvalidNumber(token) => write!(f, "invalid number '{}'", token),
            RecordError::InvalidIndex(token) => write!(f, "invalid index '{}'", token),
            RecordError::ZeroIndex => write!(f, "index 0 is not valid (indices are 1-based)"),
            RecordError::DanglingIndex { attribute, index, available } => write!(
                f,
                "{} index {} out of range ({} declared so far)",
                attribute, index, available
            ),
            RecordError::TooFewCorners(n) => {
                write!(f, "face needs at least 3 corners, found {}", n)
            }
        }
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} ('{}'): {}", self.line, self.keyword, self.error)
    }
}

impl std::error::Error for TriMeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TriMeshError::Io(e) => Some(e),
            TriMeshError::Config(e) => Some(e),
            TriMeshError::MeshLoading(e) => Some(e),
            TriMeshError::AttributeMismatch { .. } => None,
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for MeshLoadError {}
impl std::error::Error for RecordError {}

impl From<std::io::Error> for TriMeshError {
    fn from(err: std::io::Error) -> Self {
        TriMeshError::Io(err)
    }
}

impl From<ConfigError> for TriMeshError {
    fn from(err: ConfigError) -> Self {
        TriMeshError::Config(err)
    }
}

impl From<MeshLoadError> for TriMeshError {
    fn from(err: MeshLoadError) -> Self {
        TriMeshError::MeshLoading(err)
    }
}

impl TriMeshError {
    /// 是否为"格式不支持"错误
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, TriMeshError::MeshLoading(MeshLoadError::UnsupportedFormat(_)))
    }
}
