//! 核心功能模块
//!
//! 提供与几何处理无关的基础设施：数学类型、日志、配置和错误处理。
//!
//! # 模块组织
//!
//! - `math`：向量类型（基于 nalgebra）
//! - `log`：日志系统（基于 tracing）
//! - `config`：配置管理（TOML 文件 + 命令行覆盖）
//! - `error`：统一的错误类型与解析诊断

pub mod math;
pub mod log;
pub mod config;
pub mod error;

// 重新导出常用类型，方便使用
pub use math::Vector3;
pub use error::{Result, TriMeshError, MeshLoadError, ParseDiagnostic, RecordError};
pub use config::{Config, ImportConfig, LogLevel};
