//! tri_mesh - OBJ 三角网格导入库
//!
//! 将 Wavefront OBJ 文件导入为去重的索引三角形网格，
//! 同时提供轴对齐包围盒和面积加权法线生成。
//!
//! # 模块结构
//!
//! - `core`: 核心功能模块（数学、日志、配置、错误处理）
//! - `geometry`: 几何导入模块（OBJ 解析、顶点去重、网格数据、加载器）
//!
//! # 使用示例
//!
//! ```no_run
//! use tri_mesh::geometry::MeshData;
//!
//! let mut mesh = MeshData::new();
//! match mesh.read_file("models/teapot.obj") {
//!     Ok(report) => println!("{} 个三角形，跳过 {} 条记录",
//!         mesh.triangle_count(), report.diagnostics.len()),
//!     Err(e) => eprintln!("导入失败: {}", e),
//! }
//! ```

pub mod core;
pub mod geometry;
