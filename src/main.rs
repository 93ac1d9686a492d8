//! tri_mesh - OBJ 网格检查工具
//!
//! 读取一个 OBJ 文件，输出去重后的顶点/索引统计、包围盒以及被跳过的记录。
//!
//! # 使用方法
//!
//! ```bash
//! # 使用配置文件中的模型路径
//! cargo run
//!
//! # 命令行覆盖
//! cargo run -- --model models/cube.obj --log-level debug --flip-v
//! ```
//!
//! # 命令行参数
//!
//! - `--model <path>`: 模型文件路径
//! - `--log-level <level>`: trace / debug / info / warn / error
//! - `--flip-v`: 翻转纹理坐标的 V 轴
//! - `--no-synthesize-normals`: 文件缺少法线时不生成

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tri_mesh::core::{log, Config};
use tri_mesh::geometry::{ImportOptions, ImportReport, MeshData};

/// 应用程序入口点
///
/// # 流程
///
/// 1. 加载配置文件（config.toml），不存在时使用默认值
/// 2. 应用命令行参数覆盖
/// 3. 初始化日志系统
/// 4. 导入模型并输出摘要；导入失败时输出占位立方体的摘要并以 1 退出
fn main() {
    let mut config = Config::from_file_or_default("config.toml");
    config.apply_args(std::env::args());

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let log_file = if config.logging.file_output {
        Some(config.logging.log_file.as_str())
    } else {
        None
    };
    log::init_logger(config.logging.level, config.logging.file_output, log_file);
    info!(version = env!("CARGO_PKG_VERSION"), "tri_mesh starting...");

    if let Err(e) = run(&config) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let options = ImportOptions::from(&config.import);
    let mut mesh = MeshData::new();

    match mesh.read_file_with(&config.model.path, &options) {
        Ok(report) => {
            summarize(&mesh, Some(&report));
            Ok(())
        }
        Err(e) => {
            warn!(model = %config.model.path, "导入失败，使用占位立方体: {}", e);
            summarize(&MeshData::unit_cube(), None);
            Err(e).with_context(|| format!("failed to import '{}'", config.model.path))
        }
    }
}

/// 输出网格摘要，`report` 为空表示占位网格
fn summarize(mesh: &MeshData, report: Option<&ImportReport>) {
    println!("model:      {}", mesh.name().unwrap_or("<unnamed>"));
    println!("vertices:   {}", mesh.vertex_count());
    println!("triangles:  {}", mesh.triangle_count());
    println!(
        "attributes: normals={} texcoords={} colors={}",
        mesh.has_normals(),
        mesh.has_texcoords(),
        mesh.has_colors()
    );

    if mesh.has_bounds() {
        let aabb = mesh.aabb();
        let center = aabb.center();
        println!(
            "bounds:     min=({:.4}, {:.4}, {:.4}) max=({:.4}, {:.4}, {:.4})",
            aabb.min.x, aabb.min.y, aabb.min.z, aabb.max.x, aabb.max.y, aabb.max.z
        );
        println!(
            "framing:    center=({:.4}, {:.4}, {:.4}) radius={:.4}",
            center.x,
            center.y,
            center.z,
            aabb.radius()
        );
    } else {
        println!("bounds:     <none>");
    }

    let Some(report) = report else {
        println!("source:     placeholder");
        return;
    };

    println!("faces:      {}", report.faces);
    if report.normals_synthesized {
        println!("normals:    synthesized (area weighted)");
    }
    if report.ignored_records > 0 {
        println!("ignored:    {} unsupported records", report.ignored_records);
    }
    if !report.is_clean() {
        println!("skipped:    {} records", report.diagnostics.len());
        for diagnostic in &report.diagnostics {
            println!("  {}", diagnostic);
        }
    }
}
