/// OBJ 文件加载器
///
/// 读取 Wavefront OBJ 文本，按 (位置, 法线, 纹理坐标) 三元组去重，
/// 扇形三角化多边形面，并在缺少法线时生成面积加权法线。
use super::{ImportOptions, Imported, MeshLoader};
use crate::core::error::{MeshLoadError, Result};
use crate::geometry::obj;
use std::path::Path;

/// OBJ 格式加载器
///
/// # 特性
///
/// - 按完整角点键去重，UV 接缝和硬边处自动拆分顶点
/// - 多边形面扇形三角化
/// - 文件法线读取时重新归一化
/// - 自动生成缺失的法线
/// - 无效记录被跳过并汇总到 `ImportReport`
///
/// # 使用示例
///
/// ```rust,no_run
/// use tri_mesh::geometry::loaders::{ImportOptions, MeshLoader, ObjLoader};
/// use std::path::Path;
///
/// let imported = ObjLoader::load_from_file(Path::new("model.obj"), &ImportOptions::default())?;
/// println!("加载了 {} 个顶点", imported.mesh.vertex_count());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ObjLoader;

impl ObjLoader {
    fn load_text(text: &str, name: Option<String>, options: &ImportOptions) -> Result<Imported> {
        crate::import_debug!(bytes = text.len(), name = ?name, "开始解析 OBJ");

        let imported = obj::import(text, name, options);

        imported
            .mesh
            .validate()
            .map_err(MeshLoadError::ValidationError)?;

        crate::import_info!(
            vertices = imported.mesh.vertex_count(),
            triangles = imported.mesh.triangle_count(),
            skipped = imported.report.diagnostics.len(),
            "成功加载 OBJ"
        );

        Ok(imported)
    }
}

impl MeshLoader for ObjLoader {
    fn load_from_file(path: &Path, options: &ImportOptions) -> Result<Imported> {
        if !path.exists() {
            return Err(MeshLoadError::FileNotFound(path.to_path_buf()).into());
        }

        // 文件句柄只在 read 内部存在，任何返回路径都会释放
        let bytes = std::fs::read(path).map_err(|e| MeshLoadError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string);

        let text = String::from_utf8_lossy(&bytes);
        Self::load_text(&text, name, options)
    }

    fn load_from_memory(data: &[u8], options: &ImportOptions) -> Result<Imported> {
        let text = String::from_utf8_lossy(data);
        Self::load_text(&text, None, options)
    }

    fn supported_extensions() -> &'static [&'static str] {
        &["obj"]
    }
}
