/// 模型加载器模块
///
/// 提供统一的模型加载接口和各种格式的具体实现。
///
/// # 支持的格式
///
/// - **OBJ**: Wavefront OBJ 格式的几何子集（`v`/`vn`/`vt`/`f`）
///
/// # 使用示例
///
/// ```rust,no_run
/// use tri_mesh::geometry::loaders::{load_mesh, ImportOptions};
/// use std::path::Path;
///
/// let imported = load_mesh(Path::new("model.obj"), &ImportOptions::default())?;
/// println!("{} 个顶点", imported.mesh.vertex_count());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
use crate::core::config::ImportConfig;
use crate::core::error::{MeshLoadError, ParseDiagnostic, Result};
use crate::geometry::mesh::{MeshData, DEFAULT_COLOR};
use std::path::Path;

pub mod obj_loader;

// 重新导出加载器
pub use obj_loader::ObjLoader;

/// 导入选项
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImportOptions {
    /// 是否翻转纹理坐标的 V 轴
    pub flip_texcoord_v: bool,

    /// 文件缺少法线时是否生成面积加权法线
    pub synthesize_normals: bool,

    /// 未指定颜色时使用的顶点颜色
    pub default_color: [f32; 3],
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            flip_texcoord_v: false,
            synthesize_normals: true,
            default_color: DEFAULT_COLOR,
        }
    }
}

impl From<&ImportConfig> for ImportOptions {
    fn from(config: &ImportConfig) -> Self {
        Self {
            flip_texcoord_v: config.flip_texcoord_v,
            synthesize_normals: config.synthesize_normals,
            default_color: config.default_color,
        }
    }
}

/// 导入过程的统计与诊断
///
/// 导入成功时随网格一起返回。`diagnostics` 非空表示部分记录被跳过，
/// 但网格本身仍然是一致的。
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// 被跳过的记录
    pub diagnostics: Vec<ParseDiagnostic>,

    /// 成功导入的面记录数量
    pub faces: usize,

    /// 三角化后的三角形数量
    pub triangles: usize,

    /// 不支持而被忽略的记录数量（`o`、`g`、`usemtl` 等）
    pub ignored_records: usize,

    /// 是否生成了法线
    pub normals_synthesized: bool,
}

impl ImportReport {
    /// 没有任何记录被跳过
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// 加载结果：网格与导入报告
#[derive(Debug, Clone)]
pub struct Imported {
    pub mesh: MeshData,
    pub report: ImportReport,
}

/// 网格加载器 trait
///
/// 所有格式的加载器都实现此 trait。
///
/// # 实现要求
///
/// - 加载器是无状态的（使用关联函数）
/// - 返回 CPU 侧的 `MeshData`，不涉及 GPU 资源
/// - 文件级错误返回 `Err`，记录级错误放入 `ImportReport`
pub trait MeshLoader {
    /// 从文件路径加载网格
    ///
    /// # 错误
    ///
    /// - 文件不存在或无法读取
    /// - 组装结果未通过校验
    fn load_from_file(path: &Path, options: &ImportOptions) -> Result<Imported>;

    /// 从内存数据加载网格
    fn load_from_memory(data: &[u8], options: &ImportOptions) -> Result<Imported>;

    /// 支持的文件扩展名列表（小写，不含点号）
    fn supported_extensions() -> &'static [&'static str];
}

/// 取小写扩展名
fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// 是否有加载器支持该文件
pub fn is_supported(path: &Path) -> bool {
    extension_of(path)
        .map(|ext| ObjLoader::supported_extensions().contains(&ext.as_str()))
        .unwrap_or(false)
}

/// 根据文件扩展名选择合适的加载器
///
/// 扩展名不受支持时立即返回 `UnsupportedFormat`，不会访问文件。
pub fn load_mesh(path: &Path, options: &ImportOptions) -> Result<Imported> {
    let extension = extension_of(path).ok_or_else(|| {
        MeshLoadError::UnsupportedFormat(format!(
            "cannot determine file extension of '{}'",
            path.display()
        ))
    })?;

    if ObjLoader::supported_extensions().contains(&extension.as_str()) {
        ObjLoader::load_from_file(path, options)
    } else {
        Err(MeshLoadError::UnsupportedFormat(format!(".{}", extension)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TriMeshError;

    #[test]
    fn test_supported_extensions() {
        assert!(ObjLoader::supported_extensions().contains(&"obj"));
        assert!(is_supported(Path::new("model.obj")));
        assert!(is_supported(Path::new("MODEL.OBJ")));
        assert!(!is_supported(Path::new("model.stl")));
        assert!(!is_supported(Path::new("model")));
    }

    #[test]
    fn test_unsupported_extension_fails_fast() {
        // 文件不存在也应先报告格式错误
        let result = load_mesh(Path::new("does/not/exist/mesh.stl"), &ImportOptions::default());
        assert!(matches!(result, Err(ref e) if e.is_unsupported_format()));
    }

    #[test]
    fn test_missing_extension() {
        let result = load_mesh(Path::new("mesh"), &ImportOptions::default());
        assert!(matches!(
            result,
            Err(TriMeshError::MeshLoading(MeshLoadError::UnsupportedFormat(_)))
        ));
    }

    #[test]
    fn test_options_from_config() {
        let config = ImportConfig {
            flip_texcoord_v: true,
            synthesize_normals: false,
            default_color: [0.1, 0.2, 0.3],
        };
        let options = ImportOptions::from(&config);
        assert!(options.flip_texcoord_v);
        assert!(!options.synthesize_normals);
        assert_eq!(options.default_color, [0.1, 0.2, 0.3]);
    }
}
