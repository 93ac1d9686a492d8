/// 网格数据结构模块
///
/// 定义CPU侧的网格数据容器：去重后的顶点属性并行数组、三角形索引以及包围盒。
/// 渲染端只通过只读访问器读取数据，GPU资源的生命周期不在本模块管理。

use std::path::Path;

use super::bounds::Aabb;
use super::loaders::{self, ImportOptions, ImportReport, Imported};
use super::normals::compute_vertex_normals;
use super::vertex::Vertex;
use crate::core::error::{Result, TriMeshError};
use crate::core::math::Vector3;

/// 未指定顶点颜色时使用的中间灰
pub const DEFAULT_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

/// CPU侧网格数据
///
/// 所有顶点属性以并行数组存储，下标即顶点 id。
///
/// # 不变量
///
/// - `indices.len() % 3 == 0`
/// - 所有索引 `< vertices.len()`
/// - `normals` 为空或与 `vertices` 等长（`colors`、`texcoords` 同理）
/// - 每个顶点都在包围盒内
///
/// # 示例
///
/// ```rust
/// use tri_mesh::geometry::mesh::MeshData;
///
/// let imported = MeshData::from_obj_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
/// let mesh = imported.mesh;
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.indices(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct MeshData {
    name: Option<String>,
    vertices: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
    texcoords: Vec<[f32; 2]>,
    indices: Vec<u32>,
    bbox: Aabb,
    default_color: [f32; 3],
}

impl MeshData {
    /// 创建一个空的网格数据
    pub fn new() -> Self {
        Self {
            name: None,
            vertices: Vec::new(),
            normals: Vec::new(),
            colors: Vec::new(),
            texcoords: Vec::new(),
            indices: Vec::new(),
            bbox: Aabb::default(),
            default_color: DEFAULT_COLOR,
        }
    }

    /// 创建一个指定名称的空网格数据
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    /// 由组装完成的数组构建网格，并计算包围盒
    pub(crate) fn from_parts(
        name: Option<String>,
        vertices: Vec<[f32; 3]>,
        normals: Vec<[f32; 3]>,
        colors: Vec<[f32; 3]>,
        texcoords: Vec<[f32; 2]>,
        indices: Vec<u32>,
        default_color: [f32; 3],
    ) -> Self {
        let mut mesh = Self {
            name,
            vertices,
            normals,
            colors,
            texcoords,
            indices,
            bbox: Aabb::default(),
            default_color,
        };
        mesh.compute_aabb();
        mesh
    }

    /// 用默认选项解析内存中的 OBJ 文本
    pub fn from_obj_str(text: &str) -> Imported {
        super::obj::import(text, None, &ImportOptions::default())
    }

    /// 读取模型文件，使用默认导入选项
    ///
    /// 成功时用新网格替换当前内容并返回导入报告；
    /// 失败时（格式不支持、文件缺失、无法读取）当前内容保持不变。
    pub fn read_file(&mut self, path: impl AsRef<Path>) -> Result<ImportReport> {
        self.read_file_with(path, &ImportOptions::default())
    }

    /// 读取模型文件，使用指定的导入选项
    pub fn read_file_with(
        &mut self,
        path: impl AsRef<Path>,
        options: &ImportOptions,
    ) -> Result<ImportReport> {
        let Imported { mesh, report } = loaders::load_mesh(path.as_ref(), options)?;
        *self = mesh;
        Ok(report)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// 顶点位置（按组装顺序）
    #[inline]
    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    #[inline]
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// 顶点颜色，没有任何顶点指定颜色时为空
    #[inline]
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// 纹理坐标，没有任何角点引用纹理坐标时为空
    #[inline]
    pub fn texcoords(&self) -> &[[f32; 2]] {
        &self.texcoords
    }

    /// 三角形索引（每3个一组，保持文件中的绕序）
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn bbox_min(&self) -> Vector3 {
        self.bbox.min
    }

    pub fn bbox_max(&self) -> Vector3 {
        self.bbox.max
    }

    pub fn aabb(&self) -> &Aabb {
        &self.bbox
    }

    /// 网格至少有一个顶点，包围盒有意义
    ///
    /// 空网格的包围盒为零值，相机放置等逻辑需要先检查此项。
    pub fn has_bounds(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// 获取顶点数量
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取索引数量
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// 获取三角形数量
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    pub fn has_texcoords(&self) -> bool {
        !self.texcoords.is_empty()
    }

    pub fn default_color(&self) -> [f32; 3] {
        self.default_color
    }

    /// 从当前顶点重新计算包围盒
    pub fn compute_aabb(&mut self) {
        self.bbox = Aabb::from_points(&self.vertices);
    }

    /// 从当前顶点和索引重新计算面积加权法线，覆盖已有法线
    pub fn compute_normals(&mut self) {
        self.normals = compute_vertex_normals(&self.vertices, &self.indices);
    }

    /// 替换顶点颜色
    ///
    /// 颜色数量必须与顶点数量一致；传入空数组表示清除颜色。
    pub fn set_colors(&mut self, colors: Vec<[f32; 3]>) -> Result<()> {
        if !colors.is_empty() && colors.len() != self.vertices.len() {
            return Err(TriMeshError::AttributeMismatch {
                attribute: "colors",
                expected: self.vertices.len(),
                found: colors.len(),
            });
        }
        self.colors = colors;
        Ok(())
    }

    /// 打包为交错顶点数组
    ///
    /// 缺失的属性用默认值填充：法线为零向量，纹理坐标为 (0, 0)，颜色为默认颜色。
    pub fn interleaved(&self) -> Vec<Vertex> {
        (0..self.vertices.len())
            .map(|i| {
                Vertex::new(
                    self.vertices[i],
                    self.normals.get(i).copied().unwrap_or_default(),
                    self.texcoords.get(i).copied().unwrap_or_default(),
                    self.colors.get(i).copied().unwrap_or(self.default_color),
                )
            })
            .collect()
    }

    /// 索引缓冲区的字节视图
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// 位置缓冲区的字节视图
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// 验证网格数据的有效性
    ///
    /// 检查：
    /// - 索引数量是3的倍数
    /// - 所有索引都在有效范围内
    /// - 可选属性数组为空或与顶点等长
    /// - 所有顶点都在包围盒内
    ///
    /// # 返回
    ///
    /// - `Ok(())`: 数据有效
    /// - `Err(String)`: 数据无效，返回错误描述
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.indices.len() % 3 != 0 {
            return Err(format!(
                "index count must be a multiple of 3, got {}",
                self.indices.len()
            ));
        }

        let vertex_count = self.vertices.len();
        if let Some(i) = self
            .indices
            .iter()
            .position(|&index| index as usize >= vertex_count)
        {
            return Err(format!(
                "index {} at position {} is out of range (vertex count {})",
                self.indices[i], i, vertex_count
            ));
        }

        let lengths = [
            ("normals", self.normals.len()),
            ("colors", self.colors.len()),
            ("texcoords", self.texcoords.len()),
        ];
        for (attribute, len) in lengths {
            if len != 0 && len != vertex_count {
                return Err(format!(
                    "{} has {} entries, expected 0 or {}",
                    attribute, len, vertex_count
                ));
            }
        }

        if let Some(v) = self.vertices.iter().find(|v| !self.bbox.contains(**v)) {
            return Err(format!("vertex {:?} lies outside the bounding box", v));
        }

        Ok(())
    }

    /// 清空所有数据
    pub fn clear(&mut self) {
        self.name = None;
        self.vertices.clear();
        self.normals.clear();
        self.colors.clear();
        self.texcoords.clear();
        self.indices.clear();
        self.bbox = Aabb::default();
    }
}

impl Default for MeshData {
    fn default() -> Self {
        Self::new()
    }
}
