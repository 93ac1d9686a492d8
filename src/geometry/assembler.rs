//! 网格组装器
//!
//! 持有导入过程中不断增长的输出数组。导入结束后 `finish` 消耗组装器，
//! 补全法线、计算包围盒并生成不可变的 `MeshData`。
//! 组装过程中的数组不会暴露给外部。

use super::mesh::MeshData;
use super::normals::{compute_vertex_normals, fill_pending_normals};
use crate::core::math::constants;

/// 法线的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalSource {
    /// 文件中有 `vn` 记录
    File,
    /// 文件中没有任何法线
    Missing,
}

/// 输出数组组装器
#[derive(Debug)]
pub struct MeshAssembler {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    normal_pending: Vec<bool>,
    colors: Vec<[f32; 3]>,
    texcoords: Vec<[f32; 2]>,
    indices: Vec<u32>,
    has_colors: bool,
    has_texcoords: bool,
    default_color: [f32; 3],
}

impl MeshAssembler {
    pub fn new(default_color: [f32; 3]) -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            normal_pending: Vec::new(),
            colors: Vec::new(),
            texcoords: Vec::new(),
            indices: Vec::new(),
            has_colors: false,
            has_texcoords: false,
            default_color,
        }
    }

    /// 已分配的顶点数量
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// 追加一个新顶点，返回其 id（即下一个顺序编号）
    ///
    /// 缺省的法线标记为待定，在 `finish` 中补全；
    /// 缺省的纹理坐标和颜色使用默认值填充。
    pub fn push_vertex(
        &mut self,
        position: [f32; 3],
        normal: Option<[f32; 3]>,
        texcoord: Option<[f32; 2]>,
        color: Option<[f32; 3]>,
    ) -> u32 {
        let id = self.positions.len() as u32;

        self.positions.push(position);
        self.normals.push(normal.unwrap_or([0.0, 0.0, 0.0]));
        self.normal_pending.push(normal.is_none());

        self.has_texcoords |= texcoord.is_some();
        self.texcoords.push(texcoord.unwrap_or([0.0, 0.0]));

        self.has_colors |= color.is_some();
        self.colors.push(color.unwrap_or(self.default_color));

        id
    }

    /// 追加一个三角形（保持文件中的绕序）
    #[inline]
    pub fn push_triangle(&mut self, triangle: [u32; 3]) {
        self.indices.extend_from_slice(&triangle);
    }

    /// 完成组装
    ///
    /// - 文件没有法线且允许生成：为所有顶点生成面积加权法线
    /// - 文件有法线：只为省略了法线索引的顶点补全（不允许生成时使用向上方向）
    /// - 文件没有法线且不允许生成：法线数组为空
    pub fn finish(self, name: Option<String>, source: NormalSource, synthesize: bool) -> MeshData {
        let normals = match (source, synthesize) {
            (NormalSource::Missing, true) => compute_vertex_normals(&self.positions, &self.indices),
            (NormalSource::Missing, false) => Vec::new(),
            (NormalSource::File, true) => {
                let mut normals = self.normals;
                fill_pending_normals(&self.positions, &self.indices, &mut normals, &self.normal_pending);
                normals
            }
            (NormalSource::File, false) => self
                .normals
                .into_iter()
                .zip(&self.normal_pending)
                .map(|(n, &pending)| if pending { constants::UP } else { n })
                .collect(),
        };

        let colors = if self.has_colors { self.colors } else { Vec::new() };
        let texcoords = if self.has_texcoords { self.texcoords } else { Vec::new() };

        MeshData::from_parts(
            name,
            self.positions,
            normals,
            colors,
            texcoords,
            self.indices,
            self.default_color,
        )
    }
}
