/// 交错顶点定义模块
///
/// 为需要单一顶点缓冲区的渲染后端提供交错布局。
/// `MeshData` 内部使用并行数组存储，`MeshData::interleaved()` 将其打包为本结构。

use bytemuck::{Pod, Zeroable};

/// 交错顶点结构
///
/// 内存布局与GPU兼容，使用 `#[repr(C)]` 保证顺序和对齐。
///
/// # 内存布局
///
/// - position: 12 bytes (3 * f32)
/// - normal: 12 bytes (3 * f32)
/// - texcoord: 8 bytes (2 * f32)
/// - color: 12 bytes (3 * f32)
/// - **总计**: 44 bytes
#[repr(C)]
#[derive(Default, Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// 顶点位置 (x, y, z)
    pub position: [f32; 3],

    /// 法线向量 (nx, ny, nz)，单位长度
    pub normal: [f32; 3],

    /// 纹理坐标 (u, v)
    pub texcoord: [f32; 2],

    /// 顶点颜色 (r, g, b)
    pub color: [f32; 3],
}

impl Vertex {
    /// 创建一个新的顶点
    #[inline]
    pub fn new(
        position: [f32; 3],
        normal: [f32; 3],
        texcoord: [f32; 2],
        color: [f32; 3],
    ) -> Self {
        Self {
            position,
            normal,
            texcoord,
            color,
        }
    }
}
