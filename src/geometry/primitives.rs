//! 内置几何体
//!
//! 模型导入失败时，检查工具输出占位立方体的摘要。

use super::mesh::{MeshData, DEFAULT_COLOR};
use crate::core::math::{self, constants::UP};

impl MeshData {
    /// 以原点为中心、边长为 1 的立方体
    ///
    /// 8 个共享顶点，法线沿对角线方向（平滑着色），12 个三角形。
    pub fn unit_cube() -> Self {
        const H: f32 = 0.5;
        let vertices = vec![
            [-H, H, -H],
            [-H, -H, -H],
            [H, -H, -H],
            [H, H, -H],
            [-H, H, H],
            [-H, -H, H],
            [H, -H, H],
            [H, H, H],
        ];

        let normals = vertices
            .iter()
            .map(|&v| math::normalize_or(math::vec3(v), UP))
            .collect();

        #[rustfmt::skip]
        let indices = vec![
            2, 1, 0, 0, 3, 2, // -z
            5, 6, 7, 7, 4, 5, // +z
            1, 5, 4, 4, 0, 1, // -x
            6, 2, 3, 3, 7, 6, // +x
            3, 0, 4, 4, 7, 3, // +y
            6, 5, 1, 1, 2, 6, // -y
        ];

        Self::from_parts(
            Some("unit_cube".to_string()),
            vertices,
            normals,
            Vec::new(),
            Vec::new(),
            indices,
            DEFAULT_COLOR,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vector3;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_cube_counts() {
        let cube = MeshData::unit_cube();

        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.normals().len(), 8);
        assert!(cube.validate().is_ok());
    }

    #[test]
    fn test_unit_cube_bounds() {
        let cube = MeshData::unit_cube();

        assert_eq!(cube.bbox_min(), Vector3::new(-0.5, -0.5, -0.5));
        assert_eq!(cube.bbox_max(), Vector3::new(0.5, 0.5, 0.5));
        assert_eq!(cube.aabb().center(), Vector3::zeros());
        assert_relative_eq!(cube.aabb().radius(), 3.0_f32.sqrt() * 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_unit_cube_normals_point_outward() {
        let cube = MeshData::unit_cube();
        for (v, n) in cube.vertices().iter().zip(cube.normals()) {
            let dot = v[0] * n[0] + v[1] * n[1] + v[2] * n[2];
            assert!(dot > 0.0);
            assert_relative_eq!(math::vec3(*n).norm(), 1.0, epsilon = 1e-6);
        }
    }
}
