//! 法线生成
//!
//! 从三角形面计算面积加权的顶点法线。
//!
//! # 算法
//!
//! 1. 对于每个三角形 (a, b, c)：
//!    - 面法线 `n = cross(b - a, c - a)`，不做归一化，
//!      其长度是三角形面积的两倍，因此大三角形的贡献更大
//!    - 将 `n` 累加到 a、b、c 三个顶点
//! 2. 归一化每个顶点的累加结果；累加为零的顶点（孤立点或只属于退化三角形）
//!    使用默认的向上方向

use crate::core::math::{self, constants, Vector3};

/// 累加每个顶点的面积加权面法线
///
/// 越界的索引会被忽略。
fn accumulate(positions: &[[f32; 3]], indices: &[u32]) -> Vec<Vector3> {
    let mut sums = vec![Vector3::zeros(); positions.len()];

    for triangle in indices.chunks_exact(3) {
        let i0 = triangle[0] as usize;
        let i1 = triangle[1] as usize;
        let i2 = triangle[2] as usize;

        if i0 >= positions.len() || i1 >= positions.len() || i2 >= positions.len() {
            continue;
        }

        let p0 = math::vec3(positions[i0]);
        let p1 = math::vec3(positions[i1]);
        let p2 = math::vec3(positions[i2]);

        let face_normal = (p1 - p0).cross(&(p2 - p0));

        sums[i0] += face_normal;
        sums[i1] += face_normal;
        sums[i2] += face_normal;
    }

    sums
}

/// 为所有顶点计算法线
///
/// # 参数
///
/// - `positions`: 顶点位置
/// - `indices`: 三角形索引（每 3 个一组）
///
/// # 返回
///
/// 与 `positions` 等长的单位法线数组
pub fn compute_vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    accumulate(positions, indices)
        .into_iter()
        .map(|sum| math::normalize_or(sum, constants::UP))
        .collect()
}

/// 只为待定的顶点补全法线，其余顶点保持原值
///
/// 用于文件提供了部分法线、但某些角点省略了法线索引的情况。
pub fn fill_pending_normals(
    positions: &[[f32; 3]],
    indices: &[u32],
    normals: &mut [[f32; 3]],
    pending: &[bool],
) {
    if !pending.iter().any(|&p| p) {
        return;
    }

    let sums = accumulate(positions, indices);
    for ((normal, &is_pending), sum) in normals.iter_mut().zip(pending).zip(sums) {
        if is_pending {
            *normal = math::normalize_or(sum, constants::UP);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn length(n: [f32; 3]) -> f32 {
        (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt()
    }

    #[test]
    fn test_single_triangle_normal() {
        // XY 平面上逆时针的三角形，法线指向 +Z
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);

        for n in &normals {
            assert_relative_eq!(n[0], 0.0);
            assert_relative_eq!(n[1], 0.0);
            assert_relative_eq!(n[2], 1.0);
        }
    }

    #[test]
    fn test_area_weighting() {
        // 共享顶点 0 的两个三角形：一个大的朝 +Z，一个小的朝 +X
        let positions = [
            [0.0, 0.0, 0.0],
            [4.0, 0.0, 0.0],
            [0.0, 4.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ];
        let indices = [0, 1, 2, 0, 3, 4];
        let normals = compute_vertex_normals(&positions, &indices);

        // 大三角形面积是小三角形的 16 倍
        let n = normals[0];
        assert!(n[2] > n[0] * 10.0, "法线应偏向大三角形: {:?}", n);
        assert_relative_eq!(length(n), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_isolated_vertex_gets_up() {
        let positions = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [5.0, 5.0, 5.0],
        ];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals[3], constants::UP);
    }

    #[test]
    fn test_degenerate_triangle_gets_up() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
        assert!(normals.iter().all(|n| *n == constants::UP));
    }

    #[test]
    fn test_fill_only_pending() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let mut normals = [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]];
        fill_pending_normals(&positions, &[0, 1, 2], &mut normals, &[false, true, true]);

        assert_eq!(normals[0], [1.0, 0.0, 0.0]);
        assert_relative_eq!(normals[1][2], 1.0);
        assert_relative_eq!(normals[2][2], 1.0);
    }

    #[test]
    fn test_tiny_triangle_keeps_direction() {
        // 面积约 1e-7，远小于任何固定阈值
        let positions = [[0.0, 0.0, 0.0], [0.0005, 0.0, 0.0], [0.0, 0.0005, 0.0]];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);

        for n in &normals {
            assert_eq!(*n, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_huge_triangle_stays_unit_length() {
        let positions = [[0.0, 0.0, 0.0], [1e15, 0.0, 0.0], [0.0, 0.0, 1e15]];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);

        for n in &normals {
            assert_relative_eq!(length(*n), 1.0, epsilon = 1e-4);
            assert_relative_eq!(n[1], -1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_out_of_range_triangle_ignored() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
        let normals = compute_vertex_normals(&positions, &[0, 1, 9]);
        assert_eq!(normals.len(), 2);
        assert!(normals.iter().all(|n| *n == constants::UP));
    }
}
