//! 数学类型模块
//!
//! 基于 `nalgebra` 提供网格处理所需的向量类型。
//! 存储数组使用原始的 `[f32; N]`（便于 bytemuck 直接转换为字节），
//! 计算时通过本模块的转换函数进入 nalgebra 类型。

pub use nalgebra::Vector3 as Vec3;

// 类型别名，使用更简洁的名称
pub type Vector3 = Vec3<f32>;

/// 数学常量
pub mod constants {
    /// 默认的向上方向，用于无法确定法线的顶点
    pub const UP: [f32; 3] = [0.0, 1.0, 0.0];
}

/// 数组转 nalgebra 向量
#[inline]
pub fn vec3(v: [f32; 3]) -> Vector3 {
    Vector3::new(v[0], v[1], v[2])
}

/// nalgebra 向量转数组
#[inline]
pub fn to_array(v: &Vector3) -> [f32; 3] {
    [v.x, v.y, v.z]
}

/// 归一化，零向量或含非有限分量时返回 `fallback`
///
/// 先除以最大绝对分量再归一化，极小或极大的向量都不会在求模时下溢或溢出。
#[inline]
pub fn normalize_or(v: Vector3, fallback: [f32; 3]) -> [f32; 3] {
    let scale = v.amax();
    if !scale.is_finite() || scale == 0.0 {
        return fallback;
    }

    let n = (v / scale).normalize();
    if n.iter().all(|c| c.is_finite()) {
        to_array(&n)
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_or() {
        let n = normalize_or(Vector3::new(3.0, 4.0, 0.0), constants::UP);
        assert!((n[0] - 0.6).abs() < 1e-6);
        assert!((n[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_falls_back() {
        let n = normalize_or(Vector3::zeros(), constants::UP);
        assert_eq!(n, constants::UP);
    }

    #[test]
    fn test_normalize_tiny_vector() {
        let n = normalize_or(Vector3::new(0.0, 0.0, 1e-7), constants::UP);
        assert_eq!(n, [0.0, 0.0, 1.0]);

        let n = normalize_or(Vector3::new(3e-30, 4e-30, 0.0), constants::UP);
        assert!((n[0] - 0.6).abs() < 1e-6);
        assert!((n[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_huge_vector() {
        let n = normalize_or(Vector3::new(0.0, 0.0, 1e20), constants::UP);
        assert_eq!(n, [0.0, 0.0, 1.0]);

        let n = normalize_or(Vector3::new(3e30, -4e30, 0.0), constants::UP);
        assert!((n[0] - 0.6).abs() < 1e-6);
        assert!((n[1] + 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_non_finite_falls_back() {
        let n = normalize_or(Vector3::new(f32::INFINITY, 0.0, 0.0), constants::UP);
        assert_eq!(n, constants::UP);
        let n = normalize_or(Vector3::new(f32::NAN, 1.0, 0.0), constants::UP);
        assert_eq!(n, constants::UP);
    }

    #[test]
    fn test_round_trip() {
        let v = [1.0, -2.0, 3.5];
        assert_eq!(to_array(&vec3(v)), v);
    }
}
