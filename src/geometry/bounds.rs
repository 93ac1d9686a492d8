//! 轴对齐包围盒
//!
//! 一次线性遍历得到所有顶点的最小/最大角点。

use crate::core::math::{self, Vector3};

/// 轴对齐包围盒（AABB）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vector3,
    pub max: Vector3,
}

impl Default for Aabb {
    /// 零值包围盒，表示"没有包围盒"
    fn default() -> Self {
        Self {
            min: Vector3::zeros(),
            max: Vector3::zeros(),
        }
    }
}

impl Aabb {
    /// 以第一个点初始化，再对其余点逐分量取 min/max
    ///
    /// 没有点时返回零值包围盒。
    pub fn from_points(points: &[[f32; 3]]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::default();
        };

        let start = math::vec3(*first);
        let (min, max) = rest.iter().fold((start, start), |(min, max), p| {
            let p = math::vec3(*p);
            (min.inf(&p), max.sup(&p))
        });

        Self { min, max }
    }

    /// 包围盒中心
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    /// 包围球半径（对角线长度的一半）
    ///
    /// 零值包围盒和单点网格返回 0，调用方据此放置相机前需要自行判断。
    pub fn radius(&self) -> f32 {
        (self.max - self.min).norm() * 0.5
    }

    /// 各轴方向的尺寸
    pub fn extent(&self) -> Vector3 {
        self.max - self.min
    }

    /// min 与 max 重合（空网格或单点）
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// 点是否在包围盒内（含边界）
    pub fn contains(&self, point: [f32; 3]) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }
}
