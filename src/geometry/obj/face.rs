//! 面记录解析与三角化
//!
//! 每个角点写作 `p`、`p/t`、`p//n` 或 `p/t/n`。
//! n 边形按扇形拆分为 n-2 个三角形：第 k 个三角形由角点 (0, k+1, k+2) 组成。
//! 对于非凸或非平面的多边形，扇形三角化只是近似结果。

use super::attributes::{Attribute, RawAttributeStore};
use crate::core::error::RecordError;

/// 角点键：(位置, 法线, 纹理坐标) 索引三元组
///
/// 法线和纹理坐标缺省时为 `None`。`None` 与任何具体索引都不相等，
/// 因此缺省的槽位不会与带有该属性的角点合并。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerKey {
    pub position: usize,
    pub normal: Option<usize>,
    pub uv: Option<usize>,
}

impl CornerKey {
    pub fn new(position: usize, normal: Option<usize>, uv: Option<usize>) -> Self {
        Self { position, normal, uv }
    }
}

/// 解析单个角点参数
pub fn parse_corner(token: &str, store: &RawAttributeStore) -> Result<CornerKey, RecordError> {
    let mut parts = token.split('/');

    let position = match parts.next() {
        Some(p) if !p.is_empty() => store.resolve(Attribute::Position, p)?,
        _ => return Err(RecordError::InvalidIndex(token.to_string())),
    };

    let uv = match parts.next() {
        Some(t) if !t.is_empty() => Some(store.resolve(Attribute::TexCoord, t)?),
        _ => None,
    };

    let normal = match parts.next() {
        Some(n) if !n.is_empty() => Some(store.resolve(Attribute::Normal, n)?),
        _ => None,
    };

    if parts.next().is_some() {
        return Err(RecordError::InvalidIndex(token.to_string()));
    }

    Ok(CornerKey::new(position, normal, uv))
}

/// 解析整个面记录
///
/// 任意一个角点无效时整个面都被跳过，避免产生半个多边形。
pub fn parse_face(tokens: &[&str], store: &RawAttributeStore) -> Result<Vec<CornerKey>, RecordError> {
    if tokens.len() < 3 {
        return Err(RecordError::TooFewCorners(tokens.len()));
    }

    tokens.iter().map(|token| parse_corner(token, store)).collect()
}

/// n 边形扇形三角化后的角点下标
pub fn fan_triangles(corner_count: usize) -> impl Iterator<Item = [usize; 3]> {
    (0..corner_count.saturating_sub(2)).map(|k| [0, k + 1, k + 2])
}
