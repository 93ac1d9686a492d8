//! 原始属性累加器
//!
//! 按文件顺序收集 `v`、`vn`、`vt` 声明的原始数据，只追加不修改。
//! 面记录中的索引在这里从 OBJ 的 1 基（可为负）转换为内部的 0 基索引。

use crate::core::error::RecordError;
use crate::core::math::{self, constants};

/// 文件中声明的原始属性
#[derive(Debug, Default, Clone)]
pub struct RawAttributeStore {
    /// 顶点位置
    pub positions: Vec<[f32; 3]>,

    /// 与 `positions` 一一对应的顶点颜色（`v x y z r g b` 扩展）
    pub colors: Vec<Option<[f32; 3]>>,

    /// 法线，读取时已归一化
    pub normals: Vec<[f32; 3]>,

    /// 纹理坐标
    pub uvs: Vec<[f32; 2]>,
}

/// 索引指向的属性类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Position,
    Normal,
    TexCoord,
}

impl Attribute {
    fn name(self) -> &'static str {
        match self {
            Attribute::Position => "position",
            Attribute::Normal => "normal",
            Attribute::TexCoord => "texcoord",
        }
    }
}

impl RawAttributeStore {
    /// `v x y z [w]` 或 `v x y z r g b`
    pub fn push_position(&mut self, tokens: &[&str]) -> Result<(), RecordError> {
        let values = parse_floats(tokens, 3)?;
        self.positions.push([values[0], values[1], values[2]]);

        let color = if values.len() >= 6 {
            Some([values[3], values[4], values[5]])
        } else {
            None
        };
        self.colors.push(color);
        Ok(())
    }

    /// `vn x y z`，文件中的法线不一定是单位长度，这里统一归一化
    pub fn push_normal(&mut self, tokens: &[&str]) -> Result<(), RecordError> {
        let values = parse_floats(tokens, 3)?;
        let normal = math::normalize_or(
            math::vec3([values[0], values[1], values[2]]),
            constants::UP,
        );
        self.normals.push(normal);
        Ok(())
    }

    /// `vt u [v] [w]`，缺省的 v 取 0，w 被忽略
    pub fn push_texcoord(&mut self, tokens: &[&str], flip_v: bool) -> Result<(), RecordError> {
        let values = parse_floats(tokens, 1)?;
        let u = values[0];
        let v = values.get(1).copied().unwrap_or(0.0);
        self.uvs.push([u, if flip_v { 1.0 - v } else { v }]);
        Ok(())
    }

    /// 当前已声明的某类属性数量
    pub fn len_of(&self, attribute: Attribute) -> usize {
        match attribute {
            Attribute::Position => self.positions.len(),
            Attribute::Normal => self.normals.len(),
            Attribute::TexCoord => self.uvs.len(),
        }
    }

    /// 解析一个面索引参数并转换为 0 基索引
    ///
    /// 正数是从 1 开始的绝对索引，负数相对于当前列表末尾（`-1` 为最后一个）。
    /// 负索引总是以解析到该面时的列表长度为准。
    pub fn resolve(&self, attribute: Attribute, token: &str) -> Result<usize, RecordError> {
        let raw: i64 = token
            .parse()
            .map_err(|_| RecordError::InvalidIndex(token.to_string()))?;
        let len = self.len_of(attribute);

        let resolved = match raw {
            0 => return Err(RecordError::ZeroIndex),
            r if r > 0 => r - 1,
            r => len as i64 + r,
        };

        if resolved < 0 || resolved >= len as i64 {
            return Err(RecordError::DanglingIndex {
                attribute: attribute.name(),
                index: raw,
                available: len,
            });
        }

        Ok(resolved as usize)
    }
}

/// 解析至少 `min` 个浮点数
fn parse_floats(tokens: &[&str], min: usize) -> Result<Vec<f32>, RecordError> {
    if tokens.len() < min {
        return Err(RecordError::MissingToken {
            expected: min,
            found: tokens.len(),
        });
    }

    tokens
        .iter()
        .map(|token| {
            token
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| RecordError::InvalidNumber(token.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_position() {
        let mut store = RawAttributeStore::default();
        store.push_position(&["1", "2.5", "-3"]).unwrap();
        store.push_position(&["0", "0", "0", "1.0"]).unwrap();

        assert_eq!(store.positions, vec![[1.0, 2.5, -3.0], [0.0, 0.0, 0.0]]);
        assert_eq!(store.colors, vec![None, None]);
    }

    #[test]
    fn test_push_position_with_color() {
        let mut store = RawAttributeStore::default();
        store.push_position(&["1", "2", "3", "1", "0", "0"]).unwrap();
        assert_eq!(store.colors[0], Some([1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_malformed_position() {
        let mut store = RawAttributeStore::default();
        assert_eq!(
            store.push_position(&["1", "x", "3"]),
            Err(RecordError::InvalidNumber("x".to_string()))
        );
        assert_eq!(
            store.push_position(&["1", "2"]),
            Err(RecordError::MissingToken { expected: 3, found: 2 })
        );
        assert!(store.push_position(&["1", "2", "nan"]).is_err());
        assert!(store.positions.is_empty());
        assert!(store.colors.is_empty());
    }

    #[test]
    fn test_normals_are_normalized() {
        let mut store = RawAttributeStore::default();
        store.push_normal(&["0", "0", "5"]).unwrap();
        store.push_normal(&["0", "0", "0"]).unwrap();

        assert_eq!(store.normals[0], [0.0, 0.0, 1.0]);
        assert_eq!(store.normals[1], constants::UP);
    }

    #[test]
    fn test_normals_normalized_at_any_scale() {
        let mut store = RawAttributeStore::default();
        store.push_normal(&["0", "0", "1e-7"]).unwrap();
        store.push_normal(&["0", "0", "1e20"]).unwrap();
        store.push_normal(&["3e-25", "0", "-4e-25"]).unwrap();

        assert_eq!(store.normals[0], [0.0, 0.0, 1.0]);
        assert_eq!(store.normals[1], [0.0, 0.0, 1.0]);
        assert!((store.normals[2][0] - 0.6).abs() < 1e-6);
        assert!((store.normals[2][2] + 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_texcoord_defaults_and_flip() {
        let mut store = RawAttributeStore::default();
        store.push_texcoord(&["0.25"], false).unwrap();
        store.push_texcoord(&["0.5", "0.25", "0.0"], true).unwrap();

        assert_eq!(store.uvs[0], [0.25, 0.0]);
        assert_eq!(store.uvs[1], [0.5, 0.75]);
    }

    #[test]
    fn test_resolve_positive_and_negative() {
        let mut store = RawAttributeStore::default();
        for i in 0..4 {
            let x = i.to_string();
            store.push_position(&[x.as_str(), "0", "0"]).unwrap();
        }

        assert_eq!(store.resolve(Attribute::Position, "1"), Ok(0));
        assert_eq!(store.resolve(Attribute::Position, "4"), Ok(3));
        assert_eq!(store.resolve(Attribute::Position, "-1"), Ok(3));
        assert_eq!(store.resolve(Attribute::Position, "-4"), Ok(0));
    }

    #[test]
    fn test_resolve_errors() {
        let mut store = RawAttributeStore::default();
        store.push_position(&["0", "0", "0"]).unwrap();

        assert_eq!(store.resolve(Attribute::Position, "0"), Err(RecordError::ZeroIndex));
        assert_eq!(
            store.resolve(Attribute::Position, "2"),
            Err(RecordError::DanglingIndex { attribute: "position", index: 2, available: 1 })
        );
        assert!(matches!(
            store.resolve(Attribute::Position, "-2"),
            Err(RecordError::DanglingIndex { .. })
        ));
        assert!(matches!(
            store.resolve(Attribute::Normal, "1"),
            Err(RecordError::DanglingIndex { attribute: "normal", .. })
        ));
        assert_eq!(
            store.resolve(Attribute::Position, "1.5"),
            Err(RecordError::InvalidIndex("1.5".to_string()))
        );
    }
}
