//! 顶点去重表
//!
//! 将每个角点键 (位置, 法线, 纹理坐标) 映射到唯一的输出顶点 id。
//! 同一个位置在不同面上使用不同的法线或纹理坐标时（UV 接缝、硬边），
//! 会被拆分为多个输出顶点；只按位置合并会在接缝处产生错误的光照。
//!
//! id 严格按照扫描面记录时角点首次出现的顺序分配，
//! 同一输入总是得到相同的输出缓冲区。

use std::collections::HashMap;

use super::assembler::MeshAssembler;
use super::obj::attributes::RawAttributeStore;
use super::obj::face::CornerKey;

/// 顶点去重表
#[derive(Debug, Default)]
pub struct VertexTable {
    ids: HashMap<CornerKey, u32>,
}

impl VertexTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已分配的唯一顶点数量
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// 查找已分配的 id，不分配新顶点
    pub fn get(&self, key: &CornerKey) -> Option<u32> {
        self.ids.get(key).copied()
    }

    /// 解析角点键
    ///
    /// 命中时直接返回已有 id；未命中时从 `store` 复制属性值追加到组装器，
    /// 新 id 为组装器中的下一个顺序编号。
    ///
    /// `key` 中的索引必须已由 `RawAttributeStore::resolve` 校验过。
    pub fn resolve(
        &mut self,
        key: CornerKey,
        store: &RawAttributeStore,
        assembler: &mut MeshAssembler,
    ) -> u32 {
        *self.ids.entry(key).or_insert_with(|| {
            assembler.push_vertex(
                store.positions[key.position],
                key.normal.map(|n| store.normals[n]),
                key.uv.map(|t| store.uvs[t]),
                store.colors[key.position],
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::mesh::DEFAULT_COLOR;

    fn store() -> RawAttributeStore {
        let mut store = RawAttributeStore::default();
        store.push_position(&["0", "0", "0"]).unwrap();
        store.push_position(&["1", "0", "0"]).unwrap();
        store.push_normal(&["0", "0", "1"]).unwrap();
        store.push_normal(&["0", "1", "0"]).unwrap();
        store.push_texcoord(&["0", "0"], false).unwrap();
        store
    }

    #[test]
    fn test_identical_keys_share_id() {
        let store = store();
        let mut assembler = MeshAssembler::new(DEFAULT_COLOR);
        let mut table = VertexTable::new();

        let key = CornerKey::new(0, Some(0), Some(0));
        let a = table.resolve(key, &store, &mut assembler);
        let b = table.resolve(key, &store, &mut assembler);

        assert_eq!(a, b);
        assert_eq!(assembler.vertex_count(), 1);
        assert_eq!(table.get(&key), Some(a));
    }

    #[test]
    fn test_seam_splits_same_position() {
        let store = store();
        let mut assembler = MeshAssembler::new(DEFAULT_COLOR);
        let mut table = VertexTable::new();

        let ids = [
            table.resolve(CornerKey::new(0, Some(0), None), &store, &mut assembler),
            table.resolve(CornerKey::new(0, Some(1), None), &store, &mut assembler),
            table.resolve(CornerKey::new(0, None, None), &store, &mut assembler),
            table.resolve(CornerKey::new(0, Some(0), Some(0)), &store, &mut assembler),
        ];

        assert_eq!(ids, [0, 1, 2, 3]);
        assert_eq!(table.len(), 4);
        assert_eq!(assembler.vertex_count(), 4);
    }

    #[test]
    fn test_first_encounter_order() {
        let store = store();
        let mut assembler = MeshAssembler::new(DEFAULT_COLOR);
        let mut table = VertexTable::new();

        let b = CornerKey::new(1, None, None);
        let a = CornerKey::new(0, None, None);

        assert_eq!(table.resolve(b, &store, &mut assembler), 0);
        assert_eq!(table.resolve(a, &store, &mut assembler), 1);
        assert_eq!(table.resolve(b, &store, &mut assembler), 0);
        assert!(table.get(&CornerKey::new(1, Some(0), None)).is_none());
    }
}
