/// OBJ 文本解析
///
/// 支持的 OBJ 子集：
///
/// | 关键字 | 参数 | 含义 |
/// |---|---|---|
/// | `v` | x y z [w \| r g b] | 顶点位置（可带顶点颜色） |
/// | `vn` | x y z | 法线（读取时重新归一化） |
/// | `vt` | u [v] [w] | 纹理坐标 |
/// | `f` | p[/t][/n] ... (n ≥ 3) | 面，索引从 1 开始，负数相对末尾 |
///
/// 其他关键字（`o`、`g`、`s`、`usemtl`、`mtllib` 等）被忽略。
///
/// # 流程
///
/// ```text
/// 文本
///   ↓ tokenizer::records
/// 记录 ──v/vn/vt──→ RawAttributeStore
///   │
///   └──f──→ face::parse_face → fan_triangles
///                ↓
///            VertexTable::resolve
///                ↓
///            MeshAssembler ──finish──→ MeshData
/// ```
pub mod tokenizer;
pub mod attributes;
pub mod face;

use crate::core::error::{ParseDiagnostic, RecordError};
use crate::geometry::assembler::{MeshAssembler, NormalSource};
use crate::geometry::dedup::VertexTable;
use crate::geometry::loaders::{ImportOptions, ImportReport, Imported};

use attributes::RawAttributeStore;
use tokenizer::{Keyword, Record};

/// 单遍导入 OBJ 文本
///
/// 记录级错误不会中止导入：出错的记录被跳过并记录到 `ImportReport::diagnostics`。
pub fn import(text: &str, name: Option<String>, options: &ImportOptions) -> Imported {
    let mut store = RawAttributeStore::default();
    let mut table = VertexTable::new();
    let mut assembler = MeshAssembler::new(options.default_color);
    let mut report = ImportReport::default();

    for record in tokenizer::records(text) {
        let Some(keyword) = Keyword::parse(record.keyword) else {
            report.ignored_records += 1;
            continue;
        };

        let outcome = match keyword {
            Keyword::Position => store.push_position(&record.tokens),
            Keyword::Normal => store.push_normal(&record.tokens),
            Keyword::TexCoord => store.push_texcoord(&record.tokens, options.flip_texcoord_v),
            Keyword::Face => import_face(&record, &store, &mut table, &mut assembler)
                .map(|triangles| {
                    report.faces += 1;
                    report.triangles += triangles;
                }),
        };

        if let Err(error) = outcome {
            crate::import_warn!(line = record.line, keyword = record.keyword, "跳过无效记录: {}", error);
            report.diagnostics.push(ParseDiagnostic {
                line: record.line,
                keyword: record.keyword.to_string(),
                error,
            });
        }
    }

    let source = if store.normals.is_empty() {
        NormalSource::Missing
    } else {
        NormalSource::File
    };
    report.normals_synthesized = source == NormalSource::Missing && options.synthesize_normals;
    if report.normals_synthesized {
        crate::import_info!("OBJ 文件缺少法线数据，正在生成面积加权法线...");
    }

    crate::import_debug!(
        positions = store.positions.len(),
        normals = store.normals.len(),
        texcoords = store.uvs.len(),
        unique_vertices = table.len(),
        "属性收集完成"
    );

    let mesh = assembler.finish(name, source, options.synthesize_normals);
    Imported { mesh, report }
}

/// 解析一个面并追加其扇形三角形，返回三角形数量
fn import_face(
    record: &Record<'_>,
    store: &RawAttributeStore,
    table: &mut VertexTable,
    assembler: &mut MeshAssembler,
) -> Result<usize, RecordError> {
    let corners = face::parse_face(&record.tokens, store)?;

    let ids: Vec<u32> = corners
        .into_iter()
        .map(|key| table.resolve(key, store, assembler))
        .collect();

    let mut count = 0;
    for [a, b, c] in face::fan_triangles(ids.len()) {
        assembler.push_triangle([ids[a], ids[b], ids[c]]);
        count += 1;
    }

    Ok(count)
}
