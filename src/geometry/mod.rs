/// 几何体导入和处理模块
///
/// 将 OBJ 文本转换为去重的索引三角形网格，并提供包围盒与法线生成。
///
/// # 模块结构
///
/// - `obj`: OBJ 文本的记录切分、属性收集和面解析
/// - `dedup`: 按 (位置, 法线, 纹理坐标) 角点键去重
/// - `assembler`: 增长中的输出数组
/// - `mesh`: 只读网格数据
/// - `bounds`: 轴对齐包围盒
/// - `normals`: 面积加权法线
/// - `vertex`: 交错顶点布局
/// - `primitives`: 内置几何体
/// - `loaders`: 按扩展名分派的文件加载器
///
/// # 架构设计
///
/// ```text
/// 文件 (OBJ)
///     ↓
/// Loader (ObjLoader)
///     ↓
/// obj::import → VertexTable → MeshAssembler
///     ↓
/// MeshData (CPU侧数据)
///     ↓
/// 渲染端（只读访问器）
/// ```
///
/// # 使用示例
///
/// ```rust,no_run
/// use tri_mesh::geometry::MeshData;
///
/// let mut mesh = MeshData::new();
/// let report = mesh.read_file("model.obj")?;
///
/// println!("顶点数: {}", mesh.vertex_count());
/// println!("三角形数: {}", mesh.triangle_count());
/// println!("跳过的记录: {}", report.diagnostics.len());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```

pub mod obj;
pub mod dedup;
pub mod assembler;
pub mod mesh;
pub mod bounds;
pub mod normals;
pub mod vertex;
pub mod primitives;
pub mod loaders;

// 重新导出常用类型
pub use bounds::Aabb;
pub use loaders::{load_mesh, ImportOptions, ImportReport, Imported, MeshLoader, ObjLoader};
pub use mesh::{MeshData, DEFAULT_COLOR};
pub use vertex::Vertex;
