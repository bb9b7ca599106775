//! 网格数据结构模块
//!
//! 定义CPU侧的网格数据容器：顶点位置缓冲和三角形索引缓冲。
//! 顶点缓冲的行号就是索引缓冲中使用的顶点编号。
//!
//! 网格先用 [`MeshBuilder`] 增量构建，最后冻结成不可变的 [`MeshData`]。
//! 不做任何网格优化：重复顶点、未引用顶点、退化三角形都原样保留。

use crate::math::geometry;

/// 顶点位置 (x, y, z)
pub type Position = [f32; 3];

/// 三角形，三个顶点缓冲行号
pub type Triangle = [u32; 3];

/// CPU侧网格数据
///
/// 加载器和生成器共同的返回类型。构建完成后不可修改，
/// 每次调用都返回一份独立拥有的新数据。
///
/// # 示例
///
/// ```rust
/// use shape_meshes::geometry::mesh::MeshBuilder;
///
/// let mut builder = MeshBuilder::new();
/// builder.push_vertex([0.0, 0.0, 0.0]);
/// builder.push_vertex([1.0, 0.0, 0.0]);
/// builder.push_vertex([0.0, 0.0, 1.0]);
/// builder.push_triangle([0, 1, 2]);
///
/// let mesh = builder.build();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    vertices: Box<[Position]>,
    indices: Box<[Triangle]>,
}

impl MeshData {
    /// 顶点位置缓冲
    #[inline]
    pub fn vertices(&self) -> &[Position] {
        &self.vertices
    }

    /// 三角形索引缓冲
    #[inline]
    pub fn indices(&self) -> &[Triangle] {
        &self.indices
    }

    /// 获取顶点数量
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取三角形数量
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// 拆分为 (顶点缓冲, 索引缓冲)
    pub fn into_parts(self) -> (Box<[Position]>, Box<[Triangle]>) {
        (self.vertices, self.indices)
    }

    /// 顶点缓冲的原始字节（紧密排列的 f32）
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices[..])
    }

    /// 索引缓冲的原始字节（紧密排列的 u32）
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices[..])
    }

    /// 所有三角形面积之和
    pub fn surface_area(&self) -> f32 {
        geometry::surface_area(&self.vertices, &self.indices)
    }

    /// 验证所有索引都在顶点范围内
    ///
    /// # 返回
    ///
    /// - `Ok(())`: 数据有效
    /// - `Err(String)`: 数据无效，返回错误描述
    pub fn validate(&self) -> Result<(), String> {
        let vertex_count = self.vertices.len();
        for (t, triangle) in self.indices.iter().enumerate() {
            if let Some(&index) = triangle.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(format!(
                    "triangle {} references vertex {} but only {} vertices exist",
                    t, index, vertex_count
                ));
            }
        }

        Ok(())
    }
}

/// 网格构建器
///
/// 可增长的顶点/三角形容器，`build()` 时冻结为 [`MeshData`]。
#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    vertices: Vec<Position>,
    indices: Vec<Triangle>,
}

impl MeshBuilder {
    /// 创建一个空的构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建一个带容量预分配的构建器
    ///
    /// # 参数
    ///
    /// - `vertex_capacity`: 预分配的顶点数量
    /// - `triangle_capacity`: 预分配的三角形数量
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity),
        }
    }

    /// 追加一个顶点
    ///
    /// 新顶点的行号等于追加前的 [`MeshBuilder::vertex_count`]。
    #[inline]
    pub fn push_vertex(&mut self, position: Position) {
        self.vertices.push(position);
    }

    /// 追加一个三角形
    #[inline]
    pub fn push_triangle(&mut self, triangle: Triangle) {
        self.indices.push(triangle);
    }

    /// 当前顶点数量
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 当前三角形数量
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// 冻结为不可变的网格数据
    pub fn build(self) -> MeshData {
        MeshData {
            vertices: self.vertices.into_boxed_slice(),
            indices: self.indices.into_boxed_slice(),
        }
    }
}

impl Extend<Triangle> for MeshBuilder {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.indices.extend(iter);
    }
}
