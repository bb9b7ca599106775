//! 三角形几何工具模块
//!
//! 针对 (顶点缓冲, 索引缓冲, 三角形序号) 的纯函数：
//! - 法线（未归一化，模长为面积的两倍）
//! - 单位法线
//! - 面积
//! - 重心
//!
//! 三角形的顶点顺序决定法线方向（右手定则），这也是整个库依赖的绕序约定。
//! 三角形序号越界属于调用方错误，会直接 panic。

use super::utils::to_vector;
use super::Vector3;
use crate::geometry::mesh::{Position, Triangle};

/// 取出三角形的三个顶点位置
#[inline]
fn corners(vertices: &[Position], triangles: &[Triangle], tri_index: usize) -> [Vector3; 3] {
    let [a, b, c] = triangles[tri_index];
    [
        to_vector(vertices[a as usize]),
        to_vector(vertices[b as usize]),
        to_vector(vertices[c as usize]),
    ]
}

/// 计算三角形 (A, B, C) 的法线 `(B - A) × (C - A)`
///
/// 模长等于三角形面积的两倍，方向按存储的顶点顺序遵循右手定则。
///
/// # 示例
///
/// ```rust
/// use shape_meshes::math::geometry::normal;
///
/// let vertices = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
/// let n = normal(&vertices, &[[0, 1, 2]], 0);
/// assert_eq!(n.z, 1.0);
/// ```
pub fn normal(vertices: &[Position], triangles: &[Triangle], tri_index: usize) -> Vector3 {
    let [a, b, c] = corners(vertices, triangles, tri_index);
    (b - a).cross(&(c - a))
}

/// 计算三角形的单位法线
///
/// 退化三角形（共线顶点）没有有意义的方向，返回零向量。
pub fn unit_normal(vertices: &[Position], triangles: &[Triangle], tri_index: usize) -> Vector3 {
    normal(vertices, triangles, tri_index)
        .try_normalize(0.0)
        .unwrap_or_else(Vector3::zeros)
}

/// 计算三角形面积
pub fn area(vertices: &[Position], triangles: &[Triangle], tri_index: usize) -> f32 {
    normal(vertices, triangles, tri_index).norm() * 0.5
}

/// 计算三角形重心（三个顶点位置的算术平均）
pub fn centroid(vertices: &[Position], triangles: &[Triangle], tri_index: usize) -> Vector3 {
    let [a, b, c] = corners(vertices, triangles, tri_index);
    (a + b + c) / 3.0
}

/// 所有三角形面积之和
pub fn surface_area(vertices: &[Position], triangles: &[Triangle]) -> f32 {
    (0..triangles.len())
        .map(|t| area(vertices, triangles, t))
        .sum()
}
