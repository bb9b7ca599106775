//! 多边形三角化模块
//!
//! 使用以第一个顶点为轴心的扇形三角化，把一个 k 边形面 (k ≥ 3)
//! 拆成 k - 2 个三角形：
//!
//! ```text
//! (v0, v1, v2), (v0, v2, v3), ..., (v0, v[k-2], v[k-1])
//! ```
//!
//! k = 3 时原样输出输入的三角形，顶点顺序（即绕序）不变。
//! 只对凸的平面多边形正确；非凸或非平面的面会得到可能翻转或自交的三角形，
//! 这里不做修正。

use super::mesh::Triangle;

/// 扇形三角化，返回三角形迭代器
///
/// 少于 3 个顶点引用时不产生任何三角形。
///
/// # 示例
///
/// ```rust
/// use shape_meshes::geometry::triangulate::fan;
///
/// let triangles: Vec<_> = fan(&[0, 1, 2, 3]).collect();
/// assert_eq!(triangles, vec![[0, 1, 2], [0, 2, 3]]);
/// ```
pub fn fan(refs: &[u32]) -> impl Iterator<Item = Triangle> + '_ {
    let pivot = refs.first().copied().unwrap_or_default();
    refs.get(1..)
        .unwrap_or_default()
        .windows(2)
        .map(move |edge| [pivot, edge[0], edge[1]])
}

/// 扇形三角化，结果追加到 `out`
///
/// 返回追加的三角形数量。
pub fn fan_triangulate<E: Extend<Triangle>>(refs: &[u32], out: &mut E) -> usize {
    let count = refs.len().saturating_sub(2);
    out.extend(fan(refs));
    count
}
