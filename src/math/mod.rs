//! 数学库模块
//!
//! 基于 `nalgebra`，为网格代码提供简洁的类型名称和少量工具函数。
//!
//! # 模块组织
//!
//! - **基础类型**：Vector3
//! - **工具函数**：位置数组转换为向量
//! - **三角形几何**：法线、面积、重心（见 geometry 子模块）
//!
//! 网格缓冲使用原始数组 `[f32; 3]` 存储（可直接按字节上传给 GPU），
//! 需要做向量运算时再转换成 `Vector3`。

pub use nalgebra::Vector3 as Vec3;

/// 单精度三维向量
pub type Vector3 = Vec3<f32>;

/// 数学工具函数
pub mod utils {
    use super::Vector3;

    /// 位置数组转换为向量
    #[inline]
    pub fn to_vector(p: [f32; 3]) -> Vector3 {
        Vector3::new(p[0], p[1], p[2])
    }
}

// 三角形几何工具
pub mod geometry;
