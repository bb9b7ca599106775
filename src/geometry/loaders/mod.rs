//! 模型加载器模块
//!
//! 提供统一的模型加载接口和各种格式的具体实现。
//!
//! # 支持的格式
//!
//! - **OBJ**: Wavefront OBJ 的 `v`/`f` 子集（自带的流式解析器）
//!
//! # 使用示例
//!
//! ```rust,no_run
//! use shape_meshes::geometry::loaders::{MeshLoader, ObjLoader};
//! use std::path::Path;
//!
//! let mesh = ObjLoader::load_from_file(Path::new("model.obj"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::core::error::{MeshLoadError, Result};
use crate::geometry::mesh::MeshData;
use std::io::BufRead;
use std::path::Path;

pub mod obj_loader;

// 重新导出加载器
pub use obj_loader::ObjLoader;

/// 网格加载器 trait
///
/// 定义统一的加载接口，所有格式的加载器都实现此 trait。
///
/// # 实现要求
///
/// - 加载器是无状态的（使用静态方法），可以被多个线程同时调用
/// - 返回 CPU 侧的 `MeshData`，不涉及 GPU 资源
/// - 失败时不返回部分网格
pub trait MeshLoader {
    /// 从文件路径加载网格
    ///
    /// 打开文件后委托给 [`MeshLoader::load_from_reader`]。
    ///
    /// # 错误
    ///
    /// - 文件无法打开（错误信息包含尝试的路径）
    /// - 文件内容解析失败
    fn load_from_file(path: &Path) -> Result<MeshData>;

    /// 从内存数据加载网格
    ///
    /// # 参数
    ///
    /// - `data`: 文件内容的字节数组
    fn load_from_memory(data: &[u8]) -> Result<MeshData>;

    /// 从任意文本流加载网格
    fn load_from_reader<R: BufRead>(reader: R) -> Result<MeshData>;

    /// 获取支持的文件扩展名列表
    ///
    /// 支持的扩展名数组（小写，不含点号）
    fn supported_extensions() -> &'static [&'static str];
}

/// 根据文件扩展名选择合适的加载器
///
/// # 返回
///
/// - `Ok(MeshData)`: 成功加载
/// - `Err(ShapeMeshError)`: 不支持的格式或加载失败
pub fn load_mesh(path: &Path) -> Result<MeshData> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| {
            MeshLoadError::UnsupportedFormat(format!(
                "cannot determine the extension of '{}'",
                path.display()
            ))
        })?;

    if ObjLoader::supported_extensions().contains(&extension.as_str()) {
        ObjLoader::load_from_file(path)
    } else {
        Err(MeshLoadError::UnsupportedFormat(format!(".{}", extension)).into())
    }
}
