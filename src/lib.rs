//! shape_meshes - CPU 侧网格导入与生成
//!
//! 将两种输入转换成可直接用于光栅化的网格（顶点位置缓冲 + 三角形索引缓冲）：
//!
//! - 文本 OBJ 数据（仅 `v` 与 `f` 行），多边形面按扇形三角化
//! - 数值参数，生成经纬度细分的单位球
//!
//! # 模块结构
//!
//! - `core`: 日志、配置、错误处理
//! - `math`: 数学类型与三角形几何工具（法线、面积、重心）
//! - `geometry`: 网格数据结构、三角化、球体生成、OBJ 加载器
//!
//! # 使用示例
//!
//! ```no_run
//! use shape_meshes::geometry::loaders::{MeshLoader, ObjLoader};
//! use shape_meshes::geometry::sphere::make_long_lat_unit_sphere;
//! use std::path::Path;
//!
//! let model = ObjLoader::load_from_file(Path::new("assets/box.obj"))?;
//! let sphere = make_long_lat_unit_sphere(20, 20);
//!
//! println!("{} / {} triangles", model.triangle_count(), sphere.triangle_count());
//! # Ok::<(), shape_meshes::core::ShapeMeshError>(())
//! ```

pub mod core;
pub mod math;
pub mod geometry;
