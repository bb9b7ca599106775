//! 几何体模块
//!
//! 提供 CPU 侧网格数据的导入与生成，结果可直接交给渲染器上传。
//!
//! # 模块结构
//!
//! - `mesh`: 网格数据（顶点位置缓冲 + 三角形索引缓冲）与构建器
//! - `triangulate`: 多边形扇形三角化
//! - `sphere`: 经纬度单位球生成
//! - `loaders`: 各种格式的模型加载器
//!
//! # 架构设计
//!
//! ```text
//! OBJ 文本流 / 文件          (经度, 纬度) 分辨率
//!     ↓                           ↓
//! ObjLoader ── triangulate    sphere
//!     ↓                           ↓
//!            MeshData (CPU侧数据)
//!                  ↓
//!            Renderer (外部，上传到GPU)
//! ```

pub mod mesh;
pub mod triangulate;
pub mod sphere;
pub mod loaders;

// 重新导出常用类型
pub use mesh::{MeshBuilder, MeshData, Position, Triangle};
pub use sphere::make_long_lat_unit_sphere;
