//! OBJ 文件加载器
//!
//! 逐行读取 Wavefront OBJ 文本，只识别顶点位置 (`v`) 和面 (`f`) 两种行，
//! 其余行（注释、法线、纹理坐标、分组、材质引用、空行）全部忽略。
//! 多边形面通过扇形三角化拆成三角形。

use super::MeshLoader;
use crate::core::error::{MeshLoadError, Result};
use crate::geometry::mesh::{MeshBuilder, MeshData, Position};
use crate::geometry::triangulate::fan_triangulate;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// OBJ 格式加载器
///
/// 实现 `MeshLoader` trait，提供 OBJ 数据的加载功能。
///
/// # 特性
///
/// - `v x y z [...]`：追加一个顶点，多余的分量忽略
/// - `f i1 i2 ... ik`：1 起始的顶点编号，k ≥ 3；支持 `i/t/n` 形式（只取位置编号）
///   以及负数的相对编号（`-1` 表示最近定义的顶点）
/// - 行尾 `#` 之后的内容视为注释
/// - 不做网格优化：重复顶点和未引用顶点都原样保留
///
/// # 使用示例
///
/// ```rust
/// use shape_meshes::geometry::loaders::{MeshLoader, ObjLoader};
///
/// let obj = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
/// let mesh = ObjLoader::load_from_memory(obj.as_bytes())?;
/// assert_eq!(mesh.triangle_count(), 2);
/// # Ok::<(), shape_meshes::core::ShapeMeshError>(())
/// ```
pub struct ObjLoader;

impl MeshLoader for ObjLoader {
    fn load_from_file(path: &Path) -> Result<MeshData> {
        let file =
            File::open(path).map_err(|_| MeshLoadError::FileOpenFailure(path.to_path_buf()))?;

        let mesh_data = Self::load_from_reader(BufReader::new(file))?;

        tracing::info!(
            "成功加载 OBJ 文件 {}: {} 个顶点, {} 个三角形",
            path.display(),
            mesh_data.vertex_count(),
            mesh_data.triangle_count()
        );

        Ok(mesh_data)
    }

    fn load_from_memory(data: &[u8]) -> Result<MeshData> {
        Self::load_from_reader(data)
    }

    fn load_from_reader<R: BufRead>(reader: R) -> Result<MeshData> {
        let mut parser = ObjParser::default();

        for (line_index, line) in reader.lines().enumerate() {
            parser.parse_line(line_index + 1, &line?)?;
        }

        parser.finish()
    }

    fn supported_extensions() -> &'static [&'static str] {
        &["obj"]
    }
}

/// 单次解析的累积状态
#[derive(Default)]
struct ObjParser {
    mesh: MeshBuilder,
    // 是否见过任何 `v`/`f` 行
    saw_obj_token: bool,
    // 当前面的顶点引用（0 起始），逐行复用
    face_refs: Vec<u32>,
}

impl ObjParser {
    fn parse_line(&mut self, line: usize, text: &str) -> Result<()> {
        let content = text.split_once('#').map_or(text, |(head, _)| head);
        let mut tokens = content.split_whitespace();

        match tokens.next() {
            Some("v") => {
                self.saw_obj_token = true;
                let position = parse_position(line, tokens)?;
                self.mesh.push_vertex(position);
            }
            Some("f") => {
                self.saw_obj_token = true;
                self.parse_face(line, tokens)?;
            }
            _ => {}
        }

        Ok(())
    }

    fn parse_face<'a>(&mut self, line: usize, tokens: impl Iterator<Item = &'a str>) -> Result<()> {
        let vertex_count = self.mesh.vertex_count();

        self.face_refs.clear();
        for token in tokens {
            let index = resolve_index(line, token, vertex_count)?;
            self.face_refs.push(index);
        }

        if self.face_refs.len() < 3 {
            return Err(MeshLoadError::ParseError {
                line,
                message: format!(
                    "a face needs at least 3 vertices, found {}",
                    self.face_refs.len()
                ),
            }
            .into());
        }

        fan_triangulate(&self.face_refs, &mut self.mesh);
        Ok(())
    }

    fn finish(self) -> Result<MeshData> {
        if self.mesh.triangle_count() == 0 {
            return Err(MeshLoadError::NoFacesFound {
                maybe_not_obj: !self.saw_obj_token,
            }
            .into());
        }

        tracing::debug!(
            vertices = self.mesh.vertex_count(),
            triangles = self.mesh.triangle_count(),
            "OBJ 解析完成"
        );

        Ok(self.mesh.build())
    }
}

fn parse_position<'a>(line: usize, mut tokens: impl Iterator<Item = &'a str>) -> Result<Position> {
    let mut position = [0.0f32; 3];
    for (axis, value) in position.iter_mut().enumerate() {
        let token = tokens.next().ok_or_else(|| MeshLoadError::ParseError {
            line,
            message: format!("a vertex needs 3 coordinates, found {}", axis),
        })?;
        *value = token.parse().map_err(|_| MeshLoadError::ParseError {
            line,
            message: format!("invalid vertex coordinate '{}'", token),
        })?;
    }
    Ok(position)
}

/// 把面中的一个顶点引用转换为 0 起始的顶点编号
///
/// 只允许引用当前已经定义的顶点。
fn resolve_index(line: usize, token: &str, vertex_count: usize) -> Result<u32> {
    let position_ref = token.split('/').next().unwrap_or(token);
    let index: i64 = position_ref.parse().map_err(|_| MeshLoadError::ParseError {
        line,
        message: format!("invalid face index '{}'", token),
    })?;

    let resolved = if index > 0 {
        index - 1
    } else {
        vertex_count as i64 + index
    };

    let out_of_range = MeshLoadError::IndexOutOfRange {
        line,
        index,
        vertex_count,
    };

    if index == 0 || resolved < 0 || resolved >= vertex_count as i64 {
        return Err(out_of_range.into());
    }

    // 三角形索引为 u32，超出表示范围的顶点无法被引用
    u32::try_from(resolved).map_err(|_| out_of_range.into())
}
