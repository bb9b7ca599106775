/// 网格加载示例
///
/// 演示如何加载 OBJ 文件并生成单位球，打印两者的统计信息。
///
/// 运行方式：
/// ```text
/// cargo run --example load_obj -- --obj assets/box.obj --long 40 --lat 20
/// ```

use anyhow::Context;
use shape_meshes::core::{log, Config};
use shape_meshes::geometry::loaders::load_mesh;
use shape_meshes::geometry::sphere::make_unit_sphere;
use shape_meshes::geometry::MeshData;
use std::path::Path;

const CONFIG_FILE: &str = "shape_meshes.toml";

fn main() -> anyhow::Result<()> {
    let mut config = Config::from_file_or_default(CONFIG_FILE);
    config.apply_args(std::env::args().skip(1));

    log::init_logger(
        config.logging.level,
        config.logging.file_output,
        Some(config.logging.log_file.as_str()),
    );

    config.validate().context("配置无效")?;

    if let Some(obj_path) = &config.loader.obj_path {
        let mesh = load_mesh(Path::new(obj_path))
            .with_context(|| format!("加载 {} 失败", obj_path))?;
        report(obj_path, &mesh);
    }

    let sphere = make_unit_sphere(&config.sphere);
    report(
        &format!(
            "unit sphere {}x{}",
            config.sphere.longitude_bands, config.sphere.latitude_bands
        ),
        &sphere,
    );
    tracing::info!(
        "球面积 {:.5}，理想值 {:.5}",
        sphere.surface_area(),
        4.0 * std::f32::consts::PI
    );

    Ok(())
}

fn report(name: &str, mesh: &MeshData) {
    tracing::info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        bytes = mesh.vertex_bytes().len() + mesh.index_bytes().len(),
        "{}",
        name
    );

    if let Err(e) = mesh.validate() {
        tracing::error!("{}: 数据验证失败: {}", name, e);
    }
}
