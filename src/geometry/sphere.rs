//! 经纬度单位球生成模块
//!
//! 用经度角 φ ∈ [0, 2π) 和极角 θ ∈ [0, π] 参数化单位球，
//! 每个 (φ, θ) 映射到 `(sinθ·cosφ, sinθ·sinφ, cosθ)`，因此所有顶点模长为 1。
//!
//! # 顶点布局
//!
//! ```text
//! 0                         北极 (0, 0, 1)
//! 1 .. 1 + L                第 1 圈（θ = π / B）
//! ...
//! 1 + (B-2)·L .. 1 + (B-1)·L  第 B-1 圈
//! 1 + (B-1)·L               南极 (0, 0, -1)
//! ```
//!
//! 其中 L 为经度分段数，B 为纬度分段数。两极各只有一个共享顶点，
//! 极圈用三角扇封闭，中间每个四边形拆成两个三角形。
//! 所有三角形的法线都朝外（重心 · 法线 > 0）。

use std::f64::consts::{PI, TAU};

use super::mesh::{MeshBuilder, MeshData, Position};
use crate::core::config::SphereConfig;

/// 经度/纬度分段数的下限，更小的值会被提升到这个值
pub const MIN_RESOLUTION: u32 = 3;

/// 经度/纬度分段数的上限，保证所有顶点编号都能用 u32 表示
pub const MAX_RESOLUTION: u32 = 1 << 15;

/// 生成经纬度细分的单位球
///
/// # 参数
///
/// - `longitude_bands`: 经度方向的分段数（每圈顶点数）
/// - `latitude_bands`: 纬度方向的分段数（极点之间的带数）
///
/// 超出 [`MIN_RESOLUTION`]..=[`MAX_RESOLUTION`] 的分辨率会被限制到该范围并记录警告。
///
/// # 示例
///
/// ```rust
/// use shape_meshes::geometry::sphere::make_long_lat_unit_sphere;
///
/// let sphere = make_long_lat_unit_sphere(3, 3);
/// assert_eq!(sphere.vertex_count(), 8);
/// assert_eq!(sphere.triangle_count(), 12);
/// ```
pub fn make_long_lat_unit_sphere(longitude_bands: u32, latitude_bands: u32) -> MeshData {
    let long = clamp_resolution("longitude", longitude_bands);
    let lat = clamp_resolution("latitude", latitude_bands);

    let rings = lat - 1;
    let vertex_count = 2 + long as usize * rings as usize;
    let triangle_count = 2 * long as usize * rings as usize;
    let mut mesh = MeshBuilder::with_capacity(vertex_count, triangle_count);

    // 分辨率上限保证顶点编号不超过 u32 范围
    let north = 0;
    let south = 1 + rings * long;

    mesh.push_vertex([0.0, 0.0, 1.0]);
    for i in 1..lat {
        let theta = PI * f64::from(i) / f64::from(lat);
        for j in 0..long {
            let phi = TAU * f64::from(j) / f64::from(long);
            mesh.push_vertex(spherical_to_cartesian(theta, phi));
        }
    }
    mesh.push_vertex([0.0, 0.0, -1.0]);

    // 第 ring 圈（从 0 开始）第 j 个顶点
    let ring_vertex = |ring: u32, j: u32| 1 + ring * long + j % long;

    // 北极圈
    for j in 0..long {
        mesh.push_triangle([north, ring_vertex(0, j), ring_vertex(0, j + 1)]);
    }

    // 中间的四边形：a-c 在上圈，b-d 在下圈
    for ring in 0..rings - 1 {
        for j in 0..long {
            let a = ring_vertex(ring, j);
            let b = ring_vertex(ring + 1, j);
            let c = ring_vertex(ring, j + 1);
            let d = ring_vertex(ring + 1, j + 1);
            mesh.push_triangle([a, b, c]);
            mesh.push_triangle([c, b, d]);
        }
    }

    // 南极圈
    let last = rings - 1;
    for j in 0..long {
        mesh.push_triangle([ring_vertex(last, j), south, ring_vertex(last, j + 1)]);
    }

    debug_assert_eq!(mesh.vertex_count(), vertex_count);
    debug_assert_eq!(mesh.triangle_count(), triangle_count);

    tracing::debug!(
        longitude_bands = long,
        latitude_bands = lat,
        vertices = vertex_count,
        triangles = triangle_count,
        "生成单位球"
    );

    mesh.build()
}

/// 按配置生成单位球
pub fn make_unit_sphere(config: &SphereConfig) -> MeshData {
    make_long_lat_unit_sphere(config.longitude_bands, config.latitude_bands)
}

fn clamp_resolution(axis: &str, bands: u32) -> u32 {
    let clamped = bands.clamp(MIN_RESOLUTION, MAX_RESOLUTION);
    if clamped != bands {
        tracing::warn!("{} 分辨率 {} 超出范围，已调整为 {}", axis, bands, clamped);
    }
    clamped
}

/// 双精度计算后再转换为 f32，保证转换后的模长尽量接近 1
fn spherical_to_cartesian(theta: f64, phi: f64) -> Position {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    [
        (sin_theta * cos_phi) as f32,
        (sin_theta * sin_phi) as f32,
        cos_theta as f32,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::{area, centroid, normal};
    use crate::math::utils::to_vector;

    const RESOLUTIONS: [u32; 4] = [3, 10, 20, 40];

    #[test]
    fn test_counts() {
        let sphere = make_long_lat_unit_sphere(8, 5);
        assert_eq!(sphere.vertex_count(), 2 + 8 * 4);
        assert_eq!(sphere.triangle_count(), 2 * 8 * 4);
        assert!(sphere.validate().is_ok());
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        for resolution in RESOLUTIONS {
            let sphere = make_long_lat_unit_sphere(resolution, resolution);
            for (v, &p) in sphere.vertices().iter().enumerate() {
                let norm = to_vector(p).norm();
                assert!(
                    (norm - 1.0).abs() <= f32::EPSILON,
                    "resolution {} vertex {} has norm {}",
                    resolution,
                    v,
                    norm
                );
            }
        }
    }

    #[test]
    fn test_normals_point_outward() {
        for resolution in RESOLUTIONS {
            let sphere = make_long_lat_unit_sphere(resolution, resolution);
            let (vertices, triangles) = (sphere.vertices(), sphere.indices());
            for t in 0..triangles.len() {
                let n = normal(vertices, triangles, t);
                let c = centroid(vertices, triangles, t);
                assert!(
                    n.dot(&c) > 0.0,
                    "resolution {} triangle {} is wound inward",
                    resolution,
                    t
                );
            }
        }
    }

    #[test]
    fn test_area_converges_from_below() {
        let ideal_area = 4.0 * std::f32::consts::PI;
        let mut prev_area = 0.0;

        for resolution in RESOLUTIONS {
            let sphere = make_long_lat_unit_sphere(resolution, resolution);
            let total_area: f32 = (0..sphere.triangle_count())
                .map(|t| area(sphere.vertices(), sphere.indices(), t))
                .sum();

            assert!(total_area > prev_area, "resolution {}", resolution);
            assert!(total_area <= ideal_area, "resolution {}", resolution);
            prev_area = total_area;
        }
    }

    #[test]
    fn test_every_vertex_referenced() {
        let sphere = make_long_lat_unit_sphere(6, 4);
        let mut used = vec![false; sphere.vertex_count()];
        for triangle in sphere.indices() {
            for &i in triangle {
                used[i as usize] = true;
            }
        }
        assert!(used.into_iter().all(|u| u));
    }

    #[test]
    fn test_low_resolution_is_clamped() {
        let clamped = make_long_lat_unit_sphere(1, 0);
        assert_eq!(clamped, make_long_lat_unit_sphere(3, 3));
    }

    #[test]
    fn test_resolution_range() {
        assert_eq!(clamp_resolution("longitude", 0), MIN_RESOLUTION);
        assert_eq!(clamp_resolution("longitude", 12), 12);
        assert_eq!(clamp_resolution("latitude", u32::MAX), MAX_RESOLUTION);

        // 最大分辨率下最后一个顶点编号仍在 u32 范围内
        let max = MAX_RESOLUTION as usize;
        let last_vertex = 1 + (max - 1) * max;
        assert!(u32::try_from(last_vertex).is_ok());
        assert!(u32::try_from(2 * max * (max - 1)).is_ok());
    }

    #[test]
    fn test_poles_are_first_and_last() {
        let sphere = make_long_lat_unit_sphere(5, 4);
        let vertices = sphere.vertices();
        assert_eq!(vertices[0], [0.0, 0.0, 1.0]);
        assert_eq!(vertices[vertices.len() - 1], [0.0, 0.0, -1.0]);

        let south = (vertices.len() - 1) as u32;
        let touching_south = sphere.indices().iter().filter(|t| t.contains(&south)).count();
        assert_eq!(touching_south, 5);
    }

    #[test]
    fn test_from_config() {
        let config = SphereConfig {
            longitude_bands: 10,
            latitude_bands: 6,
        };
        let sphere = make_unit_sphere(&config);
        assert_eq!(sphere.vertex_count(), 2 + 10 * 5);
    }
}
