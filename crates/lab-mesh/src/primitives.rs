//! Canonical shapes centered at the origin.
//!
//! Cube and cylinder duplicate vertices per face so a downstream flat-shaded
//! renderer never has to share a normal across a hard edge.

use std::f64::consts::{PI, TAU};

use lab_core::Result;
use lab_math::Point3;

use crate::mesh_data::MeshData;
use crate::params::{require_addressable, require_dimension, require_segments};

/// Rectangle in the XZ plane at `y = 0`.
///
/// Corners run `(-x,-z), (+x,-z), (+x,+z), (-x,+z)`. Both triangles are
/// emitted once per winding so the plane stays visible from below with
/// backface culling enabled.
pub fn create_plane(width: f64, depth: f64) -> Result<MeshData> {
    require_dimension("width", width)?;
    require_dimension("depth", depth)?;

    let (hw, hd) = (width / 2.0, depth / 2.0);
    let positions = vec![
        Point3::new(-hw, 0.0, -hd),
        Point3::new(hw, 0.0, -hd),
        Point3::new(hw, 0.0, hd),
        Point3::new(-hw, 0.0, hd),
    ];
    let indices = vec![
        0, 1, 2, //
        2, 3, 0, //
        0, 2, 1, //
        2, 0, 3,
    ];

    log::debug!("plane {width}x{depth}: 4 positions, 12 indices");
    Ok(MeshData::from_parts(positions, indices))
}

/// Axis-aligned box with four vertices per face.
///
/// Face order is front (+Z), back (-Z), left (-X), right (+X), top (+Y),
/// bottom (-Y). Each face is two counter-clockwise triangles seen from
/// outside.
pub fn create_cube(width: f64, height: f64, depth: f64) -> Result<MeshData> {
    require_dimension("width", width)?;
    require_dimension("height", height)?;
    require_dimension("depth", depth)?;

    let (x, y, z) = (width / 2.0, height / 2.0, depth / 2.0);
    let faces: [[Point3; 4]; 6] = [
        // front
        [
            Point3::new(-x, -y, z),
            Point3::new(x, -y, z),
            Point3::new(x, y, z),
            Point3::new(-x, y, z),
        ],
        // back
        [
            Point3::new(x, -y, -z),
            Point3::new(-x, -y, -z),
            Point3::new(-x, y, -z),
            Point3::new(x, y, -z),
        ],
        // left
        [
            Point3::new(-x, -y, -z),
            Point3::new(-x, -y, z),
            Point3::new(-x, y, z),
            Point3::new(-x, y, -z),
        ],
        // right
        [
            Point3::new(x, -y, z),
            Point3::new(x, -y, -z),
            Point3::new(x, y, -z),
            Point3::new(x, y, z),
        ],
        // top
        [
            Point3::new(-x, y, -z),
            Point3::new(-x, y, z),
            Point3::new(x, y, z),
            Point3::new(x, y, -z),
        ],
        // bottom
        [
            Point3::new(-x, -y, -z),
            Point3::new(x, -y, -z),
            Point3::new(x, -y, z),
            Point3::new(-x, -y, z),
        ],
    ];

    let mut positions = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for face in faces {
        let base = positions.len() as u32;
        positions.extend(face);
        indices.extend([base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    log::debug!("cube {width}x{height}x{depth}: 24 positions, 36 indices");
    Ok(MeshData::from_parts(positions, indices))
}

/// Capped cylinder around the Y axis spanning `y ∈ [-height/2, height/2]`.
///
/// Layout: bottom center, top center, then four vertices per segment
/// (bottom cap, bottom side, top cap, top side). Each segment emits one
/// triangle per cap and two for its side quad; the last segment closes the
/// ring onto segment 0.
pub fn create_cylinder(segments: u32, height: f64, radius: f64) -> Result<MeshData> {
    require_segments("segments", segments, 1)?;
    require_dimension("height", height)?;
    require_dimension("radius", radius)?;
    require_addressable("cylinder", 2 + 4 * u64::from(segments))?;

    let n = segments as usize;
    let half = height / 2.0;
    let step = TAU / f64::from(segments);
    let ring = |i: u32| 2 + 4 * (i % segments);

    let mut positions = Vec::with_capacity(2 + 4 * n);
    let mut indices = Vec::with_capacity(12 * n);
    positions.push(Point3::new(0.0, -half, 0.0));
    positions.push(Point3::new(0.0, half, 0.0));

    for i in 0..segments {
        let (sin, cos) = (f64::from(i) * step).sin_cos();
        let bottom = Point3::new(cos * radius, -half, sin * radius);
        let top = Point3::new(bottom.x, half, bottom.z);
        positions.extend([bottom, bottom, top, top]);

        let (cur, next) = (ring(i), ring(i + 1));
        // caps
        indices.extend([0, cur, next]);
        indices.extend([1, next + 2, cur + 2]);
        // side quad
        indices.extend([cur + 1, next + 3, next + 1]);
        indices.extend([next + 3, cur + 1, cur + 3]);
    }

    log::debug!(
        "cylinder ({segments} segments): {} positions, {} indices",
        positions.len(),
        indices.len()
    );
    Ok(MeshData::from_parts(positions, indices))
}

/// UV sphere with poles on the Y axis.
///
/// Layout: north pole, south pole, then `latitude_segments - 1` rings of
/// `longitude_segments` vertices each, north to south. Ring `i` sits at polar
/// angle `iπ/latitude_segments`; vertex `j` at azimuth
/// `2πj/longitude_segments`.
pub fn create_sphere(
    longitude_segments: u32,
    latitude_segments: u32,
    radius: f64,
) -> Result<MeshData> {
    require_segments("longitude_segments", longitude_segments, 1)?;
    require_segments("latitude_segments", latitude_segments, 2)?;
    require_dimension("radius", radius)?;
    require_addressable(
        "sphere",
        2 + u64::from(longitude_segments) * u64::from(latitude_segments - 1),
    )?;

    let lon = longitude_segments;
    let lat = latitude_segments;
    let ring_count = (lat - 1) as usize;
    // Vertex `j` (wrapping) of ring `ring`, rings numbered from 1.
    let at = |ring: u32, j: u32| 2 + (ring - 1) * lon + j % lon;

    let mut positions = Vec::with_capacity(2 + lon as usize * ring_count);
    positions.push(Point3::new(0.0, radius, 0.0));
    positions.push(Point3::new(0.0, -radius, 0.0));
    for ring in 1..lat {
        let theta = f64::from(ring) * PI / f64::from(lat);
        let (sin_t, cos_t) = theta.sin_cos();
        for j in 0..lon {
            let phi = f64::from(j) * TAU / f64::from(lon);
            let (sin_p, cos_p) = phi.sin_cos();
            positions.push(Point3::new(
                radius * sin_t * cos_p,
                radius * cos_t,
                radius * sin_t * sin_p,
            ));
        }
    }

    let mut indices = Vec::with_capacity(6 * lon as usize * ring_count);
    let last = lat - 1;
    for j in 0..lon {
        indices.extend([0, at(1, j + 1), at(1, j)]);
        indices.extend([at(last, j), at(last, j + 1), 1]);
    }
    for ring in 2..lat {
        for j in 0..lon {
            let (cur, cur_next) = (at(ring, j), at(ring, j + 1));
            let (prev, prev_next) = (at(ring - 1, j), at(ring - 1, j + 1));
            indices.extend([cur, prev_next, cur_next]);
            indices.extend([prev_next, cur, prev]);
        }
    }

    log::debug!(
        "sphere ({lon}x{lat}): {} positions, {} indices",
        positions.len(),
        indices.len()
    );
    Ok(MeshData::from_parts(positions, indices))
}
