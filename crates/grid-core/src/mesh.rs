//! Procedural geometry for the shape pool.
//!
//! Every mesh is centred on its own origin so that per-cell rotation and scale
//! pivot around the middle of the shape.

use glam::Vec3;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn push(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let idx = self.vertices.len() as u32;
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        });
        idx
    }

    fn quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.indices.extend_from_slice(&[a, b, c, a, c, d]);
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        self.vertices.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), v| {
                let p = Vec3::from_array(v.position);
                (lo.min(p), hi.max(p))
            },
        )
    }
}

/// Box with edge length `size`, one flat-shaded quad per face.
pub fn build_box(size: f32) -> MeshData {
    let h = size * 0.5;
    let mut mesh = MeshData::default();
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::Y, Vec3::NEG_Z),
        (Vec3::NEG_X, Vec3::Y, Vec3::Z),
        (Vec3::Y, Vec3::NEG_Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::Z, Vec3::X),
        (Vec3::Z, Vec3::Y, Vec3::X),
        (Vec3::NEG_Z, Vec3::Y, Vec3::NEG_X),
    ];
    // (normal, up, right) with right x up == normal so faces wind counter-clockwise
    for (n, up, right) in faces {
        let c = n * h;
        let a = mesh.push(c - right * h - up * h, n);
        let b = mesh.push(c + right * h - up * h, n);
        let cc = mesh.push(c + right * h + up * h, n);
        let d = mesh.push(c - right * h + up * h, n);
        mesh.quad(a, b, cc, d);
    }
    mesh
}

/// Square floor of edge `size` in the XZ plane at y = 0, facing +Y.
pub fn build_plane(size: f32) -> MeshData {
    let h = size * 0.5;
    let mut mesh = MeshData::default();
    let a = mesh.push(Vec3::new(-h, 0.0, h), Vec3::Y);
    let b = mesh.push(Vec3::new(h, 0.0, h), Vec3::Y);
    let c = mesh.push(Vec3::new(h, 0.0, -h), Vec3::Y);
    let d = mesh.push(Vec3::new(-h, 0.0, -h), Vec3::Y);
    mesh.quad(a, b, c, d);
    mesh
}

/// Cone along +Y centred at the origin: base ring at `-height/2`, apex at `+height/2`.
pub fn build_cone(radius: f32, height: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let half = height * 0.5;
    let slope = radius / height.max(f32::EPSILON);
    let mut mesh = MeshData::default();

    for i in 0..segments {
        let a0 = TAU * i as f32 / segments as f32;
        let a1 = TAU * (i + 1) as f32 / segments as f32;
        let dir0 = Vec3::new(a0.sin(), 0.0, a0.cos());
        let dir1 = Vec3::new(a1.sin(), 0.0, a1.cos());
        let amid = (a0 + a1) * 0.5;
        let dmid = Vec3::new(amid.sin(), 0.0, amid.cos());

        let p0 = mesh.push(dir0 * radius - Vec3::Y * half, dir0 + Vec3::Y * slope);
        let p1 = mesh.push(dir1 * radius - Vec3::Y * half, dir1 + Vec3::Y * slope);
        let apex = mesh.push(Vec3::Y * half, dmid + Vec3::Y * slope);
        mesh.indices.extend_from_slice(&[p0, p1, apex]);
    }

    let centre = mesh.push(-Vec3::Y * half, Vec3::NEG_Y);
    let ring_start = mesh.vertices.len() as u32;
    for i in 0..segments {
        let a = TAU * i as f32 / segments as f32;
        mesh.push(
            Vec3::new(a.sin() * radius, -half, a.cos() * radius),
            Vec3::NEG_Y,
        );
    }
    for i in 0..segments {
        let cur = ring_start + i;
        let next = ring_start + (i + 1) % segments;
        mesh.indices.extend_from_slice(&[centre, next, cur]);
    }
    mesh
}

/// Torus in the XY plane around the Z axis.
pub fn build_torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);
    let mut mesh = MeshData::default();

    for j in 0..=radial {
        let v = TAU * j as f32 / radial as f32;
        for i in 0..=tubular {
            let u = TAU * i as f32 / tubular as f32;
            let ring = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let p = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            mesh.push(p, p - ring);
        }
    }
    let stride = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}
