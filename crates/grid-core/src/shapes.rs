use crate::helpers::radians;
use crate::mesh::{self, MeshData};
use glam::Vec3;

/// Geometry handle of a shape; the renderer keeps one GPU mesh per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Box,
    Cone,
    Torus,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Box, ShapeKind::Cone, ShapeKind::Torus];

    /// Stable index into per-kind GPU resources.
    pub fn index(self) -> usize {
        match self {
            ShapeKind::Box => 0,
            ShapeKind::Cone => 1,
            ShapeKind::Torus => 2,
        }
    }

    pub fn build_mesh(self) -> MeshData {
        match self {
            ShapeKind::Box => mesh::build_box(0.5),
            ShapeKind::Cone => mesh::build_cone(0.3, 0.5, 32),
            ShapeKind::Torus => mesh::build_torus(0.3, 0.12, 30, 200),
        }
    }
}

/// A shape the layout can place in a cell: its geometry plus the intrinsic
/// rotation the cell rests at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub rotation_z: f32,
}

impl ShapeDescriptor {
    pub fn new(kind: ShapeKind, rotation_x: f32, rotation_y: f32, rotation_z: f32) -> Self {
        Self {
            kind,
            rotation_x,
            rotation_y,
            rotation_z,
        }
    }

    pub fn rotation(&self) -> Vec3 {
        Vec3::new(self.rotation_x, self.rotation_y, self.rotation_z)
    }
}

/// Box, upside-down cone and a torus lying flat on the floor.
pub fn default_shape_pool() -> Vec<ShapeDescriptor> {
    vec![
        ShapeDescriptor::new(ShapeKind::Box, 0.0, 0.0, 0.0),
        ShapeDescriptor::new(ShapeKind::Cone, 0.0, 0.0, radians(-180.0)),
        ShapeDescriptor::new(ShapeKind::Torus, radians(90.0), 0.0, 0.0),
    ]
}
