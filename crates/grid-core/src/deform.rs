//! Pointer-driven cell deformation.
//!
//! Every tick with a floor hit, each cell gets a height target from a radial
//! falloff around the hit. Its scale and orientation then follow whatever height
//! the cell currently has, so a raised cell grows and unfurls back to its resting
//! orientation while a flat one stays small and tipped over.

use crate::constants::*;
use crate::error::GridError;
use crate::grid::Cell;
use crate::helpers::{distance, map, radians};
use crate::picking::IntersectionPoint;
use crate::tween::{retarget, step, Easing};
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct DeformParams {
    /// Distance mapped to a raw height of 0.
    pub falloff_start: f32,
    /// Distance mapped to `peak_height`.
    pub falloff_end: f32,
    pub peak_height: f32,
    pub min_height: f32,
    pub scale_divisor: f32,
    pub position_duration: f32,
    pub position_easing: Easing,
    pub scale_duration: f32,
    pub scale_easing: Easing,
    pub rotation_duration: f32,
    pub rotation_easing: Easing,
    /// Per-axis orientation (radians) a cell tips towards as its height drops.
    pub rest_rotation: Vec3,
}

impl Default for DeformParams {
    fn default() -> Self {
        Self {
            falloff_start: FALLOFF_START,
            falloff_end: FALLOFF_END,
            peak_height: PEAK_HEIGHT,
            min_height: MIN_HEIGHT,
            scale_divisor: SCALE_DIVISOR,
            position_duration: POSITION_DURATION_SEC,
            position_easing: Easing::QuadOut,
            scale_duration: SCALE_DURATION_SEC,
            scale_easing: Easing::ExpoOut,
            rotation_duration: ROTATION_DURATION_SEC,
            rotation_easing: Easing::ExpoOut,
            rest_rotation: Vec3::new(
                radians(REST_ROTATION_DEG[0]),
                radians(REST_ROTATION_DEG[1]),
                radians(REST_ROTATION_DEG[2]),
            ),
        }
    }
}

impl DeformParams {
    /// Wider, lower bump with a gentler scale-up.
    pub fn soft() -> Self {
        Self {
            falloff_start: 7.0,
            peak_height: 6.0,
            scale_divisor: 1.5,
            rotation_duration: 0.5,
            rest_rotation: Vec3::new(radians(0.0), radians(90.0), radians(90.0)),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if !self.scale_divisor.is_finite() || self.scale_divisor <= 0.0 {
            return Err(GridError::InvalidScaleDivisor(self.scale_divisor));
        }
        Ok(())
    }

    /// Height target for a cell `d` units from the pointer, floored at `min_height`.
    pub fn target_height(&self, d: f32) -> f32 {
        map(d, self.falloff_start, self.falloff_end, 0.0, self.peak_height).max(self.min_height)
    }

    /// Uniform scale for a cell currently at height `y`; never below 1.
    pub fn target_scale(&self, y: f32) -> f32 {
        (y / self.scale_divisor).max(1.0)
    }

    /// Orientation for a cell currently at height `y`, between the rest angles
    /// and the cell's own initial rotation.
    pub fn target_rotation(&self, y: f32, initial: Vec3) -> Vec3 {
        Vec3::new(
            map(y, -1.0, 1.0, self.rest_rotation.x, initial.x),
            map(y, -1.0, 1.0, self.rest_rotation.y, initial.y),
            map(y, -1.0, 1.0, self.rest_rotation.z, initial.z),
        )
    }
}

/// Drives cell animation from the pointer's floor intersection.
#[derive(Clone, Debug)]
pub struct CellDeformer {
    params: DeformParams,
}

impl CellDeformer {
    pub fn new(params: DeformParams) -> Result<Self, GridError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &DeformParams {
        &self.params
    }

    /// Retarget every cell towards the pointer (when there is a hit) and advance
    /// all running animations by `dt` seconds.
    ///
    /// Without a hit no new targets are issued; animations already in flight
    /// run out and cells then hold their state.
    pub fn update(
        &self,
        cells: &mut [Cell],
        group_offset: Vec3,
        intersection: Option<IntersectionPoint>,
        dt: f32,
    ) {
        if let Some(hit) = intersection {
            for cell in cells.iter_mut() {
                self.retarget_cell(cell, group_offset, hit);
            }
        }
        for cell in cells.iter_mut() {
            advance_cell(cell, dt);
        }
    }

    fn retarget_cell(&self, cell: &mut Cell, group_offset: Vec3, hit: IntersectionPoint) {
        let p = &self.params;
        let d = distance(
            hit.x,
            hit.z,
            cell.base_position.x + group_offset.x,
            cell.base_position.z + group_offset.z,
        );

        let y = p.target_height(d);
        retarget(
            &mut cell.tweens.position_y,
            cell.current_position.y,
            y,
            p.position_duration,
            p.position_easing,
        );

        // scale and rotation follow the height the cell has right now
        let current_y = cell.current_position.y;
        let scale = p.target_scale(current_y);
        retarget(
            &mut cell.tweens.scale,
            cell.current_scale.x,
            scale,
            p.scale_duration,
            p.scale_easing,
        );

        let rot = p.target_rotation(current_y, cell.initial_rotation());
        for axis in 0..3 {
            retarget(
                &mut cell.tweens.rotation[axis],
                cell.current_rotation[axis],
                rot[axis],
                p.rotation_duration,
                p.rotation_easing,
            );
        }
    }
}

fn advance_cell(cell: &mut Cell, dt: f32) {
    step(&mut cell.tweens.position_y, dt, &mut cell.current_position.y);

    let mut s = cell.current_scale.x;
    step(&mut cell.tweens.scale, dt, &mut s);
    cell.current_scale = Vec3::splat(s);

    for axis in 0..3 {
        let mut r = cell.current_rotation[axis];
        step(&mut cell.tweens.rotation[axis], dt, &mut r);
        cell.current_rotation[axis] = r;
    }
}
