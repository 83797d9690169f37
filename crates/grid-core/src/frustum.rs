//! How much of the floor a perspective camera sees at a given depth.

/// World-space extent of the view frustum at a depth plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleSize {
    pub width: f32,
    pub height: f32,
}

/// Visible width/height at `depth` for a camera with the given vertical field of
/// view (degrees) and aspect ratio.
///
/// `camera_z_offset` compensates for a camera that is not at the origin along
/// its viewing axis.
pub fn visible_size(
    depth: f32,
    vertical_fov_deg: f32,
    aspect: f32,
    camera_z_offset: f32,
) -> VisibleSize {
    let depth = if depth < camera_z_offset {
        depth - camera_z_offset
    } else {
        depth + camera_z_offset
    };
    let vfov = vertical_fov_deg.to_radians();
    let height = 2.0 * (vfov / 2.0).tan() * depth.abs();
    VisibleSize {
        width: height * aspect,
        height,
    }
}

/// Rows and columns of `gutter`-sized slots that fit in `size`, as `(rows, cols)`.
pub fn grid_dimensions(size: VisibleSize, gutter: f32) -> (u32, u32) {
    if !gutter.is_finite() || gutter <= 0.0 {
        return (0, 0);
    }
    let fit = |extent: f32| {
        let n = (extent / gutter).floor();
        if n.is_finite() && n > 0.0 {
            n as u32
        } else {
            0
        }
    };
    (fit(size.height), fit(size.width))
}
