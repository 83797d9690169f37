//! Grid layout: where every cell sits and how the group is centred.
//!
//! Two patterns are supported. `Rectangular` is a plain rows x cols lattice.
//! `Crossed` alternates full rows with rows one cell shorter, inset by half a
//! gutter, which interleaves the cells diagonally.
//!
//! The grid is never patched in place: any layout-affecting change discards the
//! whole [`GridGroup`] and builds a new one. Positions depend only on the
//! [`GridConfig`]; shape assignment depends on the caller's RNG.

use crate::error::GridError;
use crate::shapes::ShapeDescriptor;
use crate::tween::Tween;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Crossed,
    Rectangular,
}

impl LayoutMode {
    pub fn name(self) -> &'static str {
        match self {
            LayoutMode::Crossed => "crossed",
            LayoutMode::Rectangular => "rectangular",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub rows: u32,
    pub cols: u32,
    pub gutter: f32,
    pub layout: LayoutMode,
}

impl GridConfig {
    pub fn new(rows: u32, cols: u32, gutter: f32, layout: LayoutMode) -> Self {
        Self {
            rows,
            cols,
            gutter,
            layout,
        }
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if !self.gutter.is_finite() || self.gutter < 0.0 {
            return Err(GridError::InvalidGutter(self.gutter));
        }
        Ok(())
    }

    /// Number of cells in `row`. Crossed layouts drop one cell on odd rows.
    pub fn row_len(&self, row: u32) -> u32 {
        match self.layout {
            LayoutMode::Rectangular => self.cols,
            LayoutMode::Crossed if row % 2 == 0 => self.cols,
            LayoutMode::Crossed => self.cols.saturating_sub(1),
        }
    }

    /// Total number of cells the layout produces.
    pub fn cell_count(&self) -> usize {
        (0..self.rows).map(|r| self.row_len(r) as usize).sum()
    }

    /// Base (ungrouped) position of the cell at `(row, col)`.
    pub fn base_position(&self, row: u32, col: u32) -> Vec3 {
        let g = self.gutter;
        let (r, c) = (row as f32, col as f32);
        match self.layout {
            LayoutMode::Rectangular => Vec3::new(c + c * g, 0.0, r + r * g),
            LayoutMode::Crossed => {
                let inset = if self.row_len(row) == self.cols { 0.0 } else { g / 2.0 };
                Vec3::new(c * g + inset, 0.0, r + r * (g / 2.0))
            }
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: crate::constants::DEFAULT_ROWS,
            cols: crate::constants::DEFAULT_COLS,
            gutter: crate::constants::DEFAULT_GUTTER,
            layout: LayoutMode::default(),
        }
    }
}

/// Row-major `(row, col, base_position)` triples for every cell of `config`.
pub fn cell_positions(config: &GridConfig) -> Vec<(u32, u32, Vec3)> {
    let mut out = Vec::with_capacity(config.cell_count());
    for row in 0..config.rows {
        for col in 0..config.row_len(row) {
            out.push((row, col, config.base_position(row, col)));
        }
    }
    out
}

/// Translation that puts the centre of the cells' X/Z bounding extent on the origin.
pub fn centering_offset(positions: &[(u32, u32, Vec3)]) -> Vec3 {
    if positions.is_empty() {
        return Vec3::ZERO;
    }
    let (lo, hi) = positions.iter().fold(
        (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
        |(lo, hi), (_, _, p)| (lo.min(*p), hi.max(*p)),
    );
    let centre = (lo + hi) * 0.5;
    Vec3::new(-centre.x, 0.0, -centre.z)
}

/// Running animations of one cell, one slot per animated property.
#[derive(Clone, Debug, Default)]
pub struct CellTweens {
    pub position_y: Option<Tween>,
    pub scale: Option<Tween>,
    pub rotation: [Option<Tween>; 3],
}

impl CellTweens {
    pub fn is_active(&self) -> bool {
        self.position_y.is_some() || self.scale.is_some() || self.rotation.iter().any(Option::is_some)
    }
}

#[derive(Clone, Debug)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub shape: ShapeDescriptor,
    pub base_position: Vec3,
    pub current_position: Vec3,
    pub current_scale: Vec3,
    pub current_rotation: Vec3,
    initial_rotation: Vec3,
    pub tweens: CellTweens,
}

impl Cell {
    pub fn new(row: u32, col: u32, base_position: Vec3, shape: ShapeDescriptor) -> Self {
        let rotation = shape.rotation();
        Self {
            row,
            col,
            shape,
            base_position,
            current_position: base_position,
            current_scale: Vec3::ONE,
            current_rotation: rotation,
            initial_rotation: rotation,
            tweens: CellTweens::default(),
        }
    }

    /// Rest orientation taken from the shape at creation; never changes.
    pub fn initial_rotation(&self) -> Vec3 {
        self.initial_rotation
    }

    pub fn is_animating(&self) -> bool {
        self.tweens.is_active()
    }
}

/// All cells of the grid plus the offset that centres them.
#[derive(Clone, Debug)]
pub struct GridGroup {
    pub config: GridConfig,
    pub offset: Vec3,
    cells: Vec<Cell>,
    row_starts: Vec<usize>,
}

impl GridGroup {
    pub fn empty(config: GridConfig) -> Self {
        Self {
            config,
            offset: Vec3::ZERO,
            cells: Vec::new(),
            row_starts: Vec::new(),
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&Cell> {
        let start = *self.row_starts.get(row as usize)?;
        if col >= self.config.row_len(row) {
            return None;
        }
        self.cells.get(start + col as usize)
    }

    /// Cell position in world space (group offset applied).
    pub fn world_position(&self, cell: &Cell) -> Vec3 {
        cell.current_position + self.offset
    }
}

/// Builds [`GridGroup`]s from a config and a pool of shapes.
#[derive(Clone, Debug)]
pub struct GridLayoutEngine {
    pool: Vec<ShapeDescriptor>,
}

impl GridLayoutEngine {
    pub fn new(pool: Vec<ShapeDescriptor>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &[ShapeDescriptor] {
        &self.pool
    }

    /// Lay out a fresh grid. Each cell draws its shape uniformly, with
    /// replacement, from the pool.
    pub fn layout<R: Rng + ?Sized>(
        &self,
        config: &GridConfig,
        rng: &mut R,
    ) -> Result<GridGroup, GridError> {
        if self.pool.is_empty() {
            return Err(GridError::EmptyShapePool);
        }
        config.validate()?;

        let positions = cell_positions(config);
        let mut group = GridGroup::empty(*config);
        group.offset = centering_offset(&positions);
        group.cells.reserve(positions.len());

        let mut last_row = None;
        for (row, col, base) in positions {
            if last_row != Some(row) {
                // rows that hold no cells still get an entry so indexing stays aligned
                while group.row_starts.len() <= row as usize {
                    group.row_starts.push(group.cells.len());
                }
                last_row = Some(row);
            }
            let shape = self.pool[rng.gen_range(0..self.pool.len())];
            group.cells.push(Cell::new(row, col, base, shape));
        }
        while group.row_starts.len() < config.rows as usize {
            group.row_starts.push(group.cells.len());
        }

        log::debug!(
            "[grid] {} layout {}x{} gutter={:.2} -> {} cells, offset=({:.2}, {:.2})",
            config.layout.name(),
            config.rows,
            config.cols,
            config.gutter,
            group.cells.len(),
            group.offset.x,
            group.offset.z
        );
        Ok(group)
    }
}
