use super::{CellDim, CellPos, Dir};
use std::fmt::{Debug, Error, Formatter};

/// Height at which snake segments are drawn above the ground plane
pub const SEGMENT_Y: f32 = 0.5;

/// Cell centres are considered reached when this close; a move must be
/// longer than this or it gets snapped back onto the centre it left
pub const CENTRE_EPSILON: f32 = 1e-3;

/// Continuous world position; the grid lies in the x/z plane centred on the
/// origin, one world unit per cell
#[derive(Copy, Clone, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Debug for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

impl Position {
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, y: SEGMENT_Y, z }
    }

    /// World-space centre of `cell`
    pub fn centre_of(cell: CellPos, dim: CellDim) -> Self {
        let (rx, rz) = grid_radius(dim);
        Self::new(cell.x as f32 - rx + 0.5, cell.y as f32 - rz + 0.5)
    }

    /// The one mapping from world space to grid space: the cell whose centre
    /// is nearest, i.e. `round(p + radius - 0.5)` per axis. Exact midpoints
    /// between two centres resolve towards the larger index (`f32::round`
    /// on a non-negative value).
    pub fn to_cell(self, dim: CellDim) -> CellPos {
        let (rx, rz) = grid_radius(dim);
        CellPos {
            x: (self.x + rx - 0.5).round() as isize,
            y: (self.z + rz - 0.5).round() as isize,
        }
    }

    pub fn is_cell_centre(self, dim: CellDim) -> bool {
        let centre = Self::centre_of(self.to_cell(dim), dim);
        (self.x - centre.x).abs() < CENTRE_EPSILON && (self.z - centre.z).abs() < CENTRE_EPSILON
    }

    #[must_use]
    pub fn step(self, dir: Dir, dist: f32) -> Self {
        let (dx, dz) = dir.world_delta();
        Self {
            x: self.x + dx * dist,
            y: self.y,
            z: self.z + dz * dist,
        }
    }

    /// Pull the position back onto the nearest cell centre, removing
    /// accumulated float error after a full cell transition
    #[must_use]
    pub fn snapped(self, dim: CellDim) -> Self {
        if self.is_cell_centre(dim) {
            Self::centre_of(self.to_cell(dim), dim)
        } else {
            self
        }
    }
}

fn grid_radius(dim: CellDim) -> (f32, f32) {
    (dim.x as f32 / 2., dim.y as f32 / 2.)
}
