use super::dir::Dir;
use std::{
    cmp::Ordering,
    fmt::{Debug, Error, Formatter},
};
use Dir::*;

// x grows to the right, y grows downwards (towards +z in world space)
#[derive(Eq, PartialEq, Copy, Clone, Add, Sub, Hash)]
pub struct CellPos {
    pub x: isize,
    pub y: isize,
}

pub type CellDim = CellPos;

impl CellPos {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    // checks if between (0,0) and dim
    pub fn is_in(self, dim: CellDim) -> bool {
        self.x >= 0 && self.x < dim.x && self.y >= 0 && self.y < dim.y
    }

    /// Row-major index into a `dim`-sized buffer, `None` when outside
    pub fn index_in(self, dim: CellDim) -> Option<usize> {
        self.is_in(dim)
            .then(|| (self.y * dim.x + self.x) as usize)
    }

    pub fn from_index(idx: usize, dim: CellDim) -> Self {
        Self {
            x: idx as isize % dim.x,
            y: idx as isize / dim.x,
        }
    }

    #[must_use]
    pub fn translate(self, dir: Dir, dist: usize) -> Self {
        let d = dist as isize;
        let mut new_pos = self;
        match dir {
            Up => new_pos.y -= d,
            Down => new_pos.y += d,
            Left => new_pos.x -= d,
            Right => new_pos.x += d,
        }
        new_pos
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as usize
    }

    /// Direction of a single orthogonal step from `self` to `other`,
    /// `None` unless exactly one axis differs
    pub fn dir_to(self, other: Self) -> Option<Dir> {
        let CellPos { x: dx, y: dy } = other - self;
        match (dx.signum(), dy.signum()) {
            (1, 0) => Some(Right),
            (-1, 0) => Some(Left),
            (0, 1) => Some(Down),
            (0, -1) => Some(Up),
            _ => None,
        }
    }

    pub fn cell_count(self) -> usize {
        (self.x.max(0) * self.y.max(0)) as usize
    }
}

impl Debug for CellPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl PartialOrd for CellPos {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// row-major, same order as the grid buffer
impl Ord for CellPos {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.y.cmp(&other.y) {
            Ordering::Equal => self.x.cmp(&other.x),
            ord => ord,
        }
    }
}

#[test]
fn test_dir_to() {
    let origin = CellPos::new(2, 2);
    for (other, expect) in [
        (CellPos::new(3, 2), Some(Right)),
        (CellPos::new(1, 2), Some(Left)),
        (CellPos::new(2, 3), Some(Down)),
        (CellPos::new(2, 1), Some(Up)),
        (CellPos::new(3, 3), None),
        (CellPos::new(2, 2), None),
    ] {
        assert_eq!(origin.dir_to(other), expect, "{:?} => {:?}", origin, other);
    }
}

#[test]
fn test_index_round_trip_and_bounds() {
    let dim = CellDim::new(4, 3);
    assert_eq!(CellPos::new(1, 2).index_in(dim), Some(9));
    assert_eq!(CellPos::from_index(9, dim), CellPos::new(1, 2));
    assert_eq!(CellPos::new(4, 0).index_in(dim), None);
    assert_eq!(CellPos::new(0, -1).index_in(dim), None);
}
