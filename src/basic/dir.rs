use std::ops::Neg;

use Dir::*;

// defined in clockwise order starting at Up
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => Up,
            1 => Right,
            2 => Down,
            _ => Left,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from(self as u8 + 2)
    }
}

impl Dir {
    // clockwise order starting from Up
    pub fn iter() -> impl Iterator<Item = Self> {
        [Up, Right, Down, Left].iter().copied()
    }

    /// Unit vector in the world x/z plane
    pub fn world_delta(self) -> (f32, f32) {
        match self {
            Up => (0., -1.),
            Down => (0., 1.),
            Left => (-1., 0.),
            Right => (1., 0.),
        }
    }
}

#[test]
fn test_dir_neg() {
    for (dir, opposite) in [(Up, Down), (Right, Left), (Down, Up), (Left, Right)] {
        assert_eq!(-dir, opposite);
    }
}

#[test]
fn test_dir_from_wraps() {
    assert_eq!(Dir::from(4), Up);
    assert_eq!(Dir::from(7), Left);
}
