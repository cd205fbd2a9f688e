pub use cell_pos::{CellDim, CellPos};
pub use dir::Dir;
pub use position::{Position, CENTRE_EPSILON, SEGMENT_Y};

mod cell_pos;
mod dir;
mod position;
