use super::*;
use crate::basic::CENTRE_EPSILON;
use crate::pathfinding;
use std::collections::VecDeque;

#[derive(Debug, thiserror::Error)]
#[error("snake builder error: {1} (builder: {0:?})")]
#[must_use]
pub struct BuilderError(pub Box<Builder>, pub &'static str);

#[derive(Default, Clone, Debug)]
pub struct Builder {
    pub pos: Option<Position>,
    pub len: Option<usize>,
    pub steps_per_cell: Option<usize>,
    pub lag: Option<usize>,
    pub pathfinder: Option<pathfinding::Template>,
}

impl Builder {
    #[inline(always)]
    #[must_use]
    pub fn pos(mut self, value: Position) -> Self {
        self.pos = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn len(mut self, value: usize) -> Self {
        self.len = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn steps_per_cell(mut self, value: usize) -> Self {
        self.steps_per_cell = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn lag(mut self, value: usize) -> Self {
        self.lag = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn pathfinder(mut self, value: pathfinding::Template) -> Self {
        self.pathfinder = Some(value);
        self
    }

    pub fn build(&self, board_dim: CellDim) -> Result<Snake, BuilderError> {
        let err = |msg| BuilderError(Box::new(self.clone()), msg);

        let pos = self.pos.ok_or_else(|| err("missing start position"))?;
        let len = self.len.unwrap_or(Snake::MIN_LEN);
        let steps_per_cell = self.steps_per_cell.unwrap_or(1);
        // by default each segment trails one full cell behind
        let lag = self.lag.unwrap_or(steps_per_cell);

        if len < Snake::MIN_LEN {
            return Err(err("a snake needs at least a head and one trailing segment"));
        }
        if steps_per_cell == 0 {
            return Err(err("steps_per_cell must be positive"));
        }
        if 1. / steps_per_cell as f32 <= CENTRE_EPSILON {
            return Err(err("steps_per_cell too large, a step would not leave the cell centre"));
        }
        if lag == 0 {
            return Err(err("lag must be positive"));
        }
        if !pos.to_cell(board_dim).is_in(board_dim) {
            return Err(err("start position outside of the grid"));
        }
        if !pos.is_cell_centre(board_dim) {
            return Err(err("start position must be a cell centre"));
        }

        Ok(Snake {
            body: Body {
                segments: vec![pos; len],
                queues: vec![VecDeque::new(); len],
                dir: None,
            },
            state: State::Moving,
            step: 1. / steps_per_cell as f32,
            lag,
            pathfinder: self.pathfinder.clone().unwrap_or_default().into_pathfinder(),
            path: vec![],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIM: CellDim = CellDim::new(5, 5);

    #[test]
    fn defaults() {
        let snake = Builder::default()
            .pos(Position::centre_of(CellPos::new(2, 2), DIM))
            .build(DIM)
            .unwrap();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.body.queues.len(), 2);
        assert_eq!(snake.lag, 1);
        assert_eq!(snake.state(), State::Moving);
    }

    #[test]
    fn rejects_bad_parameters() {
        let centre = Position::centre_of(CellPos::new(2, 2), DIM);
        for (builder, msg) in [
            (Builder::default(), "missing start position"),
            (Builder::default().pos(centre).len(1), "a snake needs at least a head and one trailing segment"),
            (Builder::default().pos(centre).steps_per_cell(0), "steps_per_cell must be positive"),
            (Builder::default().pos(centre).lag(0), "lag must be positive"),
            (
                Builder::default().pos(centre).steps_per_cell(1000),
                "steps_per_cell too large, a step would not leave the cell centre",
            ),
            (Builder::default().pos(Position::new(10., 0.)), "start position outside of the grid"),
            (Builder::default().pos(Position::new(0.2, 0.)), "start position must be a cell centre"),
        ] {
            match builder.build(DIM) {
                Err(BuilderError(_, m)) => assert_eq!(m, msg),
                Ok(_) => panic!("expected {:?}", msg),
            }
        }
    }

    #[test]
    fn finest_accepted_step_still_moves() {
        let mut grid = Grid::seeded(5, 1, 0);
        let start = Position::centre_of(CellPos::new(0, 0), grid.dim());
        let mut snake = Builder::default()
            .pos(start)
            .steps_per_cell(999)
            .build(grid.dim())
            .unwrap();
        snake.spawn(&mut grid).unwrap();
        for _ in 0..3 {
            snake.move_dir(Dir::Right, &mut grid).unwrap();
        }
        assert!(snake.head().x > start.x);
        assert!(!snake.head().is_cell_centre(grid.dim()));
    }
}
