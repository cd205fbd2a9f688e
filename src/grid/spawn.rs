use rand::distributions::uniform::SampleRange;
use rand::Rng;

use super::CellContent;

// path marks are only drawn, the cell underneath is still empty
fn is_free(content: CellContent) -> bool {
    matches!(content, CellContent::Empty | CellContent::Path)
}

/// Index of a uniformly chosen free cell, `None` if there is none
pub fn random_empty_cell(cells: &[CellContent], rng: &mut impl Rng) -> Option<usize> {
    let free_spaces = cells.iter().filter(|c| is_free(**c)).count();
    if free_spaces == 0 {
        return None;
    }

    // the n-th free cell in row-major order
    let new_idx = (0..free_spaces).sample_single(rng);
    cells
        .iter()
        .enumerate()
        .filter(|(_, c)| is_free(**c))
        .nth(new_idx)
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use CellContent::*;

    #[test]
    fn only_free_cells_are_chosen() {
        let cells = [Obstacle, Empty, Snake, Pill, Empty, Obstacle];
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let idx = random_empty_cell(&cells, &mut rng).unwrap();
            assert!(idx == 1 || idx == 4, "picked {}", idx);
        }
    }

    #[test]
    fn path_marks_count_as_free() {
        let cells = [Snake, Path, Obstacle];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_empty_cell(&cells, &mut rng), Some(1));

        let mut seen = [false; 3];
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let cells = [Empty, Path, Path];
            seen[random_empty_cell(&cells, &mut rng).unwrap()] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn none_when_full() {
        let cells = [Obstacle, Snake, Pill];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_empty_cell(&cells, &mut rng), None);
    }
}
