//! Stateless generation-advance rule.
//!
//! Kept separate from the controller so the scheduler can apply the rule
//! uniformly per chunk without knowing anything about buffering or the
//! request state machine.

use crate::grid::{CellGrid, CellState};

/// Next-generation state for the cell at `index` of `grid`.
#[inline]
pub fn next_state_for(grid: &CellGrid, index: usize) -> CellState {
    grid.next_state(index)
}

/// Fill `out` with the next states of the cells in
/// `[chunk_start, chunk_start + out.len())`. Reads only `grid`; this is
/// the unit of work one scheduler chunk performs.
pub fn fill_chunk(grid: &CellGrid, chunk_start: usize, out: &mut [CellState]) {
    for (offset, slot) in out.iter_mut().enumerate() {
        *slot = grid.next_state(chunk_start + offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_cell_dies() {
        let mut grid = CellGrid::new(5, 5);
        grid.set_cell(2, 2, CellState::Alive);
        for index in 0..grid.cell_count() {
            assert_eq!(next_state_for(&grid, index), CellState::Dead);
        }
    }

    #[test]
    fn test_block_still_life_survives() {
        let mut grid = CellGrid::new(4, 4);
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            grid.set_cell(x, y, CellState::Alive);
        }
        let mut next = vec![CellState::Dead; grid.cell_count()];
        fill_chunk(&grid, 0, &mut next);
        assert_eq!(next, grid.cells());
    }

    #[test]
    fn test_fill_chunk_respects_offset() {
        // Plus shape in a 3x3 grid: center and its 4 orthogonal
        // neighbors alive. One generation later the center dies (4
        // neighbors) and every diagonal is born (3 neighbors each), so
        // the exact result is a ring of 8 alive cells.
        let mut grid = CellGrid::new(3, 3);
        for (x, y) in [(1, 1), (1, 0), (0, 1), (2, 1), (1, 2)] {
            grid.set_cell(x, y, CellState::Alive);
        }

        let mut next = vec![CellState::Dead; 9];
        let (head, tail) = next.split_at_mut(4);
        fill_chunk(&grid, 0, head);
        fill_chunk(&grid, 4, tail);

        let expected: Vec<CellState> = (0..9)
            .map(|i| if i == 4 { CellState::Dead } else { CellState::Alive })
            .collect();
        assert_eq!(next, expected);
    }
}
