//! Bounded 2D grid of binary-state cells.
//!
//! The grid is row-major and fixed-size: resizing means building a new
//! `CellGrid`, never mutating dimensions in place. Each grid carries a
//! neighbor-index table precomputed at construction, so alive-neighbor
//! counting is a branch-free scan over at most 8 indices. Edges are
//! bounded (no wraparound): interior cells have 8 neighbors, edge
//! non-corner cells 5, corners 3.

use std::fmt;

/// State of a single cell. Cells are plain values with no identity
/// beyond their grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Alive,
    Dead,
}

impl CellState {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    pub fn toggled(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }
}

/// Fixed-size rectangular grid of cells plus its neighbor-index table.
#[derive(Clone, Debug)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
    /// For each cell index, the valid neighbor indices among the 8
    /// compass directions, truncated at the grid boundary. Immutable
    /// after construction.
    neighbors: Vec<Vec<u32>>,
}

impl CellGrid {
    /// Create a grid with every cell dead. Builds the neighbor table in
    /// O(width * height).
    pub fn new(width: usize, height: usize) -> Self {
        let cells = vec![CellState::Dead; width * height];
        let neighbors = Self::build_neighbor_table(width, height);
        Self {
            width,
            height,
            cells,
            neighbors,
        }
    }

    fn build_neighbor_table(width: usize, height: usize) -> Vec<Vec<u32>> {
        let mut table = vec![Vec::new(); width * height];

        for y in 0..height {
            for x in 0..width {
                let idx = y * width + x;
                for dy in -1i32..=1 {
                    for dx in -1i32..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let nx = x as i32 + dx;
                        let ny = y as i32 + dy;
                        if nx >= 0 && nx < width as i32 && ny >= 0 && ny < height as i32 {
                            let neighbor_idx = (ny as usize) * width + (nx as usize);
                            table[idx].push(neighbor_idx as u32);
                        }
                    }
                }
            }
        }

        table
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// True when `self` and `other` have the same width and height.
    #[inline]
    pub fn same_dimensions(&self, other: &CellGrid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Read-only view of the cell states, row-major.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    #[inline]
    fn coords_in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Cell state at (x, y), or `None` out of range.
    pub fn state_at(&self, x: usize, y: usize) -> Option<CellState> {
        if self.coords_in_bounds(x, y) {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    #[inline]
    pub fn state_at_index(&self, index: usize) -> CellState {
        self.cells[index]
    }

    /// Number of alive neighbors of the cell at `index`. O(<=8) scan of
    /// the precomputed table; no bounds checks needed, the table already
    /// excludes out-of-range neighbors.
    #[inline]
    pub fn alive_neighbor_count(&self, index: usize) -> usize {
        self.neighbors[index]
            .iter()
            .filter(|&&n| self.cells[n as usize].is_alive())
            .count()
    }

    /// Next-generation state of the cell at `index`: birth on exactly 3
    /// alive neighbors, survival on 2 or 3, death otherwise.
    pub fn next_state(&self, index: usize) -> CellState {
        match self.alive_neighbor_count(index) {
            3 => CellState::Alive,
            2 if self.cells[index].is_alive() => CellState::Alive,
            _ => CellState::Dead,
        }
    }

    /// Set the cell at (x, y). Returns `false` (and leaves the grid
    /// untouched) for out-of-range coordinates; UI-driven input must
    /// never panic here.
    pub fn set_cell(&mut self, x: usize, y: usize, state: CellState) -> bool {
        if !self.coords_in_bounds(x, y) {
            return false;
        }
        self.cells[y * self.width + x] = state;
        true
    }

    /// Toggle the cell at (x, y). Returns `false` for out-of-range
    /// coordinates.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> bool {
        if !self.coords_in_bounds(x, y) {
            return false;
        }
        let idx = y * self.width + x;
        self.cells[idx] = self.cells[idx].toggled();
        true
    }

    /// Overwrite every cell with `state`, keeping dimensions.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Replace all cell states at once. `new_cells` must match the
    /// grid's cell count.
    pub(crate) fn replace_cells(&mut self, new_cells: Vec<CellState>) {
        debug_assert_eq!(new_cells.len(), self.cells.len());
        self.cells = new_cells;
    }

    /// True iff no cell is alive. Scans center-outward (stamped patterns
    /// sit centered, so a live cell is most likely found near the middle)
    /// and returns at the first alive cell.
    pub fn all_dead(&self) -> bool {
        for y in center_out_order(self.height) {
            let row = &self.cells[y * self.width..(y + 1) * self.width];
            for x in center_out_order(self.width) {
                if row[x].is_alive() {
                    return false;
                }
            }
        }
        true
    }
}

/// Visit `0..n` starting from the middle and fanning outward.
fn center_out_order(n: usize) -> impl Iterator<Item = usize> {
    let mid = n / 2;
    (0..2 * n).filter_map(move |i| {
        let step = i.div_ceil(2);
        if i % 2 == 0 {
            mid.checked_add(step).filter(|&v| v < n)
        } else {
            mid.checked_sub(step)
        }
    })
}

/// Two grids are equal iff same width, height, and identical cell states
/// in order. The neighbor table is derived from the dimensions and is
/// not compared.
impl PartialEq for CellGrid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for CellGrid {}

impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let mark = if self.cells[y * self.width + x].is_alive() {
                    " # "
                } else {
                    " . "
                };
                f.write_str(mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
