//! Chunked concurrent recomputation of the next generation.
//!
//! A recompute job runs on a dispatched background thread so the owner
//! context never blocks. Inside the job the cell index space is split
//! into fixed-size chunks and computed across the rayon worker pool:
//! every chunk reads only the snapshot grid and writes only its own
//! disjoint slice of the next-generation cells, so the chunk workers
//! need no synchronization. `for_each` joins every chunk before the job
//! sends its single completion message; the owner drains the channel on
//! its own context.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use rayon::prelude::*;

use crate::engine;
use crate::grid::{CellGrid, CellState};

/// Completed output of one recompute job: a grid of the snapshot's
/// dimensions holding the next generation.
pub struct ComputedGeneration {
    pub grid: CellGrid,
}

/// Dispatch one recompute job for `snapshot`, delivering exactly one
/// `ComputedGeneration` on `sender` after all chunks have been written.
///
/// The job takes ownership of the snapshot; its neighbor table is reused
/// for the result grid, which has identical dimensions by construction.
/// A grid smaller than one chunk is computed as a single chunk.
pub fn spawn_recompute(
    snapshot: CellGrid,
    chunk_size: usize,
    sender: Sender<ComputedGeneration>,
) -> JoinHandle<()> {
    let chunk_size = chunk_size.max(1);

    thread::spawn(move || {
        let mut next_cells = vec![CellState::Dead; snapshot.cell_count()];

        next_cells
            .par_chunks_mut(chunk_size)
            .enumerate()
            .for_each(|(chunk_index, out)| {
                engine::fill_chunk(&snapshot, chunk_index * chunk_size, out);
            });

        let mut grid = snapshot;
        grid.replace_cells(next_cells);

        // The receiver may already be gone during controller teardown.
        let _ = sender.send(ComputedGeneration { grid });
    })
}
