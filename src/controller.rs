//! Orchestration of the live grid, its back buffer, and the recompute
//! state machine.
//!
//! The controller runs on a single logical owner context. Advancing a
//! generation is an O(1) swap of the two owned grid slots; the next
//! generation is always recomputed in the background by a scheduler job
//! and delivered over a channel the owner drains (`poll` /
//! `wait_idle`). Recompute requests arriving while a job is in flight
//! coalesce into a single follow-up run, so at most one job exists per
//! controller at any instant. A completion whose dimensions no longer
//! match the live grid (a resize raced the run) is discarded and the
//! computation restarted.

use std::mem;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{CellGrid, CellState};
use crate::presets::{PresetPattern, SeedKind};
use crate::scheduler::{self, ComputedGeneration};

/// Granularity of the recv slices inside `wait_idle`, so a job that died
/// without delivering is noticed before the caller's deadline.
const WAIT_SLICE: Duration = Duration::from_millis(25);

/// Engine-level tunables: chunk granularity for the scheduler, random
/// seeding density, and the RNG seed.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    /// Cells per scheduler chunk.
    pub chunk_size: usize,
    /// Random seeding density: each cell is alive with probability
    /// 1-in-N.
    pub random_alive_one_in: u32,
    /// RNG seed for reproducible random seeding and expansion fill.
    pub seed: u64,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            random_alive_one_in: 6,
            seed: 0,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("degenerate grid size {width}x{height}: both dimensions must be at least 1")]
    DegenerateGridSize { width: usize, height: usize },
}

/// Notification fired on the owner context once per completed,
/// non-discarded recomputation. Carries no payload; consumers re-read
/// `grid()` / `is_busy()`.
pub type GenerationObserver = Box<dyn FnMut()>;

pub struct GridController {
    /// The grid currently displayed/editable.
    live: CellGrid,
    /// The in-progress or completed next generation. Same dimensions as
    /// `live` whenever no recomputation is in flight and no resize just
    /// happened.
    buffer: CellGrid,
    /// Copy of `live` at generation 0, restored by
    /// `reset_to_initial_snapshot`.
    initial_snapshot: CellGrid,
    generation_count: u64,
    /// A recomputation is currently running.
    busy: bool,
    /// At least one recompute request arrived while busy; coalesced
    /// into one follow-up run.
    pending: bool,
    /// Last selected seed, deciding the fill policy for cells exposed
    /// by grid growth.
    seed_kind: Option<SeedKind>,
    params: EngineParams,
    rng: StdRng,
    completion_tx: Sender<ComputedGeneration>,
    completion_rx: Receiver<ComputedGeneration>,
    job: Option<JoinHandle<()>>,
    observer: Option<GenerationObserver>,
}

impl GridController {
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        Self::with_params(width, height, EngineParams::default())
    }

    pub fn with_params(
        width: usize,
        height: usize,
        params: EngineParams,
    ) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::DegenerateGridSize { width, height });
        }
        let live = CellGrid::new(width, height);
        let (completion_tx, completion_rx) = mpsc::channel();
        Ok(Self {
            buffer: live.clone(),
            initial_snapshot: live.clone(),
            live,
            generation_count: 0,
            busy: false,
            pending: false,
            seed_kind: None,
            rng: StdRng::seed_from_u64(params.seed),
            params,
            completion_tx,
            completion_rx,
            job: None,
            observer: None,
        })
    }

    /// Register the generation-ready notification. Invoked on the owner
    /// context while draining completions.
    pub fn set_observer(&mut self, observer: impl FnMut() + 'static) {
        self.observer = Some(Box::new(observer));
    }

    // --- Queries -------------------------------------------------------

    /// Read-only view of the current live grid.
    pub fn grid(&self) -> &CellGrid {
        &self.live
    }

    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn seed_kind(&self) -> Option<SeedKind> {
        self.seed_kind
    }

    pub fn has_only_dead_cells(&self) -> bool {
        self.live.all_dead()
    }

    // --- Mutators ------------------------------------------------------

    /// Swap the live grid with whatever the buffer currently holds and
    /// bump the generation counter, then kick off recomputation for the
    /// new live grid. Never waits: an in-flight run keeps going and its
    /// result lands in the buffer for the next advance.
    pub fn advance(&mut self) {
        if self.generation_count == 0 {
            self.initial_snapshot = self.live.clone();
        }
        if !self.buffer.same_dimensions(&self.live) {
            // A reset/resize outran the buffer; never swap stale-sized
            // contents into view.
            self.buffer = CellGrid::new(self.live.width(), self.live.height());
        }
        mem::swap(&mut self.live, &mut self.buffer);
        self.generation_count += 1;
        self.request_recompute();
    }

    /// Seed the grid: stamp a preset centered, or randomize sparsely.
    /// Resets the generation counter and retakes the initial snapshot.
    pub fn set_initial_state(&mut self, kind: SeedKind) {
        self.generation_count = 0;
        self.seed_kind = Some(kind);
        match kind.pattern() {
            Some(pattern) => self.stamp_centered(pattern),
            None => self.randomize_live(),
        }
        self.initial_snapshot = self.live.clone();
        self.request_recompute();
    }

    /// Rebuild the live grid at a new size, keeping the old content
    /// centered. Newly exposed cells are dead, unless the active seed is
    /// random (fresh sparse draw) or a preset whose bounding box was
    /// clipped by the old grid and now fits (those coordinates are
    /// re-stamped). The generation counter is untouched.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> Result<(), EngineError> {
        if new_width == 0 || new_height == 0 {
            return Err(EngineError::DegenerateGridSize {
                width: new_width,
                height: new_height,
            });
        }

        let old_width = self.live.width();
        let old_height = self.live.height();
        let off_x = centering_offset(new_width, old_width);
        let off_y = centering_offset(new_height, old_height);
        let fill_random = self.seed_kind == Some(SeedKind::Random);
        let one_in = self.params.random_alive_one_in.max(1);

        let mut next = CellGrid::new(new_width, new_height);
        for y in 0..new_height {
            for x in 0..new_width {
                let old_x = x as i32 - off_x;
                let old_y = y as i32 - off_y;
                let copied = (old_x >= 0 && old_y >= 0)
                    .then(|| self.live.state_at(old_x as usize, old_y as usize))
                    .flatten();
                let state = match copied {
                    Some(state) => state,
                    // Expansion fill policy: growth under a preset seed
                    // must not resurrect random noise outside it.
                    None if fill_random && self.rng.random_range(0..one_in) == 0 => {
                        CellState::Alive
                    }
                    None => CellState::Dead,
                };
                next.set_cell(x, y, state);
            }
        }

        if let Some(pattern) = self.seed_kind.and_then(SeedKind::pattern) {
            restamp_clipped(
                &mut next,
                pattern,
                (old_width, old_height),
                (new_width, new_height),
            );
        }

        self.initial_snapshot = remap_centered(&self.initial_snapshot, new_width, new_height);
        self.live = next;
        self.buffer = CellGrid::new(new_width, new_height);
        self.request_recompute();
        Ok(())
    }

    /// Restore the generation-0 snapshot by swapping it with the live
    /// grid, and reset the counter.
    pub fn reset_to_initial_snapshot(&mut self) {
        mem::swap(&mut self.live, &mut self.initial_snapshot);
        self.generation_count = 0;
        self.request_recompute();
    }

    /// Kill every cell and forget the seed selection.
    pub fn clear(&mut self) {
        self.live.fill(CellState::Dead);
        self.generation_count = 0;
        self.seed_kind = None;
        self.initial_snapshot = self.live.clone();
        self.request_recompute();
    }

    /// Direct edit of the live grid; `false` no-op out of range. Does
    /// not trigger recomputation; call `refresh` after an edit burst.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> bool {
        self.live.toggle_cell(x, y)
    }

    /// Direct edit of the live grid; `false` no-op out of range.
    pub fn set_cell(&mut self, x: usize, y: usize, state: CellState) -> bool {
        self.live.set_cell(x, y, state)
    }

    /// Request a fresh recomputation of the buffer from the current
    /// live grid, e.g. after a burst of cell edits.
    pub fn refresh(&mut self) {
        self.request_recompute();
    }

    // --- Completion processing (owner context) -------------------------

    /// Drain completed recomputations without blocking, applying the
    /// state machine and firing the observer once per kept result.
    pub fn poll(&mut self) {
        while let Ok(done) = self.completion_rx.try_recv() {
            self.handle_completion(done);
        }
        self.recover_from_dead_job();
    }

    /// Block the owner until no computation is running or pending, or
    /// until `timeout` elapses. Returns `true` when idle was reached.
    pub fn wait_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.poll();
            if !self.busy && !self.pending {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            let slice = WAIT_SLICE.min(deadline - now);
            match self.completion_rx.recv_timeout(slice) {
                Ok(done) => self.handle_completion(done),
                Err(RecvTimeoutError::Timeout) => {}
                // Unreachable while self holds a sender clone.
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }
    }

    fn request_recompute(&mut self) {
        if self.busy {
            debug!("recompute requested while computing; coalesced");
            self.pending = true;
            return;
        }
        if !self.buffer.same_dimensions(&self.live) {
            self.buffer = CellGrid::new(self.live.width(), self.live.height());
        }
        self.busy = true;
        debug!(
            "scheduling recompute for {}x{} grid",
            self.live.width(),
            self.live.height()
        );
        self.job = Some(scheduler::spawn_recompute(
            self.live.clone(),
            self.params.chunk_size,
            self.completion_tx.clone(),
        ));
    }

    fn handle_completion(&mut self, done: ComputedGeneration) {
        if let Some(job) = self.job.take() {
            // The message is sent last, so the job is already winding
            // down; this join does not stall the owner.
            let _ = job.join();
        }
        self.busy = false;

        if !done.grid.same_dimensions(&self.live) {
            warn!(
                "discarding {}x{} result; live grid is now {}x{}",
                done.grid.width(),
                done.grid.height(),
                self.live.width(),
                self.live.height()
            );
            self.pending = false;
            self.request_recompute();
            return;
        }

        self.buffer = done.grid;
        debug!("generation buffer ready (generation {})", self.generation_count);
        if let Some(observer) = self.observer.as_mut() {
            observer();
        }
        if self.pending {
            self.pending = false;
            self.request_recompute();
        }
    }

    /// A job whose thread exited without delivering a completion died
    /// mid-computation; treat that as entitlement to an immediate
    /// reschedule rather than leaving the machine stuck in Computing.
    fn recover_from_dead_job(&mut self) {
        if !self.busy || !self.job.as_ref().is_some_and(JoinHandle::is_finished) {
            return;
        }
        // The send happens before the thread exits, so one more drain
        // is conclusive.
        if let Ok(done) = self.completion_rx.try_recv() {
            self.handle_completion(done);
            return;
        }
        if let Some(job) = self.job.take() {
            if let Err(panic) = job.join() {
                warn!("recompute job panicked: {:?}; rescheduling", panic);
            }
        }
        self.busy = false;
        self.pending = false;
        self.request_recompute();
    }

    // --- Seeding helpers -----------------------------------------------

    fn stamp_centered(&mut self, pattern: &PresetPattern) {
        self.live.fill(CellState::Dead);
        let off_x = centering_offset(self.live.width(), pattern.width);
        let off_y = centering_offset(self.live.height(), pattern.height);
        for &(x, y) in pattern.alive_cells {
            let gx = x + off_x;
            let gy = y + off_y;
            if gx >= 0 && gy >= 0 {
                // set_cell rejects coordinates past the far edges.
                self.live.set_cell(gx as usize, gy as usize, CellState::Alive);
            }
        }
    }

    fn randomize_live(&mut self) {
        let one_in = self.params.random_alive_one_in.max(1);
        for y in 0..self.live.height() {
            for x in 0..self.live.width() {
                let state = if self.rng.random_range(0..one_in) == 0 {
                    CellState::Alive
                } else {
                    CellState::Dead
                };
                self.live.set_cell(x, y, state);
            }
        }
    }
}

impl Drop for GridController {
    fn drop(&mut self) {
        // Let an in-flight job finish; it is bounded and its send to
        // the dropped receiver is ignored.
        if let Some(job) = self.job.take() {
            let _ = job.join();
        }
    }
}

/// Offset that centers a span of `inner_dim` cells inside `outer_dim`,
/// truncating toward zero (negative when the inner span is larger).
fn centering_offset(outer_dim: usize, inner_dim: usize) -> i32 {
    (outer_dim as i32 - inner_dim as i32) / 2
}

fn coord_in_bounds(x: i32, y: i32, width: usize, height: usize) -> bool {
    x >= 0 && (x as usize) < width && y >= 0 && (y as usize) < height
}

/// Stamp the preset coordinates that were clipped by the old grid but
/// fit the new one, using each grid's own centering offset.
fn restamp_clipped(
    grid: &mut CellGrid,
    pattern: &PresetPattern,
    (old_width, old_height): (usize, usize),
    (new_width, new_height): (usize, usize),
) {
    let old_off_x = centering_offset(old_width, pattern.width);
    let old_off_y = centering_offset(old_height, pattern.height);
    let new_off_x = centering_offset(new_width, pattern.width);
    let new_off_y = centering_offset(new_height, pattern.height);

    for &(x, y) in pattern.alive_cells {
        let was_visible = coord_in_bounds(x + old_off_x, y + old_off_y, old_width, old_height);
        let nx = x + new_off_x;
        let ny = y + new_off_y;
        if !was_visible && coord_in_bounds(nx, ny, new_width, new_height) {
            grid.set_cell(nx as usize, ny as usize, CellState::Alive);
        }
    }
}

/// Copy `source` into a freshly sized grid with the centering
/// translation; cells outside the source stay dead.
fn remap_centered(source: &CellGrid, new_width: usize, new_height: usize) -> CellGrid {
    let off_x = centering_offset(new_width, source.width());
    let off_y = centering_offset(new_height, source.height());
    let mut remapped = CellGrid::new(new_width, new_height);
    for y in 0..new_height {
        for x in 0..new_width {
            let old_x = x as i32 - off_x;
            let old_y = y as i32 - off_y;
            if old_x >= 0 && old_y >= 0 {
                if let Some(state) = source.state_at(old_x as usize, old_y as usize) {
                    remapped.set_cell(x, y, state);
                }
            }
        }
    }
    remapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::ACORN;
    use std::cell::Cell;
    use std::rc::Rc;

    const WAIT: Duration = Duration::from_secs(5);

    fn controller(width: usize, height: usize) -> GridController {
        GridController::new(width, height).unwrap()
    }

    fn seeded(width: usize, height: usize, seed: u64) -> GridController {
        GridController::with_params(
            width,
            height,
            EngineParams {
                seed,
                ..EngineParams::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_generation_count_after_n_advances() {
        let mut ctrl = controller(25, 25);
        ctrl.set_initial_state(SeedKind::Acorn);
        for _ in 0..5 {
            assert!(ctrl.wait_idle(WAIT));
            ctrl.advance();
        }
        assert_eq!(ctrl.generation_count(), 5);
    }

    #[test]
    fn test_lone_cell_dies_after_one_advance() {
        let mut ctrl = controller(9, 9);
        assert!(ctrl.toggle_cell(4, 4));
        ctrl.refresh();
        assert!(ctrl.wait_idle(WAIT));
        ctrl.advance();
        assert!(ctrl.has_only_dead_cells());
        assert_eq!(ctrl.generation_count(), 1);
    }

    #[test]
    fn test_plus_shape_exact_next_generation() {
        let mut ctrl = controller(3, 3);
        for (x, y) in [(1, 1), (1, 0), (0, 1), (2, 1), (1, 2)] {
            ctrl.toggle_cell(x, y);
        }
        ctrl.refresh();
        assert!(ctrl.wait_idle(WAIT));
        ctrl.advance();

        // Center dies with 4 neighbors, every diagonal is born with 3.
        let mut expected = CellGrid::new(3, 3);
        expected.fill(CellState::Alive);
        expected.set_cell(1, 1, CellState::Dead);
        assert_eq!(*ctrl.grid(), expected);
    }

    #[test]
    fn test_preset_stamp_readback() {
        let mut ctrl = controller(25, 25);
        ctrl.set_initial_state(SeedKind::Acorn);

        let off_x = (25 - ACORN.width as i32) / 2;
        let off_y = (25 - ACORN.height as i32) / 2;
        for &(x, y) in ACORN.alive_cells {
            assert_eq!(
                ctrl.grid().state_at((x + off_x) as usize, (y + off_y) as usize),
                Some(CellState::Alive)
            );
        }
        let alive_total = ctrl.grid().cells().iter().filter(|c| c.is_alive()).count();
        assert_eq!(alive_total, ACORN.alive_cells.len());
        assert_eq!(ctrl.generation_count(), 0);
    }

    #[test]
    fn test_random_seed_is_reproducible() {
        let mut a = seeded(25, 25, 42);
        let mut b = seeded(25, 25, 42);
        a.set_initial_state(SeedKind::Random);
        b.set_initial_state(SeedKind::Random);
        assert_eq!(*a.grid(), *b.grid());
        assert!(!a.has_only_dead_cells());
    }

    #[test]
    fn test_clear_and_stamp_flip_dead_flag() {
        let mut ctrl = controller(15, 15);
        ctrl.set_initial_state(SeedKind::Exploder);
        assert!(!ctrl.has_only_dead_cells());
        ctrl.clear();
        assert!(ctrl.has_only_dead_cells());
        assert_eq!(ctrl.generation_count(), 0);
        assert_eq!(ctrl.seed_kind(), None);
    }

    #[test]
    fn test_resize_then_immediate_advance() {
        let mut ctrl = seeded(20, 20, 9);
        ctrl.set_initial_state(SeedKind::Random);
        ctrl.resize(30, 30).unwrap();
        ctrl.advance();
        assert_eq!(ctrl.grid().width(), 30);
        assert_eq!(ctrl.grid().height(), 30);
        assert!(ctrl.wait_idle(WAIT));
        assert!(ctrl.buffer.same_dimensions(&ctrl.live));
    }

    #[test]
    fn test_degenerate_resize_is_rejected() {
        let mut ctrl = controller(10, 10);
        ctrl.set_initial_state(SeedKind::Acorn);
        let before = ctrl.grid().clone();
        assert_eq!(
            ctrl.resize(0, 10),
            Err(EngineError::DegenerateGridSize { width: 0, height: 10 })
        );
        assert_eq!(
            ctrl.resize(10, 0),
            Err(EngineError::DegenerateGridSize { width: 10, height: 0 })
        );
        assert_eq!(*ctrl.grid(), before);
    }

    #[test]
    fn test_resize_keeps_content_centered() {
        let mut ctrl = controller(9, 9);
        ctrl.toggle_cell(4, 4);
        ctrl.resize(11, 11).unwrap();
        assert_eq!(ctrl.grid().state_at(5, 5), Some(CellState::Alive));
        ctrl.resize(7, 7).unwrap();
        assert_eq!(ctrl.grid().state_at(3, 3), Some(CellState::Alive));
        let alive_total = ctrl.grid().cells().iter().filter(|c| c.is_alive()).count();
        assert_eq!(alive_total, 1);
    }

    #[test]
    fn test_growth_restamps_clipped_preset() {
        // Acorn is 7 wide; a 5x5 grid clips its leftmost and rightmost
        // columns. Growing to 9x9 must re-expose them.
        let mut ctrl = controller(5, 5);
        ctrl.set_initial_state(SeedKind::Acorn);
        let clipped = ctrl.grid().cells().iter().filter(|c| c.is_alive()).count();
        assert_eq!(clipped, ACORN.alive_cells.len() - 2);

        ctrl.resize(9, 9).unwrap();
        let off_x = (9 - ACORN.width as i32) / 2;
        let off_y = (9 - ACORN.height as i32) / 2;
        for &(x, y) in ACORN.alive_cells {
            assert_eq!(
                ctrl.grid().state_at((x + off_x) as usize, (y + off_y) as usize),
                Some(CellState::Alive),
                "missing acorn cell ({}, {}) after growth",
                x,
                y
            );
        }
        let alive_total = ctrl.grid().cells().iter().filter(|c| c.is_alive()).count();
        assert_eq!(alive_total, ACORN.alive_cells.len());
    }

    #[test]
    fn test_expansion_fill_policy() {
        // Under a preset seed, growth must not invent live cells.
        let mut ctrl = seeded(10, 10, 5);
        ctrl.set_initial_state(SeedKind::Acorn);
        for y in 0..10 {
            for x in 0..10 {
                ctrl.set_cell(x, y, CellState::Dead);
            }
        }
        ctrl.resize(20, 20).unwrap();
        assert!(ctrl.has_only_dead_cells());

        // Under a random seed, newly exposed cells draw fresh states.
        let mut ctrl = seeded(10, 10, 5);
        ctrl.set_initial_state(SeedKind::Random);
        for y in 0..10 {
            for x in 0..10 {
                ctrl.set_cell(x, y, CellState::Dead);
            }
        }
        ctrl.resize(20, 20).unwrap();
        assert!(!ctrl.has_only_dead_cells());
    }

    #[test]
    fn test_requests_coalesce_while_computing() {
        let mut ctrl = seeded(40, 40, 1);
        ctrl.set_initial_state(SeedKind::Random);
        assert!(ctrl.is_busy());
        ctrl.refresh();
        ctrl.refresh();
        assert!(ctrl.pending);
        assert!(ctrl.wait_idle(WAIT));
        assert!(!ctrl.busy);
        assert!(!ctrl.pending);
    }

    #[test]
    fn test_reseed_resize_storm_converges() {
        let mut ctrl = seeded(10, 10, 17);
        for size in [10usize, 25, 40, 15, 33] {
            ctrl.set_initial_state(SeedKind::Random);
            ctrl.resize(size, size).unwrap();
        }
        assert!(ctrl.wait_idle(WAIT));
        assert_eq!(ctrl.grid().width(), 33);
        assert_eq!(ctrl.grid().height(), 33);
        assert!(ctrl.buffer.same_dimensions(&ctrl.live));
    }

    #[test]
    fn test_reset_restores_initial_snapshot() {
        let mut ctrl = controller(15, 15);
        ctrl.set_initial_state(SeedKind::Acorn);
        let seeded_grid = ctrl.grid().clone();
        for _ in 0..3 {
            assert!(ctrl.wait_idle(WAIT));
            ctrl.advance();
        }
        assert_ne!(*ctrl.grid(), seeded_grid);

        ctrl.reset_to_initial_snapshot();
        assert_eq!(*ctrl.grid(), seeded_grid);
        assert_eq!(ctrl.generation_count(), 0);
    }

    #[test]
    fn test_observer_fires_once_per_kept_completion() {
        let count = Rc::new(Cell::new(0usize));
        let seen = Rc::clone(&count);

        let mut ctrl = controller(12, 12);
        ctrl.set_observer(move || seen.set(seen.get() + 1));
        ctrl.set_initial_state(SeedKind::Pulsar);
        assert!(ctrl.wait_idle(WAIT));
        assert_eq!(count.get(), 1);

        ctrl.advance();
        assert!(ctrl.wait_idle(WAIT));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_advance_on_fresh_controller_is_safe() {
        let mut ctrl = controller(10, 10);
        ctrl.advance();
        assert_eq!(ctrl.generation_count(), 1);
        assert!(ctrl.has_only_dead_cells());
        assert!(ctrl.wait_idle(WAIT));
    }

    #[test]
    fn test_refresh_picks_up_manual_edits() {
        let mut ctrl = controller(5, 5);
        for x in 1..4 {
            ctrl.toggle_cell(x, 2);
        }
        ctrl.refresh();
        assert!(ctrl.wait_idle(WAIT));
        ctrl.advance();

        // Horizontal blinker flips vertical.
        let mut expected = CellGrid::new(5, 5);
        for y in 1..4 {
            expected.set_cell(2, y, CellState::Alive);
        }
        assert_eq!(*ctrl.grid(), expected);
    }

    #[test]
    fn test_out_of_range_edits_are_noops() {
        let mut ctrl = controller(4, 4);
        assert!(!ctrl.toggle_cell(4, 0));
        assert!(!ctrl.set_cell(0, 4, CellState::Alive));
        assert!(ctrl.has_only_dead_cells());
    }

    #[test]
    fn test_degenerate_construction_is_rejected() {
        assert!(GridController::new(0, 5).is_err());
        assert!(GridController::new(5, 0).is_err());
    }
}
