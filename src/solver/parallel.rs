use super::Solver;
use crate::board::{Board, Coord};
use crate::dictionary::Dictionary;
use crate::error::SolverError;
use std::iter;
use std::sync::atomic::{AtomicBool, Ordering as MemoryOrdering};
use std::sync::Arc;
use tracing::{debug, trace, warn};

use crossbeam::thread::ScopedJoinHandle;
use crossbeam_deque::{Injector, Stealer, Worker};
use crossbeam_utils::thread as crossbeam_thread;

/// the maximum batch size that a worker thread will pull from the global queue at once
const PULL_LIMIT: usize = 4;

/// a starting tile and its row-major index, so results can be put back in board order
type CellTask = (usize, Coord);

/// the words found from each searched starting tile
type CellWords = (usize, Vec<String>);

/// the result of a parallel solve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// every word found, one entry per path, in the same order `Solver::solve_board` gives
    pub words: Vec<String>,
    pub cells_searched: usize,
    pub total_cells: usize,
    /// the terminator was set before every starting tile was searched
    pub interrupted: bool,
}

/// runs the per-tile searches of a full solve on a pool of work-stealing threads.
/// the searches share the board and dictionary read-only.
pub struct ParallelSolver<'a> {
    board: &'a Board,
    dictionary: &'a Dictionary,
    num_worker_threads: usize,
    /// set by some outside mechanism (generally a signal handler) to stop handing
    /// out new starting tiles
    terminator: Arc<AtomicBool>,
}

impl<'a> ParallelSolver<'a> {
    pub fn new(board: &'a Board, dictionary: &'a Dictionary, num_worker_threads: usize) -> Self {
        Self {
            board,
            dictionary,
            num_worker_threads: num_worker_threads.max(1),
            terminator: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_terminator(mut self, terminator: Arc<AtomicBool>) -> Self {
        self.terminator = terminator;
        self
    }

    pub fn solve(&self) -> Result<Solution, SolverError> {
        let solver = Solver::new(self.board, self.dictionary);

        let global_queue: Injector<CellTask> = Injector::new();
        for task in self.board.coords().enumerate() {
            global_queue.push(task);
        }
        let total_cells = global_queue.len();

        let mut workers: Vec<Worker<CellTask>> = Vec::new();
        let mut stealers: Vec<Stealer<CellTask>> = Vec::new();
        for _ in 0..self.num_worker_threads {
            let w = Worker::new_fifo();
            stealers.push(w.stealer());
            workers.push(w);
        }

        let scope_result = crossbeam_thread::scope(|s| -> Result<Vec<CellWords>, SolverError> {
            let mut worker_threads: Vec<ScopedJoinHandle<'_, Vec<CellWords>>> = Vec::new();
            debug!(threads = self.num_worker_threads, "spawning solver worker threads");
            for (thread_num, local) in workers.into_iter().enumerate() {
                let global_queue = &global_queue;
                let stealers = &stealers;
                let solver = &solver;
                let terminator = &self.terminator;
                let handle = s
                    .builder()
                    .name(thread_num.to_string())
                    .spawn(move |_| search_cells(local, global_queue, stealers, solver, terminator))
                    .map_err(SolverError::Spawn)?;
                worker_threads.push(handle);
            }

            let mut found = Vec::with_capacity(total_cells);
            for handle in worker_threads {
                let name = handle.thread().name().unwrap_or("unnamed").to_owned();
                let cell_words = handle
                    .join()
                    .map_err(|_| SolverError::WorkerPanicked(name))?;
                found.extend(cell_words);
            }
            Ok(found)
        });

        let mut found = match scope_result {
            Ok(result) => result?,
            Err(_) => return Err(SolverError::WorkerPanicked("unjoined".to_owned())),
        };

        // restore row-major order
        found.sort_unstable_by_key(|(idx, _)| *idx);
        let cells_searched = found.len();
        let words: Vec<String> = found.into_iter().flat_map(|(_, words)| words).collect();

        let interrupted = cells_searched < total_cells;
        if interrupted {
            warn!(
                cells_searched,
                total_cells, "solve interrupted before every tile was searched"
            );
        }
        debug!(words = words.len(), cells_searched, "parallel solve finished");

        Ok(Solution {
            words,
            cells_searched,
            total_cells,
            interrupted,
        })
    }
}

fn search_cells(
    local: Worker<CellTask>,
    global_queue: &Injector<CellTask>,
    stealers: &[Stealer<CellTask>],
    solver: &Solver,
    terminator: &AtomicBool,
) -> Vec<CellWords> {
    let mut found = Vec::new();

    loop {
        if terminator.load(MemoryOrdering::SeqCst) {
            trace!(
                thread = std::thread::current().name().unwrap_or("unnamed"),
                "worker stopping on terminator"
            );
            break;
        }

        // modified from crossbeam::deque docs
        // pop a task from the local queue, if not empty.
        let task = local.pop().or_else(|| {
            // otherwise, we need to look for a task elsewhere.
            iter::repeat_with(|| {
                // try stealing a batch of tasks from the global queue.
                global_queue
                    .steal_batch_with_limit_and_pop(&local, PULL_LIMIT)
                    // or try stealing a task from one of the other threads.
                    .or_else(|| stealers.iter().map(|s| s.steal()).collect())
            })
            // loop while no task was stolen and any steal operation needs to be retried.
            .find(|s| !s.is_retry())
            // extract the stolen task, if there is one.
            .and_then(|s| s.success())
        });

        match task {
            Some((idx, start)) => found.push((idx, solver.words_from_cell(start))),
            // every tile was queued up front, so dry queues mean we're done
            None => break,
        }
    }

    trace!(
        thread = std::thread::current().name().unwrap_or("unnamed"),
        cells = found.len(),
        "worker finished"
    );
    found
}
