//! Breadth-first turn solver.
//!
//! Key points:
//! - Nodes are literal `State`s, edges are the 9 turns in `Turn::ALL` order
//! - States are deduplicated by equivalence class, tracked as an FxHashSet of
//!   canonical states, so reorienting the cube never creates a new node
//! - The visited map keeps the literal state and the turn that produced it,
//!   which is all path reconstruction needs

use std::collections::VecDeque;

use log::{debug, info, trace};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::cube::State;
use crate::tables::PermutationTables;
use crate::turn::{format_turns, Turn};

/// Default number of expanded states between progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Search space exhausted after visiting {visited} states, the target is unreachable")]
    Unreachable { visited: usize },
    #[error("No solution within {max_depth} turns")]
    MaxDepthExceeded { max_depth: usize },
}

/// A snapshot of an in-progress search, handed to the progress hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    /// Depth of the state being expanded.
    pub depth: usize,
    /// States expanded so far.
    pub expanded: usize,
    /// Distinct states recorded so far, including the start.
    pub visited: usize,
    /// States waiting in the queue.
    pub frontier: usize,
}

type ProgressHook<'a> = Box<dyn Fn(&SearchProgress) + 'a>;

/// Finds shortest turn sequences between states.
///
/// The solver only borrows the permutation tables; build them once and share
/// them between solvers.
pub struct Solver<'a> {
    tables: &'a PermutationTables,
    max_depth: Option<usize>,
    progress_interval: usize,
    progress: Option<ProgressHook<'a>>,
}

/// Per-call search bookkeeping.
struct Search {
    /// Literal states mapped to the turn that produced them. The start state
    /// maps to `None`.
    visited: FxHashMap<State, Option<Turn>>,
    /// Canonical states of every visited equivalence class.
    seen_classes: FxHashSet<State>,
    /// States to expand, with their depth.
    frontier: VecDeque<(State, usize)>,
}

impl Search {
    fn new(initial: State, initial_class: State) -> Self {
        let mut visited = FxHashMap::default();
        visited.insert(initial, None);
        let mut seen_classes = FxHashSet::default();
        seen_classes.insert(initial_class);
        Self {
            visited,
            seen_classes,
            frontier: VecDeque::from([(initial, 0)]),
        }
    }
}

impl<'a> Solver<'a> {
    pub fn new(tables: &'a PermutationTables) -> Self {
        Self {
            tables,
            max_depth: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            progress: None,
        }
    }

    /// Stops expanding states once they are `max_depth` turns from the start.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Sets how many expansions happen between progress reports.
    #[must_use]
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Registers a hook that receives a `SearchProgress` every progress
    /// interval.
    #[must_use]
    pub fn with_progress(mut self, hook: impl Fn(&SearchProgress) + 'a) -> Self {
        self.progress = Some(Box::new(hook));
        self
    }

    /// The default target: every face filled with its own color.
    pub fn solved_state() -> State {
        State::solved()
    }

    /// Finds a shortest turn sequence from `initial` to the solved state.
    pub fn solve(&self, initial: &State) -> Result<Vec<Turn>, SolveError> {
        self.solve_to(initial, &Self::solved_state())
    }

    /// Finds a shortest turn sequence that takes `initial` to some orientation
    /// of `target`.
    ///
    /// Among several shortest sequences, the first one found in `Turn::ALL`
    /// order is returned, so results are deterministic.
    pub fn solve_to(&self, initial: &State, target: &State) -> Result<Vec<Turn>, SolveError> {
        let tables = self.tables;
        let initial_class = initial.canonical(tables);
        let target_class = target.canonical(tables);

        info!("Searching for a path to the target state");

        let mut search = Search::new(*initial, initial_class);
        let found = if initial_class == target_class {
            Some(*initial)
        } else {
            self.breadth_first(&mut search, target_class)?
        };

        let Some(found) = found else {
            info!(
                "Search exhausted after visiting {} states",
                search.visited.len()
            );
            return Err(SolveError::Unreachable {
                visited: search.visited.len(),
            });
        };

        let path = reconstruct_path(&search.visited, found, tables);
        debug_assert!(initial.apply_all(&path, tables) == found);
        info!(
            "Found {} turn solution after visiting {} states: {}",
            path.len(),
            search.visited.len(),
            format_turns(&path)
        );
        Ok(path)
    }

    /// Expands states until a member of `target_class` is recorded.
    ///
    /// Returns the literal visited state in the target's class, or `None` when
    /// the frontier runs dry.
    fn breadth_first(
        &self,
        search: &mut Search,
        target_class: State,
    ) -> Result<Option<State>, SolveError> {
        let tables = self.tables;
        let mut expanded = 0;
        let mut depth_limited = false;

        while let Some((state, depth)) = search.frontier.pop_front() {
            if self.max_depth.is_some_and(|max_depth| depth >= max_depth) {
                trace!("Not expanding state at depth {depth}");
                depth_limited = true;
                continue;
            }

            expanded += 1;
            if expanded % self.progress_interval == 0 {
                self.report(SearchProgress {
                    depth,
                    expanded,
                    visited: search.visited.len(),
                    frontier: search.frontier.len(),
                });
            }

            for turn in Turn::ALL {
                let next = state.apply(turn, tables);
                let class = next.canonical(tables);

                // skip if any orientation of this state was already visited
                if !search.seen_classes.insert(class) {
                    continue;
                }
                search.visited.insert(next, Some(turn));

                if class == target_class {
                    return Ok(Some(next));
                }
                search.frontier.push_back((next, depth + 1));
            }
        }

        match self.max_depth {
            Some(max_depth) if depth_limited => {
                info!("No solution within {max_depth} turns");
                Err(SolveError::MaxDepthExceeded { max_depth })
            }
            _ => Ok(None),
        }
    }

    fn report(&self, progress: SearchProgress) {
        debug!(
            "Depth {}: expanded {} states, visited {}, frontier {}",
            progress.depth, progress.expanded, progress.visited, progress.frontier
        );
        if let Some(hook) = &self.progress {
            hook(&progress);
        }
    }
}

/// Walks back from `found` to the start state by undoing recorded turns.
///
/// The start state is the only visited member of its own class, and it is the
/// only state mapped to `None`.
fn reconstruct_path(
    visited: &FxHashMap<State, Option<Turn>>,
    found: State,
    tables: &PermutationTables,
) -> Vec<Turn> {
    let mut path = Vec::new();
    let mut state = found;

    while let Some(Some(turn)) = visited.get(&state).copied() {
        path.push(turn);
        state = state.apply(turn.reverse(), tables);
    }

    path.reverse();
    path
}
