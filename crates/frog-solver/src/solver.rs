//! Exhaustive breadth-first search over frog arrangements.
//!
//! The search never exits early: every node is expanded, and every time a
//! destination arrangement is generated its path is handed to the caller.
//! Arrangements are not deduplicated, so the same board may be reached (and
//! reported) through different move sequences.

use std::collections::VecDeque;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::error::SolveError;
use crate::moves::generate;
use crate::printer::SolutionPath;
use crate::puzzle::Arrangement;
use crate::tree::{NodeId, SearchTree};

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Arrangement the search starts from
    pub initial: Arrangement,
    /// Release fruitless branches as soon as they are exhausted
    pub prune: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial: Arrangement::initial(),
            prune: true,
        }
    }
}

/// Counters collected over a full search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Nodes taken off the queue and expanded
    pub expanded: usize,
    /// Successor nodes created
    pub generated: usize,
    /// Destination arrangements reported
    pub solutions: usize,
    /// Expanded nodes with no legal move
    pub dead_ends: usize,
    /// Highest number of tree nodes held at once
    pub peak_live_nodes: usize,
    /// Tree nodes released by pruning
    pub released_nodes: usize,
    /// Moves in the first (and therefore shortest) solution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortest_solution: Option<usize>,
    pub time_elapsed_ms: u64,
}

/// Result of [`solve_all`]
#[derive(Debug, Clone, Serialize)]
pub struct SolverResult {
    pub solutions: Vec<SolutionPath>,
    pub stats: SearchStats,
}

/// Run the search, calling `on_solution` for every destination as it is
/// discovered.
///
/// An error from reconstruction or from the callback stops the search at
/// once and is returned unchanged.
pub fn search<F>(config: &SolverConfig, mut on_solution: F) -> Result<SearchStats, SolveError>
where
    F: FnMut(&SolutionPath) -> Result<(), SolveError>,
{
    let start_time = Instant::now();
    let mut stats = SearchStats::default();

    let mut tree = SearchTree::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    queue.push_back(tree.root(config.initial));

    while let Some(node) = queue.pop_front() {
        tree.dequeue(node);
        stats.expanded += 1;

        let current = tree.arrangement(node).copied();
        debug_assert!(current.is_some(), "queued node {} was released", node);
        let Some(current) = current else {
            continue;
        };
        debug_assert!(current.is_conserved(), "token census broken: {}", current);

        let successors = generate(&current);
        trace!(%node, arrangement = %current, successors = successors.len(), "expand");

        if successors.is_empty() {
            stats.dead_ends += 1;
            if config.prune {
                tree.detach_if_dead(node);
            }
            continue;
        }

        for successor in successors {
            let child = tree.attach(node, successor);
            queue.push_back(child);
            stats.generated += 1;

            if successor.is_destination() {
                let path = SolutionPath::reconstruct(&tree, child)?;
                stats.solutions += 1;
                stats.shortest_solution.get_or_insert(path.len());
                debug!(moves = path.len(), found = stats.solutions, "solution found");
                on_solution(&path)?;
            }
        }
    }

    stats.peak_live_nodes = tree.peak_live();
    stats.released_nodes = tree.released();
    stats.time_elapsed_ms = start_time.elapsed().as_millis() as u64;

    info!(
        expanded = stats.expanded,
        solutions = stats.solutions,
        peak_live_nodes = stats.peak_live_nodes,
        released_nodes = stats.released_nodes,
        "search exhausted"
    );

    Ok(stats)
}

/// Run the search to completion and collect every solution.
pub fn solve_all(config: &SolverConfig) -> Result<SolverResult, SolveError> {
    let mut solutions = Vec::new();
    let stats = search(config, |path| {
        solutions.push(path.clone());
        Ok(())
    })?;
    Ok(SolverResult { solutions, stats })
}
