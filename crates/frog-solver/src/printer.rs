//! Solution path reconstruction and rendering.
//!
//! A destination node is walked back to the root through its parent links.
//! Each move is recovered by diffing consecutive arrangements rather than
//! stored alongside the node.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::error::{PathError, SolveError};
use crate::puzzle::{Arrangement, Token};
use crate::tree::{NodeId, SearchTree};

/// A single frog moving into the gap, recovered from two arrangements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub frog: Token,
    /// 0-based slot the frog left
    pub from: usize,
    /// 0-based slot the frog landed in
    pub to: usize,
}

impl Step {
    /// 1-based landing position, as shown to the user
    pub fn position(&self) -> usize {
        self.to + 1
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frog '{}' leaps to gap at position {}",
            self.frog,
            self.position()
        )
    }
}

/// Work out which frog moved between `prev` and `next`.
///
/// `index` is the position of `next` in its path and only feeds the error.
pub fn describe_step(
    prev: &Arrangement,
    next: &Arrangement,
    index: usize,
) -> Result<Step, PathError> {
    let mut from = None;
    let mut to = None;
    let mut differing = 0;

    for (i, (before, after)) in prev.slots().iter().zip(next.slots()).enumerate() {
        if before.kind == after.kind {
            continue;
        }
        differing += 1;
        if after.is_gap() {
            from = Some(i);
        } else if before.is_gap() {
            to = Some(i);
        }
    }

    let invalid = PathError::InvalidStep { index, differing };
    match (from, to) {
        (Some(from), Some(to)) if differing == 2 => {
            let frog = prev.slots()[from];
            if next.slots()[to] != frog {
                return Err(invalid);
            }
            Ok(Step { frog, from, to })
        }
        _ => Err(invalid),
    }
}

/// Arrangements from the root to a destination, plus the move between each
/// consecutive pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionPath {
    pub arrangements: Vec<Arrangement>,
    pub steps: Vec<Step>,
}

impl SolutionPath {
    /// Build a path from a sequence of arrangements, validating every step.
    pub fn from_arrangements(arrangements: Vec<Arrangement>) -> Result<Self, PathError> {
        let steps = arrangements
            .windows(2)
            .enumerate()
            .map(|(i, pair)| describe_step(&pair[0], &pair[1], i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            arrangements,
            steps,
        })
    }

    /// Walk the parent chain of `node` back to the root.
    pub fn reconstruct(tree: &SearchTree, node: NodeId) -> Result<Self, PathError> {
        let ids = tree.path_to_root(node).map_err(PathError::MissingNode)?;
        let arrangements = ids
            .iter()
            .map(|&id| tree.arrangement(id).copied().ok_or(PathError::MissingNode(id)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_arrangements(arrangements)
    }

    /// Number of moves
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> Option<&Arrangement> {
        self.arrangements.first()
    }

    pub fn last(&self) -> Option<&Arrangement> {
        self.arrangements.last()
    }
}

impl fmt::Display for SolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "solution path is:")?;
        let mut arrangements = self.arrangements.iter();
        if let Some(root) = arrangements.next() {
            writeln!(f, "{}", root)?;
        }
        for (arrangement, step) in arrangements.zip(&self.steps) {
            writeln!(f, "{} ({})", arrangement, step)?;
        }
        Ok(())
    }
}

/// Reconstruct the path ending at `node` and write it to `out`.
///
/// Nothing is written unless the whole path checks out.
pub fn print_path<W: Write>(
    tree: &SearchTree,
    node: NodeId,
    out: &mut W,
) -> Result<SolutionPath, SolveError> {
    let path = SolutionPath::reconstruct(tree, node)?;
    write!(out, "{}", path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::generate;

    #[test]
    fn test_describe_step() {
        let initial = Arrangement::initial();
        let next = generate(&initial)[2];
        let step = describe_step(&initial, &next, 1).unwrap();

        assert_eq!(step.frog, Token::right(3));
        assert_eq!(step.from, 4);
        assert_eq!(step.to, 3);
        assert_eq!(step.to_string(), "frog 'R3' leaps to gap at position 4");
    }

    #[test]
    fn test_describe_hop() {
        let initial = Arrangement::initial();
        let next = generate(&initial)[1];
        let step = describe_step(&initial, &next, 1).unwrap();
        assert_eq!(step.to_string(), "frog 'L2' leaps to gap at position 4");
    }

    #[test]
    fn test_identical_arrangements_rejected() {
        let initial = Arrangement::initial();
        let err = describe_step(&initial, &initial, 5).unwrap_err();
        assert!(matches!(
            err,
            PathError::InvalidStep {
                index: 5,
                differing: 0
            }
        ));
    }

    #[test]
    fn test_two_moves_at_once_rejected() {
        let initial = Arrangement::initial();
        let first = generate(&initial)[0];
        let second = generate(&first)[0];
        let third = generate(&second)[0];

        let err = describe_step(&initial, &third, 1).unwrap_err();
        assert!(matches!(err, PathError::InvalidStep { .. }));
    }

    #[test]
    fn test_frog_swap_without_gap_rejected() {
        // Two frogs trading places never happens in a legal move
        let initial = Arrangement::initial();
        let swapped = initial.with_swap(2, 4);
        let err = describe_step(&initial, &swapped, 1).unwrap_err();
        assert!(matches!(
            err,
            PathError::InvalidStep {
                index: 1,
                differing: 2
            }
        ));
    }

    #[test]
    fn test_render_path() {
        let initial = Arrangement::initial();
        let first = generate(&initial)[2];
        let second = generate(&first)[0];

        let path = SolutionPath::from_arrangements(vec![initial, first, second]).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(
            path.to_string(),
            "solution path is:\n\
             L1 L2 L3 x R3 R2 R1\n\
             L1 L2 L3 R3 x R2 R1 (frog 'R3' leaps to gap at position 4)\n\
             L1 L2 x R3 L3 R2 R1 (frog 'L3' leaps to gap at position 5)\n"
        );
    }

    #[test]
    fn test_print_path_from_tree() {
        let mut tree = SearchTree::new();
        let initial = Arrangement::initial();
        let root = tree.root(initial);
        let first = generate(&initial)[0];
        let child = tree.attach(root, first);

        let mut out = Vec::new();
        let path = print_path(&tree, child, &mut out).unwrap();
        assert_eq!(path.len(), 1);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "solution path is:",
                "L1 L2 L3 x R3 R2 R1",
                "L1 L2 x L3 R3 R2 R1 (frog 'L3' leaps to gap at position 4)",
            ]
        );
    }

    #[test]
    fn test_print_released_node_fails_without_output() {
        let mut tree = SearchTree::new();
        let root = tree.root(Arrangement::initial());
        tree.dequeue(root);
        tree.detach_if_dead(root);

        let mut out = Vec::new();
        let err = print_path(&tree, root, &mut out).unwrap_err();
        assert!(matches!(err, SolveError::Path(PathError::MissingNode(_))));
        assert!(out.is_empty());
    }
}
