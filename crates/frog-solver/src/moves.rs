//! Legal move generation.
//!
//! A frog may only move into the gap, and only forward: left movers travel
//! towards higher indices, right movers towards lower ones. Every move is
//! either a step into the adjacent gap or a hop over exactly one token.

use smallvec::SmallVec;

use crate::puzzle::{Arrangement, FrogKind, Token};

/// No arrangement has more than four legal moves.
pub type Successors<T> = SmallVec<[T; 4]>;

/// Distance covered by a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Step,
    Hop,
}

impl MoveKind {
    pub fn distance(self) -> usize {
        match self {
            MoveKind::Step => 1,
            MoveKind::Hop => 2,
        }
    }
}

/// One frog moving into the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub frog: Token,
    pub from: usize,
    pub to: usize,
    pub kind: MoveKind,
}

impl Move {
    /// Produce the arrangement after this move.
    pub fn apply(&self, arrangement: &Arrangement) -> Arrangement {
        arrangement.with_swap(self.from, self.to)
    }
}

/// Collect every legal move, in the fixed order: left step, left hop,
/// right step, right hop.
pub fn legal_moves(arrangement: &Arrangement) -> Successors<Move> {
    let mut moves = Successors::new();

    let gap = arrangement.gap_index();
    debug_assert!(gap.is_some(), "arrangement without a gap: {}", arrangement);
    let Some(gap) = gap else {
        return moves;
    };

    let candidates = [
        (gap.checked_sub(1), FrogKind::LeftMover, MoveKind::Step),
        (gap.checked_sub(2), FrogKind::LeftMover, MoveKind::Hop),
        (gap.checked_add(1), FrogKind::RightMover, MoveKind::Step),
        (gap.checked_add(2), FrogKind::RightMover, MoveKind::Hop),
    ];

    for (from, kind, move_kind) in candidates {
        let Some(from) = from else { continue };
        match arrangement.get(from) {
            Some(frog) if frog.kind == kind => moves.push(Move {
                frog: *frog,
                from,
                to: gap,
                kind: move_kind,
            }),
            _ => {}
        }
    }

    moves
}

/// All successor arrangements reachable in one move.
pub fn generate(arrangement: &Arrangement) -> Successors<Arrangement> {
    legal_moves(arrangement)
        .iter()
        .map(|m| m.apply(arrangement))
        .collect()
}
