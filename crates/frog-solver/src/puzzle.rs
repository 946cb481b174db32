//! Board representation for the jumping frogs puzzle.
//!
//! The board is a fixed line of seven slots holding three left-moving frogs,
//! three right-moving frogs and a single gap. Arrangements are plain values:
//! a successor is always a copy of its parent with two slots swapped.

use std::fmt;

use serde::{Serialize, Serializer};

/// Number of slots on the board.
pub const SLOTS: usize = 7;

/// Number of frogs on each side.
pub const FROGS_PER_SIDE: u8 = 3;

/// What occupies a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrogKind {
    /// Starts on the left, only ever moves right
    LeftMover,
    /// Starts on the right, only ever moves left
    RightMover,
    /// The empty slot
    Gap,
}

impl FrogKind {
    /// Single-letter label used in printed arrangements
    pub fn letter(self) -> char {
        match self {
            FrogKind::LeftMover => 'L',
            FrogKind::RightMover => 'R',
            FrogKind::Gap => 'x',
        }
    }
}

/// A frog (or the gap) together with its identity number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: FrogKind,
    pub ordinal: u8,
}

impl Token {
    pub const GAP: Token = Token {
        kind: FrogKind::Gap,
        ordinal: 0,
    };

    pub const fn left(ordinal: u8) -> Self {
        Self {
            kind: FrogKind::LeftMover,
            ordinal,
        }
    }

    pub const fn right(ordinal: u8) -> Self {
        Self {
            kind: FrogKind::RightMover,
            ordinal,
        }
    }

    pub fn is_gap(&self) -> bool {
        self.kind == FrogKind::Gap
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The gap has no identity worth printing
        if self.is_gap() {
            write!(f, "{}", self.kind.letter())
        } else {
            write!(f, "{}{}", self.kind.letter(), self.ordinal)
        }
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An ordered line of tokens; index 0 is the leftmost slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Arrangement {
    slots: [Token; SLOTS],
}

impl Arrangement {
    pub fn new(slots: [Token; SLOTS]) -> Self {
        Self { slots }
    }

    /// The fixed starting line: `L1 L2 L3 x R3 R2 R1`
    pub fn initial() -> Self {
        Self::new([
            Token::left(1),
            Token::left(2),
            Token::left(3),
            Token::GAP,
            Token::right(3),
            Token::right(2),
            Token::right(1),
        ])
    }

    pub fn slots(&self) -> &[Token; SLOTS] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.slots.get(index)
    }

    /// Index of the gap, if there is one
    pub fn gap_index(&self) -> Option<usize> {
        self.slots.iter().position(Token::is_gap)
    }

    /// Index of a specific frog
    pub fn position_of(&self, token: Token) -> Option<usize> {
        self.slots.iter().position(|t| *t == token)
    }

    /// Copy of this arrangement with two slots exchanged
    pub fn with_swap(&self, a: usize, b: usize) -> Self {
        let mut next = *self;
        next.slots.swap(a, b);
        next
    }

    /// Kind letters read left to right, ignoring ordinals (e.g. `LLLxRRR`)
    pub fn kind_pattern(&self) -> String {
        self.slots.iter().map(|t| t.kind.letter()).collect()
    }

    /// True once both groups have fully swapped sides.
    pub fn is_destination(&self) -> bool {
        let side = FROGS_PER_SIDE as usize;
        self.slots[..side]
            .iter()
            .all(|t| t.kind == FrogKind::RightMover)
            && self.slots[side].is_gap()
            && self.slots[side + 1..]
                .iter()
                .all(|t| t.kind == FrogKind::LeftMover)
    }

    /// Checks the token census: three of each frog kind with ordinals 1..=3,
    /// and exactly one gap.
    pub fn is_conserved(&self) -> bool {
        let mut left_seen = [false; FROGS_PER_SIDE as usize];
        let mut right_seen = [false; FROGS_PER_SIDE as usize];
        let mut gaps = 0;

        for token in &self.slots {
            let seen = match token.kind {
                FrogKind::Gap => {
                    gaps += 1;
                    continue;
                }
                FrogKind::LeftMover => &mut left_seen,
                FrogKind::RightMover => &mut right_seen,
            };
            match token.ordinal.checked_sub(1).map(usize::from) {
                Some(i) if i < seen.len() && !seen[i] => seen[i] = true,
                _ => return false,
            }
        }

        gaps == 1 && left_seen.iter().all(|s| *s) && right_seen.iter().all(|s| *s)
    }
}

impl Default for Arrangement {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
