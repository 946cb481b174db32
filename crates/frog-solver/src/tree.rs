//! Parent-linked search tree with reference-counted pruning.
//!
//! Nodes live in an arena and refer to their parent by handle. A node stays
//! alive while it is queued for expansion or while at least one of its
//! children is alive; once both are false it is released and the release
//! propagates to the parent.

use std::fmt;

use smallvec::SmallVec;

use crate::puzzle::Arrangement;

/// Handle to a node in a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One discovered arrangement and its discovery parent.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub arrangement: Arrangement,
    pub parent: Option<NodeId>,
    /// Children attached and not yet released
    pub live_children: u32,
    /// Still waiting in the BFS queue
    pub queued: bool,
}

/// Arena of search nodes. Released slots are recycled.
#[derive(Debug, Default)]
pub struct SearchTree {
    slots: Vec<Option<SearchNode>>,
    free: Vec<NodeId>,
    live: usize,
    peak_live: usize,
    released: usize,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the parentless root node. It starts out queued.
    pub fn root(&mut self, arrangement: Arrangement) -> NodeId {
        self.insert(SearchNode {
            arrangement,
            parent: None,
            live_children: 0,
            queued: true,
        })
    }

    /// Attach a queued child under `parent` and bump the parent's child count.
    pub fn attach(&mut self, parent: NodeId, arrangement: Arrangement) -> NodeId {
        debug_assert!(self.get(parent).is_some(), "attach under released node {}", parent);
        if let Some(node) = self.get_mut(parent) {
            node.live_children += 1;
        }

        self.insert(SearchNode {
            arrangement,
            parent: Some(parent),
            live_children: 0,
            queued: true,
        })
    }

    /// Mark a node as taken off the queue.
    pub fn dequeue(&mut self, id: NodeId) {
        if let Some(node) = self.get_mut(id) {
            node.queued = false;
        }
    }

    /// Release `id` if it has no live children and is not queued, then walk
    /// up releasing every ancestor whose last live child just went away.
    ///
    /// Returns how many nodes were released.
    pub fn detach_if_dead(&mut self, id: NodeId) -> usize {
        let mut released = 0;
        let mut current = Some(id);

        while let Some(id) = current {
            let dead = self
                .get(id)
                .is_some_and(|node| node.live_children == 0 && !node.queued);
            if !dead {
                break;
            }

            let parent = self.remove(id).and_then(|node| node.parent);
            released += 1;

            current = parent.filter(|&p| match self.get_mut(p) {
                Some(node) => {
                    debug_assert!(node.live_children > 0, "child count underflow at {}", p);
                    node.live_children = node.live_children.saturating_sub(1);
                    node.live_children == 0
                }
                None => false,
            });
        }

        released
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.slots.get(id.index()).and_then(|slot| slot.as_ref())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut SearchNode> {
        self.slots.get_mut(id.index()).and_then(|slot| slot.as_mut())
    }

    pub fn arrangement(&self, id: NodeId) -> Option<&Arrangement> {
        self.get(id).map(|node| &node.arrangement)
    }

    /// Handles from the root down to `id`, or `Err` with the first handle on
    /// the chain that is no longer alive.
    pub fn path_to_root(&self, id: NodeId) -> Result<SmallVec<[NodeId; 16]>, NodeId> {
        let mut path = SmallVec::new();
        let mut current = Some(id);

        while let Some(id) = current {
            let node = self.get(id).ok_or(id)?;
            path.push(id);
            current = node.parent;
        }

        path.reverse();
        Ok(path)
    }

    /// Nodes currently held
    pub fn live(&self) -> usize {
        self.live
    }

    /// Highest number of nodes held at once
    pub fn peak_live(&self) -> usize {
        self.peak_live
    }

    /// Nodes released so far
    pub fn released(&self) -> usize {
        self.released
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    fn insert(&mut self, node: SearchNode) -> NodeId {
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(node);
                id
            }
            None => {
                let id = NodeId(self.slots.len() as u32);
                self.slots.push(Some(node));
                id
            }
        };

        self.live += 1;
        self.peak_live = self.peak_live.max(self.live);
        id
    }

    fn remove(&mut self, id: NodeId) -> Option<SearchNode> {
        let node = self.slots.get_mut(id.index())?.take()?;
        self.free.push(id);
        self.live -= 1;
        self.released += 1;
        Some(node)
    }
}
