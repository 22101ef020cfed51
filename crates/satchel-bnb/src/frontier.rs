// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Frontier strategies
//!
//! The frontier holds the nodes that still have to be expanded. Its order
//! decides how the tree is traversed, but never which optimum is found: every
//! strategy explores until no pending node can beat the incumbent.
//!
//! Implementations
//! - `FifoFrontier`: breadth-first queue. The reference traversal.
//! - `LifoFrontier`: depth-first stack. Finds good incumbents early and keeps
//!   the frontier small.
//! - `BestBoundFrontier`: max-heap on the fractional bound, ties broken
//!   towards deeper nodes.
//!
//! `FrontierKind` names a strategy for configuration and builds a boxed
//! frontier on demand.

use crate::node::SearchNode;
use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
    str::FromStr,
};

/// A container of pending search nodes.
pub trait Frontier {
    /// Returns the name of the strategy.
    fn name(&self) -> &str;
    /// Adds a node to the frontier.
    fn push(&mut self, node: SearchNode);
    /// Removes the next node to expand.
    fn pop(&mut self) -> Option<SearchNode>;
    /// Returns the number of pending nodes.
    fn len(&self) -> usize;
    /// Returns `true` if no nodes are pending.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Removes all pending nodes while keeping allocated storage.
    fn clear(&mut self);
}

impl<F> Frontier for Box<F>
where
    F: Frontier + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn push(&mut self, node: SearchNode) {
        (**self).push(node)
    }

    #[inline]
    fn pop(&mut self) -> Option<SearchNode> {
        (**self).pop()
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    #[inline]
    fn clear(&mut self) {
        (**self).clear()
    }
}

impl std::fmt::Debug for dyn Frontier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frontier({}, len: {})", self.name(), self.len())
    }
}

impl std::fmt::Display for dyn Frontier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frontier({})", self.name())
    }
}

/// Breadth-first frontier.
#[derive(Clone, Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<SearchNode>,
}

impl FifoFrontier {
    /// Creates an empty FIFO frontier.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty FIFO frontier with room for `capacity` nodes.
    #[inline]
    pub fn preallocated(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns the number of nodes the frontier can hold without reallocating.
    #[inline]
    pub fn allocated_capacity(&self) -> usize {
        self.queue.capacity()
    }
}

impl Frontier for FifoFrontier {
    #[inline]
    fn name(&self) -> &str {
        "FifoFrontier"
    }

    #[inline]
    fn push(&mut self, node: SearchNode) {
        self.queue.push_back(node);
    }

    #[inline]
    fn pop(&mut self) -> Option<SearchNode> {
        self.queue.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Depth-first frontier.
#[derive(Clone, Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<SearchNode>,
}

impl LifoFrontier {
    /// Creates an empty LIFO frontier.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty LIFO frontier with room for `capacity` nodes.
    #[inline]
    pub fn preallocated(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
        }
    }
}

impl Frontier for LifoFrontier {
    #[inline]
    fn name(&self) -> &str {
        "LifoFrontier"
    }

    #[inline]
    fn push(&mut self, node: SearchNode) {
        self.stack.push(node);
    }

    #[inline]
    fn pop(&mut self) -> Option<SearchNode> {
        self.stack.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.stack.clear();
    }
}

/// Heap entry ordered by bound, then by depth.
#[derive(Clone, Debug)]
struct BoundOrdered(SearchNode);

impl PartialEq for BoundOrdered {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BoundOrdered {}

impl PartialOrd for BoundOrdered {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BoundOrdered {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .bound()
            .total_cmp(&other.0.bound())
            .then_with(|| self.0.depth().cmp(&other.0.depth()))
    }
}

/// Best-first frontier: always expands the node with the highest bound.
#[derive(Clone, Debug, Default)]
pub struct BestBoundFrontier {
    heap: BinaryHeap<BoundOrdered>,
}

impl BestBoundFrontier {
    /// Creates an empty best-bound frontier.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty best-bound frontier with room for `capacity` nodes.
    #[inline]
    pub fn preallocated(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns the highest bound among the pending nodes.
    #[inline]
    pub fn peek_bound(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.0.bound())
    }
}

impl Frontier for BestBoundFrontier {
    #[inline]
    fn name(&self) -> &str {
        "BestBoundFrontier"
    }

    #[inline]
    fn push(&mut self, node: SearchNode) {
        self.heap.push(BoundOrdered(node));
    }

    #[inline]
    fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|entry| entry.0)
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.heap.clear();
    }
}

/// The available frontier strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FrontierKind {
    /// Breadth-first.
    #[default]
    Fifo,
    /// Depth-first.
    Lifo,
    /// Highest bound first.
    BestBound,
}

impl FrontierKind {
    /// All strategies, in declaration order.
    pub const ALL: [FrontierKind; 3] = [Self::Fifo, Self::Lifo, Self::BestBound];

    /// Builds an empty frontier of this kind.
    pub fn build(self) -> Box<dyn Frontier> {
        match self {
            Self::Fifo => Box::new(FifoFrontier::new()),
            Self::Lifo => Box::new(LifoFrontier::new()),
            Self::BestBound => Box::new(BestBoundFrontier::new()),
        }
    }
}

impl std::fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fifo => write!(f, "fifo"),
            Self::Lifo => write!(f, "lifo"),
            Self::BestBound => write!(f, "best"),
        }
    }
}

/// The error returned when a string does not name a frontier strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFrontierKindError {
    input: String,
}

impl std::fmt::Display for ParseFrontierKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown frontier '{}', expected one of: fifo, lifo, best",
            self.input
        )
    }
}

impl std::error::Error for ParseFrontierKindError {}

impl FromStr for FrontierKind {
    type Err = ParseFrontierKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" | "bfs" | "breadth" => Ok(Self::Fifo),
            "lifo" | "dfs" | "depth" => Ok(Self::Lifo),
            "best" | "best-bound" | "bestbound" => Ok(Self::BestBound),
            _ => Err(ParseFrontierKindError {
                input: s.to_owned(),
            }),
        }
    }
}
