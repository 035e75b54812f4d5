//! Random coordinate sources used by the placement generator.

use std::collections::VecDeque;

use rand::Rng;

use dragonradar_core::types::GridPos;

/// Supplier of uniform draws for placement.
pub trait CoordinateSource {
    /// Uniform index in `[0, bound)`.
    fn next_index(&mut self, bound: usize) -> usize;

    /// Uniform count in `[1, max]`.
    fn next_count(&mut self, max: usize) -> usize;

    /// Uniform cell of a `size`×`size` grid. Row is drawn first.
    fn next_pos(&mut self, size: usize) -> GridPos {
        let row = self.next_index(size);
        let col = self.next_index(size);
        GridPos::new(row, col)
    }
}

/// Adapts any `rand` RNG into a [`CoordinateSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CoordinateSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }

    fn next_count(&mut self, max: usize) -> usize {
        self.rng.gen_range(1..=max)
    }
}

/// Replays a fixed sequence of draws, for tests and hand-built scenarios.
///
/// Every call to `next_index` or `next_count` consumes one value. Panics when
/// a value is out of the requested range or the script runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Append the row and column of each position.
    pub fn push_positions(&mut self, positions: impl IntoIterator<Item = GridPos>) -> &mut Self {
        for pos in positions {
            self.values.push_back(pos.row);
            self.values.push_back(pos.col);
        }
        self
    }

    /// Append a count draw.
    pub fn push_count(&mut self, count: usize) -> &mut Self {
        self.values.push_back(count);
        self
    }

    /// Draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    fn pop(&mut self) -> usize {
        self.values
            .pop_front()
            .expect("scripted coordinate source exhausted")
    }
}

impl CoordinateSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = self.pop();
        assert!(value < bound, "scripted index {value} out of range 0..{bound}");
        value
    }

    fn next_count(&mut self, max: usize) -> usize {
        let value = self.pop();
        assert!(
            (1..=max).contains(&value),
            "scripted count {value} out of range 1..={max}"
        );
        value
    }
}
