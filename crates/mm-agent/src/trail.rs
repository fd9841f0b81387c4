//! Bounded position history for one boid.

use std::collections::VecDeque;

use mm_core::Vec2;

/// Ordered past positions, oldest at the front, newest at the back.
///
/// The capacity is supplied on every call rather than stored, because it is
/// driven by live configuration and may change between frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trail {
    samples: VecDeque<Vec2>,
}

impl Trail {
    pub fn new() -> Self {
        Self { samples: VecDeque::new() }
    }

    /// Append `sample`, then evict from the front until `len() <= capacity`.
    pub fn push_bounded(&mut self, sample: Vec2, capacity: usize) {
        self.samples.push_back(sample);
        self.truncate_to(capacity);
    }

    /// Evict the oldest samples until `len() <= capacity`.
    pub fn truncate_to(&mut self, capacity: usize) {
        while self.samples.len() > capacity {
            self.samples.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample, if any.
    pub fn newest(&self) -> Option<Vec2> {
        self.samples.back().copied()
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.samples.iter().copied()
    }
}
