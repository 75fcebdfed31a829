//! Coverage sampler
//!
//! Hands out every page number in `[1, total_pages]` exactly once, in random
//! order. Two strategies are available:
//!
//! - **Rejection**: draw `floor(random() * n) + 1` and redraw whenever the page
//!   was already visited. Expected draws to cover `n` pages grow as `n * H(n)`.
//! - **Shuffled**: walk a shuffled permutation of the range, one draw per page.

use crate::config::SamplingStrategy;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Tracks visited pages and produces the next unvisited one
#[derive(Debug, Clone)]
pub struct CoverageSampler {
    total_pages: u32,
    strategy: SamplingStrategy,
    visited: HashSet<u32>,
    /// Remaining pages for the shuffled strategy, consumed from the back
    pending: Vec<u32>,
    draws: u64,
}

impl CoverageSampler {
    /// Creates a sampler over `[1, total_pages]`
    ///
    /// A `total_pages` of zero produces a sampler that is already complete.
    pub fn new<R: Rng + ?Sized>(total_pages: u32, strategy: SamplingStrategy, rng: &mut R) -> Self {
        let pending = match strategy {
            SamplingStrategy::Rejection => Vec::new(),
            SamplingStrategy::Shuffled => {
                let mut pages: Vec<u32> = (1..=total_pages).collect();
                pages.shuffle(rng);
                pages
            }
        };

        Self {
            total_pages,
            strategy,
            visited: HashSet::new(),
            pending,
            draws: 0,
        }
    }

    /// Returns the next unvisited page and marks it visited
    ///
    /// Returns `None` once every page has been handed out.
    pub fn next_page<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<u32> {
        if self.is_complete() {
            return None;
        }

        let page = match self.strategy {
            SamplingStrategy::Rejection => loop {
                let candidate = draw_page(rng, self.total_pages);
                self.draws += 1;
                if !self.visited.contains(&candidate) {
                    break candidate;
                }
                tracing::trace!("Page {} already visited, drawing again", candidate);
            },
            SamplingStrategy::Shuffled => {
                self.draws += 1;
                self.pending.pop()?
            }
        };

        self.visited.insert(page);
        Some(page)
    }

    /// Whether every page has been visited
    pub fn is_complete(&self) -> bool {
        self.visited.len() >= self.total_pages as usize
    }

    /// Number of distinct pages handed out so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn is_visited(&self, page: u32) -> bool {
        self.visited.contains(&page)
    }

    /// Total random draws made, including rejected ones
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

/// Maps a uniform fraction in `[0, 1)` onto `[1, total_pages]`
fn draw_page<R: Rng + ?Sized>(rng: &mut R, total_pages: u32) -> u32 {
    let fraction: f64 = rng.random();
    let page = (fraction * f64::from(total_pages)).floor() as u32 + 1;
    // Guard the upper bound against floating point rounding
    page.min(total_pages)
}
