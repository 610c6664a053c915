//! Random Draw Seam
//!
//! The mock picks between its two timestamp branches with a single
//! uniform draw in `[0, 100)`. The draw comes through a trait so tests
//! can force either branch.

use rand::Rng;

/// Source of the branch-decision draw
pub trait RandomSource {
    /// One uniformly distributed value in `[0, 100)`
    fn next_draw(&mut self) -> f64;
}

/// Thread-local RNG backed source
///
/// Scales a uniform `[0, 1)` draw by 100, matching the original
/// `Math.random() * 100` decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_draw(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>() * 100.0
    }
}

/// Source that always returns the same draw, for tests
#[derive(Debug, Clone, Copy)]
pub struct FixedDraw(pub f64);

impl RandomSource for FixedDraw {
    fn next_draw(&mut self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_range() {
        let mut source = ThreadRandom;
        for _ in 0..1000 {
            let draw = source.next_draw();
            assert!((0.0..100.0).contains(&draw), "draw out of range: {draw}");
        }
    }

    #[test]
    fn test_fixed_draw() {
        let mut source = FixedDraw(42.5);
        assert_eq!(source.next_draw(), 42.5);
        assert_eq!(source.next_draw(), 42.5);
    }
}
