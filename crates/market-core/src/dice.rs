//! Injectable random source. Every roll in the market goes through [`Dice`],
//! so a seeded RNG gives reproducible markets and tests can script rolls.

use rand::Rng;

pub trait Dice {
    /// Sum of `count` six-sided dice.
    fn roll(&mut self, count: u32) -> i32;

    /// Uniform index in `0..upper`. Returns 0 when `upper` is 0.
    fn pick(&mut self, upper: usize) -> usize;

    fn d6(&mut self) -> i32 {
        self.roll(1)
    }

    fn two_d6(&mut self) -> i32 {
        self.roll(2)
    }
}

impl<R: Rng> Dice for R {
    fn roll(&mut self, count: u32) -> i32 {
        let mut total = 0;
        for _ in 0..count {
            total += self.gen_range(1..=6);
        }
        total
    }

    fn pick(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.gen_range(0..upper)
    }
}
