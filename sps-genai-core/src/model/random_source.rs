use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// Source of the uniform draws used by weighted successor sampling.
///
/// Generation only ever needs "a uniform integer in `1..=total`", so this
/// is the whole interface. Passing it explicitly lets callers pick between
/// the thread-local RNG, a seeded RNG for reproducible output, or a fixed
/// sequence of draws in tests.
pub trait RandomSource {
	/// Returns an integer drawn uniformly from `1..=total`.
	///
	/// `total` is always at least 1.
	fn uniform_inclusive(&mut self, total: usize) -> usize;
}

impl RandomSource for ThreadRng {
	fn uniform_inclusive(&mut self, total: usize) -> usize {
		self.random_range(1..=total)
	}
}

impl RandomSource for StdRng {
	fn uniform_inclusive(&mut self, total: usize) -> usize {
		self.random_range(1..=total)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;

	#[test]
	fn draws_stay_in_range() {
		let mut rng = rand::rng();
		for total in 1..50 {
			let r = rng.uniform_inclusive(total);
			assert!((1..=total).contains(&r));
		}
	}

	#[test]
	fn total_of_one_always_draws_one() {
		let mut rng = StdRng::seed_from_u64(3);
		for _ in 0..20 {
			assert_eq!(rng.uniform_inclusive(1), 1);
		}
	}

	#[test]
	fn seeded_draws_repeat() {
		let mut a = StdRng::seed_from_u64(42);
		let mut b = StdRng::seed_from_u64(42);
		let left: Vec<usize> = (0..16).map(|_| a.uniform_inclusive(10)).collect();
		let right: Vec<usize> = (0..16).map(|_| b.uniform_inclusive(10)).collect();
		assert_eq!(left, right);
	}
}
