//! Data generation utilities for testing.

use distances::Number;
use rand::prelude::*;

/// A uniformly random value in `[min, max)`.
fn uniform<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + f32::next_random(rng) * (max - min)
}

/// Uniformly random dense rows in `[min, max)`.
pub fn tabular(car: usize, dim: usize, min: f32, max: f32, seed: u64) -> Vec<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..car)
        .map(|_| (0..dim).map(|_| uniform(&mut rng, min, max)).collect())
        .collect()
}

/// Random dense rows where about half the entries are zero.
pub fn sparse_tabular(car: usize, dim: usize, seed: u64) -> Vec<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..car)
        .map(|_| {
            (0..dim)
                .map(|_| if rng.gen_bool(0.5) { 0.0 } else { uniform(&mut rng, -10.0, 10.0) })
                .collect()
        })
        .collect()
}

/// Integer grid points in `[-max, max]^2`, with plenty of tied distances.
pub fn grid(max: i32) -> Vec<Vec<f32>> {
    (-max..=max)
        .flat_map(|x| (-max..=max).map(move |y| vec![x as f32, y as f32]))
        .collect()
}

/// Points on the x-axis.
pub fn line(xs: &[f32]) -> Vec<Vec<f32>> {
    xs.iter().map(|&x| vec![x, 0.0]).collect()
}
