// src/nn/init.rs

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Draws one sample from `U(low, high)`.
///
/// Neuron weights are initialized from `U(-1, 1)`.
pub fn uniform(low: f64, high: f64) -> f64 {
    let mut rng = rand::thread_rng();
    Uniform::new_inclusive(low, high).sample(&mut rng)
}

/// Draws one sample from `N(mean, std_dev)`.
///
/// `std_dev` must be finite and non-negative.
pub fn normal(mean: f64, std_dev: f64) -> f64 {
    let mut rng = rand::thread_rng();
    let dist = Normal::new(mean, std_dev).expect("std_dev must be finite and non-negative");
    rng.sample(dist)
}
