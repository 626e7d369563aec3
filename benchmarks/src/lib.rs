use bowyer_watson_delaunay::types::Vertex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SEED: u64 = 0x5c21_a38d_5cf2_344e;

pub enum Distribution {
    Uniform,
    RandomWalk,
}

impl Distribution {
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Uniform => "uniform",
            Distribution::RandomWalk => "random_walk",
        }
    }

    pub fn vertices(&self, count: usize, seed: u64) -> Vec<Vertex> {
        match self {
            Distribution::Uniform => uniform_distribution(100., seed).take(count).collect(),
            Distribution::RandomWalk => random_walk_distribution(1., seed).take(count).collect(),
        }
    }
}

/// Vertices uniformly distributed in the square [0, size]²
pub fn uniform_distribution(size: f64, seed: u64) -> impl Iterator<Item = Vertex> {
    let mut rng = StdRng::seed_from_u64(seed);
    core::iter::from_fn(move || Some(Vertex::new(rng.gen_range(0.0..size), rng.gen_range(0.0..size))))
}

/// Vertices along a random walk starting at (0, 1), each step moving by at most `step_size` on each axis
pub fn random_walk_distribution(step_size: f64, seed: u64) -> impl Iterator<Item = Vertex> {
    let range = rand::distributions::Uniform::new_inclusive(-step_size, step_size);
    let mut last = Vertex::new(0., 1.);

    let mut rng = StdRng::seed_from_u64(seed);
    let step_fn = move || {
        last.x += rng.sample(range);
        last.y += rng.sample(range);

        Some(last)
    };
    core::iter::from_fn(step_fn)
}
