use bowyer_watson_delaunay::triangulation_from_2d_vertices;
use bowyer_watson_delaunay::{triangulation::TriangulationConfiguration, types::Vertex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};
use tracing_tracy::TracyLayer;

const SEED: u64 = 0xfbdc_4ea0_30de_82ba;

const VERTICES_COUNT: usize = 20_000;

fn main() {
    Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .with(TracyLayer::default())
        .init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let vertices: Vec<Vertex> = (0..VERTICES_COUNT)
        .map(|_| Vertex::new(rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0)))
        .collect();

    let triangulation = triangulation_from_2d_vertices(
        &vertices,
        TriangulationConfiguration {
            filter_parallel_tri_count_threshold: 10000,
            filter_parallel_min_batch_len: 10000,
            ..Default::default()
        },
    )
    .expect("Triangulation should succeed");

    info!("{} triangles", triangulation.len());
}
