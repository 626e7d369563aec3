use std::time::Instant;

use anyhow::Context;
use benchmarks::{random_walk_distribution, SEED};
use bowyer_watson_delaunay::{
    triangulation_from_2d_vertices, types::Vertex, TriangulationConfiguration,
};
use env_logger::Env;
use log::info;

const VERTICES_COUNT: usize = 5_000;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let vertices: Vec<Vertex> = random_walk_distribution(1., SEED)
        .take(VERTICES_COUNT)
        .collect();
    info!("{} vertices", vertices.len());

    let start = Instant::now();
    let triangulation =
        triangulation_from_2d_vertices(&vertices, TriangulationConfiguration::default())
            .context("Triangulation failed")?;
    let duration = start.elapsed();

    info!(
        "{} triangles, {} edges in {:?}",
        triangulation.len(),
        triangulation.edges().len(),
        duration
    );

    Ok(())
}
