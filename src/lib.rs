pub mod triangle;
pub mod triangulation;
pub mod types;
pub mod utils;

#[cfg(feature = "debug_context")]
pub mod debug;

pub use glam;
pub use hashbrown;

pub use triangle::Triangle;
pub use triangulation::{
    get_edges, triangulation_from_2d_vertices, DegeneratePolicy, Triangulation,
    TriangulationConfiguration, TriangulationError, Triangulator,
};

///////////////////////////////////////////////////////////
///                                                     ///
///                        Tests                        ///
///                                                     ///
///////////////////////////////////////////////////////////
