//! **navgraph-core**: geometry primitives shared across the *navgraph*
//! crates.
//!
//! Only the pieces the pathfinding layer needs live here: a 3-D point type
//! with the usual arithmetic and the three distance metrics used by the A*
//! heuristics (Euclidean, squared Euclidean and Manhattan).

pub mod geom;

pub use geom::Vec3;
