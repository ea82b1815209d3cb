//! Isosurface extraction from dense scalar grids.
//!
//! Two extractors over the same kind of flat, x-fastest sample buffer:
//!
//! - [`MarchingCubes`]: Marching Cubes with the topologically-controlled
//!   case tables (the classic table is available as a fallback), shared
//!   edge vertices, and gradient normals.
//! - [`TransvoxelBlock`]: regular-cell block triangulation with directional
//!   vertex lookback, positions and indices only.
//!
//! # References
//!
//! - Thomas Lewiner, Hélio Lopes, Antônio Wilson Vieira, Geovan Tavares
//!   "Efficient implementation of Marching Cubes' cases with topological
//!   guarantees"
//! - Lis Custodio, Tiago Etiene, Sinesio Pesco, Claudio Silva "Practical
//!   considerations on Marching Cubes 33 topological correctness"
//! - Eric Lengyel ["Voxel-Based Terrain for Real-Time Virtual
//!   Simulations"](https://transvoxel.org/)

mod error;
mod grid;
mod marching_cubes;
mod mesh;
mod transvoxel;

pub mod fields;
pub mod tables;
pub mod transvoxel_tables;

pub use error::*;
pub use grid::*;
pub use marching_cubes::*;
pub use mesh::*;
pub use transvoxel::*;
