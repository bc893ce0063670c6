#[macro_use] extern crate serde_json;

pub mod geojson;
pub mod read;
mod coords;
mod curry;
mod map_coords;
mod props;

pub use coords::{Coordinates, coord_each, coord_reduce};
pub use curry::curry_outer;
pub use map_coords::map_coords;
pub use props::{prop_each, prop_reduce};
