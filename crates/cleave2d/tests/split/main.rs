#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod common;
mod errors;
mod line;
mod polygon;
mod trim;
mod wkt;
