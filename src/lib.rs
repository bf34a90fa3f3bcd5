#[macro_use]
pub mod util;

pub mod camera;
pub mod canvas;
pub mod error;
pub mod intersection;
pub mod light;
pub mod manager;
pub mod material;
pub mod math;
pub mod matrix;
pub mod object;
pub mod pattern;
pub mod ray;
pub mod renderer;
pub mod rgb;
pub mod shape;
pub mod tuple;
pub mod world;

pub use error::{Error, Result};
pub use math::EPSILON;
pub use matrix::Matrix;
pub use ray::Ray;
pub use rgb::RGB;
pub use tuple::Tuple;
