mod core;

pub use core::{project, projection_curve};
