mod domain;
pub use domain::*;

mod error;
pub use error::{IdError, LocationError};

mod location;
pub use location::BufferLocation;
