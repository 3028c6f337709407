pub mod entities;
pub mod helpers;
pub mod value_objects;

pub use entities::*;
pub use helpers::*;
pub use value_objects::*;
