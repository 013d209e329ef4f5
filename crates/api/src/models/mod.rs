pub mod annotation;
pub mod declaration;
pub mod reflection;

pub use annotation::*;
pub use declaration::*;
pub use reflection::*;
