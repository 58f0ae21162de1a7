pub mod error;
pub mod io;
pub mod name;
pub mod sample;
pub mod select;

pub use error::*;
pub use io::*;
pub use name::*;
pub use sample::*;
pub use select::*;
