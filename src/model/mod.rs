pub mod dump;
pub mod impls;
pub mod json;
pub mod types;
pub mod walker;

pub use dump::*;
pub use types::*;
pub use walker::*;
