pub mod components;
pub mod renderer;
pub mod renders;
pub mod text_box;
pub mod traits;

pub use components::*;
pub use renderer::*;
pub use renders::*;
pub use text_box::*;
pub use traits::*;
