pub mod constants;
pub mod controller;
pub mod params;
pub mod particles;
pub mod pointer;
pub mod theme;
pub mod view;

pub use constants::*;
pub use controller::*;
pub use params::*;
pub use particles::*;
pub use pointer::*;
pub use theme::*;
pub use view::*;
