mod classify;
mod events;
mod navigation;
mod render;
mod rows;
mod week;

pub use classify::*;
pub use events::*;
pub use navigation::*;
pub use render::*;
pub use rows::*;
pub use week::*;
