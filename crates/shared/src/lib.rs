mod date;
mod item;
mod zone;

pub use date::*;
pub use item::*;
pub use zone::*;
