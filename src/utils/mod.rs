mod loader;
mod plotting;

pub use loader::*;
pub use plotting::*;
