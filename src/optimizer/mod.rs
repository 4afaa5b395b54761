mod fallback;
mod lp;
pub mod types;

pub use types::*;
