pub mod battery;
pub mod error;
pub mod schedule;
pub mod series;

pub use battery::*;
pub use error::*;
pub use schedule::*;
pub use series::*;
