pub mod calendar;
pub mod schedule;
pub mod tally;

pub use calendar::*;
pub use schedule::*;
pub use tally::*;
