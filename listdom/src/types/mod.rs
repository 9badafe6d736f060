mod enums;
mod style;

pub use enums::{Border, Direction};
pub use style::Style;
