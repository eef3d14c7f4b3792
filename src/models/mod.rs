//! Value types carried by component state.

mod error_message;
mod mouse;
mod size;
mod style;

pub use error_message::{ContentMode, ErrorLevel, ErrorMessage};
pub use mouse::{MouseButton, MouseEventDetails};
pub use size::{parse_size, Axis, Size, Unit, SIZE_PATTERN};
pub use style::StyleList;
