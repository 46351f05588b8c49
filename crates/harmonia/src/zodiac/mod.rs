pub mod angles;
pub mod signs;

pub use angles::{angle_diff, degrees_minutes, format_degrees, normalize_angle};
pub use signs::{element_of, sign_index, sign_of, Element, ZodiacSign, ELEMENTS, SIGNS};
