//! JSON string escaping.

mod as_string;
mod escape;

pub use as_string::as_string;
pub use escape::escape;
