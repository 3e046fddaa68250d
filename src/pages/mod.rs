//! Page components.

mod home;

pub use home::{Home, PAGE_TITLE};
