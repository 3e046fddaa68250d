//! Reusable gallery widgets

mod button;
mod category_select;
mod input;
mod spinner;

pub use button::*;
pub use category_select::*;
pub use input::*;
pub use spinner::*;
