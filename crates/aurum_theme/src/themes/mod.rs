//! Built-in token tables

mod aurum;

pub use aurum::{day, night, AurumTheme};
