pub mod cafe;

pub use cafe::{Cafe, NewCafe};
