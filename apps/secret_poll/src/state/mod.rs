pub mod events;
pub mod poll;

pub use events::*;
pub use poll::*;
