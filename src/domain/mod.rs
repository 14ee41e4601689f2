pub mod rating;
pub mod record;
pub mod rule;

pub use rating::*;
pub use record::*;
pub use rule::*;
