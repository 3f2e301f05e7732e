mod serializable;
mod trivial;

mod aggregates;

pub use serializable::*;
pub use trivial::*;
