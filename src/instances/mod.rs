//! Concrete point bindings: integers, UTC instants and physical quantities.

mod instant;
mod integer;
mod quantity;

pub use instant::InstantRange;
pub use integer::IntegerRange;
pub use quantity::{Position, QuantityRange};
