//! Set-level boolean operators over collections of closed polylines.

mod cleanup;
mod fold;
mod region;
mod sets;

#[cfg(test)]
mod tests;

pub use cleanup::cleanup;
pub use fold::{intersect_all, subtract_all, union_all, xor_all};
pub use sets::{intersect_sets, subtract_sets, union_sets, xor_sets};
