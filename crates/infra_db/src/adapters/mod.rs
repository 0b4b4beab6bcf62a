//! Row → document adapters

pub mod proposal;

pub use proposal::{assemble_proposal, assemble_quotation};
