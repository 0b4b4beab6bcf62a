//! Core Kernel - Foundational types for the proposal projection layer
//!
//! This crate provides the building blocks shared by every document and record:
//! - The wire-format temporal codec (fixed UTC+8, `yyyy-MM-dd HH:mm:ss`)
//! - Masking machinery for sensitive fields on the external channel
//! - Money types with precise decimal arithmetic

pub mod error;
pub mod masking;
pub mod money;
pub mod temporal;

pub use error::{CoreError, FormatError};
pub use masking::{MaskingPolicy, MaskingService, SensitiveCategory};
pub use money::{Currency, Money, MoneyError};
pub use temporal::{WireDate, WireDateTime, WIRE_FORMAT};
