pub mod calc;
pub mod clock;
pub mod confirm;
pub mod error;
pub mod filter;
pub mod format;
pub mod sequence;
