// Application layer - orchestration on top of the domain core.
// The ledger itself owns no I/O; everything file-shaped lives here and in io.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
