//! Host platform probing for Quarry.
//!
//! Detection runs once per process and is cached; request construction
//! reads the ambient values and stays immutable afterwards.

pub mod arch;
pub mod error;
pub mod os;

pub use arch::Arch;
pub use error::Error;
pub use os::{Family, Os};
