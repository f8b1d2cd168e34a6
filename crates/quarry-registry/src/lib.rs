//! Dependency registry seam for Quarry.
//!
//! The harness owns the durable package registry; the installer talks to
//! it only through [`PackageRegistry`]. [`MemoryRegistry`] backs tests and
//! in-process hosts.

mod memory;
mod registry;

pub use memory::MemoryRegistry;
pub use registry::{DependencyPath, PackageRegistry, RegistryError};
