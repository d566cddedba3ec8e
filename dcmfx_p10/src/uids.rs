//! Implementation identifiers written into the File Meta Information of
//! DICOM P10 data produced by this crate's writer.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

/// Root UID prefix reserved for data produced by this implementation. Not
/// registered with an external numbering authority; substitute an
/// organization's own root UID when deploying this crate as part of a
/// product.
///
pub const DCMFX_ROOT_UID_PREFIX: &str = "1.2.826.0.1.3680043.9.7391.";

/// Implementation class UID written into the File Meta Information header of
/// DICOM P10 data this crate serializes.
///
pub const DCMFX_IMPLEMENTATION_CLASS_UID: &str =
  "1.2.826.0.1.3680043.9.7391.1";

/// Implementation version name written into the File Meta Information header
/// of DICOM P10 data this crate serializes.
///
pub fn dcmfx_implementation_version_name() -> String {
  format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
