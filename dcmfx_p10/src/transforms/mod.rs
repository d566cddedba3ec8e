//! Transforms that operate on a stream of DICOM P10 tokens and perform
//! operations that extract data from the stream, alter its content, or convert
//! it to a different format.

pub mod p10_custom_type_transform;
pub mod p10_filter_transform;
pub mod p10_insert_transform;

#[cfg(feature = "std")]
pub mod p10_print_transform;
