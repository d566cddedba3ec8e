//! Internal helpers used by the P10 reader and writer. Not part of the
//! public API.

pub mod byte_stream;
pub mod data_element_header;
pub mod p10_location;
pub mod value_length;
