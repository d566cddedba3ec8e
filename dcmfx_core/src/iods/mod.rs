pub mod sop_common_module;

pub use sop_common_module::SopCommonModule;
