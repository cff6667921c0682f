/// MIME message assembly
pub mod composer;

pub use composer::compose_raw_message;
