mod store;
pub use store::*;

mod memory;
pub use memory::*;

#[cfg(feature = "postgres")]
pub mod postgres;
