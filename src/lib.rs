mod errors;
pub use errors::*;
mod page;
pub use page::*;
mod pageable;
pub use pageable::*;
mod select;
pub use select::*;

pub mod storage;

#[cfg(feature = "axum")]
pub mod rest;

#[cfg(test)]
pub mod testing;
