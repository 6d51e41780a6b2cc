pub mod adapter;
pub mod serialization;
pub mod store;
pub mod traits;

pub use adapter::{Loaded, StateAdapter, STORAGE_KEY};
pub use serialization::*;
pub use store::*;
pub use traits::*;
