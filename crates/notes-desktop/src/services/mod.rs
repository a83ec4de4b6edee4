//! Desktop services

mod store;

pub use store::open_default_store;
