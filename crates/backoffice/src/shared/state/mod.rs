pub mod filter_state_store;

pub use filter_state_store::FilterStateStore;
