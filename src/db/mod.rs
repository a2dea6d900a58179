pub mod initialize;
pub mod log;
pub mod pool;
pub mod queries;
pub mod store;

pub use pool::DbPool;
pub use store::EventStore;
