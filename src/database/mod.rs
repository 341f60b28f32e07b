mod pool;
pub mod retry;

pub use pool::create_pool;
