pub mod memory;
pub mod mongo;
pub mod seed;
pub mod store;
