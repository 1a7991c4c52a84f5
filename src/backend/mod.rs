mod memory_store;
mod interface;

pub use interface::UserStore;
pub use memory_store::MemoryStore;
