mod models;
mod profile;

pub(crate) use memory_store::MemoryIdentityStore;
