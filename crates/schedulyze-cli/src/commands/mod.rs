pub mod export;
pub mod plan;
pub mod priorities;
pub mod summary;
