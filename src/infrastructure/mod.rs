pub mod loader;
pub mod storage;
pub mod template;
