pub mod fallback;
pub mod v1;
