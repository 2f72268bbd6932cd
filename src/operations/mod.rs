pub mod construct;
pub mod query;
