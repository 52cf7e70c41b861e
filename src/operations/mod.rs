pub mod batch;
pub mod boolean;
pub mod query;
