pub mod panels;
pub mod summary;
