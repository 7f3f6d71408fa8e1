pub mod season;
pub mod timeline;
