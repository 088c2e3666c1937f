pub mod entity;
pub mod search;
