pub mod bilateral;
pub mod popup;
pub mod tables;
