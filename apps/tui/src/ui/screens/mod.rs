pub mod actions;
pub mod core;
pub mod edit_row;
pub mod email;
pub mod help;
pub mod lunge;
pub mod overview;
pub mod stick;
