pub mod datetime;
pub mod guest;
pub mod party;
pub mod state;
