pub mod messages;
pub mod overview;
