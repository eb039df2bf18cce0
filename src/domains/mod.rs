pub mod attendee;
pub mod event;
pub mod user;
