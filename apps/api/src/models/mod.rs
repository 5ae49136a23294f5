pub mod reply;
pub mod status;
