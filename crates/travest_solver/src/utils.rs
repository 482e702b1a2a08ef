pub mod minute;
pub mod time;
