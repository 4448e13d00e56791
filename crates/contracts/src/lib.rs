pub mod question;
pub mod shared;
pub mod system;
