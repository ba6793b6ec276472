pub mod profile;
pub mod session;
pub mod user;
