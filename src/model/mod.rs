pub mod preferences;
pub mod session;
