pub mod backends;
pub mod logos;
