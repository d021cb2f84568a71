pub mod client;
pub mod elements;
pub mod error;
