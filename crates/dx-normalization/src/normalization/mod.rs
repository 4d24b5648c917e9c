pub mod key;
pub mod region;
