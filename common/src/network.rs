pub mod mac;
pub mod neighbor;
pub mod subnet;
pub mod target;
