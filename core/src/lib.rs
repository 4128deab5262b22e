pub mod discovery;
pub mod inventory;
pub mod neighbors;
pub mod probe;
pub mod system;
pub mod vendors;
