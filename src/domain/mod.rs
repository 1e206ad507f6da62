pub mod carpenter;
pub mod delivery;
pub mod logic;
pub mod order;
pub mod status;
