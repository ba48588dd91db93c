mod file;
mod stats;

pub use file::{load_inventory, write_inventory};
pub use stats::InventoryStats;
