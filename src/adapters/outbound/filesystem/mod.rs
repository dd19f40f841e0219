/// Filesystem adapters: the JSON inventory store and report writers
mod file_writer;
mod json_inventory_store;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use json_inventory_store::JsonInventoryStore;
