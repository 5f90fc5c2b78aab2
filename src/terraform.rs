mod state;

pub use state::{ResourceBlock, ResourceInstance, StateDocument, find_resource};
