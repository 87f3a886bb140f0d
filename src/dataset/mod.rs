pub mod loader;

pub use loader::{load_records, preprocess_records, read_records};
