pub mod tools;

pub use self::tools::{format_bytes, show_rust_core_dependencies};
