pub mod environment;

pub use environment::resolve_clippings_path;
