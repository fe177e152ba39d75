// Command handlers module
pub mod completions;
pub mod download;
pub mod version;

// Re-exports for cleaner imports
pub use download::execute as download;
pub use version::execute as version;
