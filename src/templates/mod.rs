pub mod components;
pub mod content;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use layouts::site::site_layout;
