pub mod aggregate;
pub mod catalog;
pub mod dialog;
pub mod loader;
