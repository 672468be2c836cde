//! File record service.

pub mod service;

pub use service::FileService;
