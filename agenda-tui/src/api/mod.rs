mod client;
mod dev_backend;
mod dto;

pub use client::ApiClient;
pub use dev_backend::DevBackend;
