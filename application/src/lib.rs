pub mod service;
pub mod state;
pub mod transfer;
