pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod service;

pub use error::{AppError, Result};
pub use service::EmpService;
