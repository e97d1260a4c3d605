//! Services Layer
//!
//! Business façade between the HTTP handlers and the entity stores.

pub mod crud_service;

pub use crud_service::CrudService;
