// Application layer - use cases and the ports they depend on
pub mod error;
pub mod graph_service;
pub mod observation_repository;
pub mod pivot;
