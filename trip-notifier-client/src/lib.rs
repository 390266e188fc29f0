pub mod application;
pub mod dto;
pub mod repository;
pub mod service;
