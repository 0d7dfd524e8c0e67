//! Storage layer - database entities and store implementation

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;
