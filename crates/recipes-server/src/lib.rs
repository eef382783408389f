//! HTTP/JSON API server for the recipes collection.
//!
//! Provides a REST API to create, list, fetch, update, delete and tag-search
//! recipes. This crate contains the server framework, API schema types,
//! error handling, configuration, and route definitions. The recipes
//! themselves live in a `recipes_storage::InMemoryStore` owned by
//! [`service::RecipeService`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
