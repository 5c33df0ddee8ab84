//! Server-side API backend and business logic.
//!
//! This module contains the backend of the item sharing service: HTTP endpoints, the booking
//! lifecycle and authorization rules, data access and infrastructure. The backend uses Axum
//! as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, query validation and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, access checks and per-item serialization
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Extraction of the acting user from the identity header
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, item locks)
//! - **Startup** (`startup`) - Tracing setup, database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** extracts the acting user id from `X-Sharer-User-Id`
//! 3. **Controller** validates query parameters, converts DTOs to params, calls service
//! 4. **Service** enforces business rules, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
