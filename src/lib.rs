//! # FSI Rust Backend
//!
//! Field Signal Intelligence: satellite-index aggregation and advisory
//! scoring for registered farm fields.
//!
//! This crate provides a Rust backend that registers a farmer's field
//! polygon, pulls vegetation/water index series from a remote geospatial
//! reducer, and fuses the outputs of independently trained models (image
//! classifier, risk sequence model) with deterministic agronomic scoring
//! into a single advisory report. The backend exposes a REST API via Axum
//! for the map frontend.
//!
//! ## Features
//!
//! - **Field Registry**: CRUD over the registered field polygon, one per
//!   user account, replaced wholesale on save
//! - **Area Calculation**: centroid-selected equal-area projection of the
//!   WGS84 ring, reported in hectares
//! - **AWD Detection**: hysteresis state machine over the water-index
//!   series counting wet/dry irrigation cycles
//! - **Carbon Estimation**: seasonal water, methane, and credit figures
//!   derived from the AWD outcome and field area
//! - **Health Fusion**: bounded advisory score combining classifier,
//!   vegetation index, and risk model signals
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`config`]: Analysis parameters with TOML file support
//! - [`db`]: Repository pattern and the field registry persistence layer
//! - [`providers`]: Injected collaborator capabilities (reducer,
//!   classifier, risk model) with deterministic stubs
//! - [`services`]: Pure analysis core and report orchestration
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types
//!
//! The analysis core is sequential, stateless between invocations, and
//! performs no I/O; every derived record is recomputed per request from
//! the inputs its collaborators supply.

pub mod api;

pub mod config;
pub mod db;
pub mod models;
pub mod providers;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
