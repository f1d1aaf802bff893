//! Typed client for the todo REST API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the round-trip, so the client
//! stays deterministic and testable.
//!
//! # Design
//! - `TodoClient` holds only `base_url`.
//! - Each route is split into `build_*` (produces the request) and
//!   `parse_*` (consumes the response).
//! - Status contract: list/get/update 200, create 201, delete 204. Delete of
//!   a missing id is also 204, so it never yields `NotFound`.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{ErrorBody, Todo, TodoInput};
