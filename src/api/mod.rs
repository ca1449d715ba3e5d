//! # API Module
//!
//! HTTP handlers for the moodpick proxy server.
//!
//! ## Endpoints
//!
//! - [`songlink`] - Forwards `?url=<storefront url>` to the link-aggregation
//!   service and relays its JSON with a permissive CORS header. Browsers that
//!   cannot call the service directly go through this route instead. Served on
//!   `/api/songlink` and `/resolve`.
//! - [`health`] - Status and version for monitoring.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use axum::{Extension, Router, routing::get};
//! use moodpick::{api, resolve::LinkUpstream};
//!
//! let upstream: Arc<dyn LinkUpstream> = Arc::new(my_upstream);
//! let app = Router::new()
//!     .route("/api/songlink", get(api::songlink))
//!     .route("/health", get(api::health))
//!     .layer(Extension(upstream));
//! ```
//!
//! No authentication, rate limiting or retries are applied.

mod health;
mod songlink;

pub use health::health;
pub use songlink::songlink;
