// ABOUTME: HTTP middleware for request correlation and cross-origin access
// ABOUTME: Provides request ID generation with request logging, and CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cross-origin resource sharing
pub mod cors;
/// Request id generation and request logging
pub mod request_id;

// CORS configuration
pub use cors::setup_cors;

// Request correlation
pub use request_id::{request_id_middleware, RequestId};
