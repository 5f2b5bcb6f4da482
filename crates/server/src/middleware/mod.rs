//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (binary only, capture errors and transactions)
//! 2. CORS (any origin; the browser frontend is served elsewhere)
//! 3. `TraceLayer` (one `http_request` span per request)
//! 4. Request ID (reuse or generate `x-request-id`, record it on the span)

pub mod request_id;
pub mod trace;

pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use trace::with_tracing;
