//! End-to-end tests for Car-bon live under `tests/`.
//!
//! They drive the real router with `tower::ServiceExt::oneshot` and check
//! the results against direct calls into the decoder and estimators.
