//! # Photo Gallery Sample
//!
//! A small gallery served through [`rest_resource`] resources, exposed as a
//! library for the demo binary and integration tests.
//!
//! - [`model`]: [`Photo`](model::Photo) and [`Comment`](model::Comment).
//! - [`store`]: the shared in-memory [`PhotoStore`](store::PhotoStore).
//! - [`routes`]: resources, loaders and handlers wired into a
//!   [`MockApp`](rest_resource::MockApp).

pub mod model;
pub mod routes;
pub mod store;
