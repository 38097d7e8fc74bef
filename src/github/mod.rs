//! GitHub list endpoints and the pagination seam.
//!
//! [`paginate`] never pages on its own: it resolves an [`Endpoint`] and hands
//! the request to whichever [`PaginationClient`] it was given. [`RestClient`]
//! is the production client; tests inject their own.

mod paginate;
mod rest;
pub mod route;

pub use paginate::{Endpoint, EndpointOptions, EndpointRequest, PaginationClient, paginate};
pub use rest::RestClient;
pub use route::Route;
