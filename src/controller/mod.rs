//! HTTP request handlers.
//!
//! Controllers are thin: they extract the request, call the corresponding
//! service, and convert the result into a status code plus JSON body. All
//! validation and business logic lives in the service layer; admin access
//! control lives in the middleware wrapping the admin route group.

pub mod application;
pub mod dashboard;
pub mod task;
pub mod window;
