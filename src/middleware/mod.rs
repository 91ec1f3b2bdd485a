//! Request middleware for the admin route group.

pub mod auth;
