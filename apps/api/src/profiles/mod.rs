//! Saved career profiles: CRUD, saved documents and request defaults.

pub mod handlers;
