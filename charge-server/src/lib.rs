//! Charging station finder server.
//!
//! A web service that answers: "where should I charge my EV right
//! now?" The core is a pure recommendation engine that filters,
//! scores, and explains station choices for a given location,
//! vehicle, and optimization mode.

pub mod cache;
pub mod directory;
pub mod domain;
pub mod recommend;
pub mod web;
