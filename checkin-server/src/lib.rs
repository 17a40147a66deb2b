//! Restaurant check-in tracking server.
//!
//! A web application that answers: "what did I eat, where, and when?"
//! Users search for nearby places through an upstream geographic search
//! provider, and record check-ins against the places they visited.
//!
//! Nearby results are re-ranked by a hybrid score that blends geographic
//! proximity with the provider's own relevance ordering.

pub mod auth;
pub mod cache;
pub mod domain;
pub mod places;
pub mod ranking;
pub mod store;
pub mod web;
