//! Shared DTOs between the materials frontend and the REST API.

pub mod domain;
pub mod shared;
