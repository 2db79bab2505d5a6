//! Live dashboard of Mercedes W123/W124 diesel classifieds.
//!
//! Listings come from the scraper backend's JSON API and flow one way:
//! fetch, classify and filter, sort, render, paint.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;
