//! Browser client for the Shopfront marketplace.
//!
//! The crate is usable without a browser: the API client runs over any
//! [`api::Transport`], and the session store over any [`session::CartStorage`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod app;
mod components;
pub mod config;
pub mod format;
pub mod guard;
pub mod logging;
pub mod models;
mod pages;
pub mod review_editor;
pub mod routes;
pub mod session;
