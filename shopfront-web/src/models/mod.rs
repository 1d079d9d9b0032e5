//! Client-side state held in the yewdux store.

pub mod app_state;
pub mod notice;
