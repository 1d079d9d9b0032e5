#![cfg_attr(not(test), forbid(unsafe_code))]

//! Wire models exchanged with the Shopfront REST backend.

pub mod models;
