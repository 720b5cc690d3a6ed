//! Core types shared by the bootstrap and the application lifecycle

pub mod config;
