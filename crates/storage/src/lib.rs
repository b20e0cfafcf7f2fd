#![forbid(unsafe_code)]

pub mod questions;
pub mod repository;
