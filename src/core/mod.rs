// src/core/mod.rs

pub mod html;
pub mod numeric;
pub mod sanitize;
