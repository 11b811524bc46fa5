//! UI module - shared rendering components

pub mod components;
