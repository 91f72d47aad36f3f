//! Utility modules for the delegation tools.

pub mod config;
pub mod errors;
pub mod i18n;
pub mod logger;
pub mod printer;
pub mod string_utils;
