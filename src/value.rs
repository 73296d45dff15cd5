//! Typed conversions for string values.
//!
//! These are lookup conveniences: a missing key reads as an empty string, so
//! `parse_bool` yields `false` and the numeric parsers fail. Use
//! [`crate::Ini::has_key`] when absence must be told apart.

use crate::error::{IniError, Result};

/// Map a literal to a boolean; anything unrecognised is `false`.
pub fn parse_bool(value: &str) -> bool {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" | "on" | "ON" | "On" | "yes" | "YES"
        | "Yes" => true,
        "0" | "f" | "F" | "false" | "FALSE" | "False" | "off" | "OFF" | "Off" | "no" | "NO"
        | "No" => false,
        _ => false,
    }
}

pub fn parse_int(section: &str, key: &str, value: &str) -> Result<i32> {
    value
        .parse::<i32>()
        .map_err(|source| IniError::InvalidInteger {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
}

pub fn parse_int64(section: &str, key: &str, value: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .map_err(|source| IniError::InvalidInteger {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
}

pub fn parse_float32(section: &str, key: &str, value: &str) -> Result<f32> {
    value
        .parse::<f32>()
        .map_err(|source| IniError::InvalidFloat {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
}

pub fn parse_float64(section: &str, key: &str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|source| IniError::InvalidFloat {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            source,
        })
}
