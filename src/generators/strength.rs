use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthRating {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthRating::Weak => write!(f, "weak"),
            StrengthRating::Fair => write!(f, "fair"),
            StrengthRating::Strong => write!(f, "strong"),
            StrengthRating::VeryStrong => write!(f, "very strong"),
        }
    }
}

// Entropy of a password drawn uniformly from a pool of `pool_size` characters.
// The anti-repetition rule removes a negligible amount and is ignored.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size <= 1 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

pub fn rate(bits: f64) -> StrengthRating {
    if bits < 50.0 {
        StrengthRating::Weak
    } else if bits < 70.0 {
        StrengthRating::Fair
    } else if bits < 100.0 {
        StrengthRating::Strong
    } else {
        StrengthRating::VeryStrong
    }
}
