use crate::error::{Error, Result};
use std::fmt;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

/// Inclusive read length bounds; `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    min: usize,
    max: Option<usize>,
}

impl LengthRange {
    /// Validates user-supplied bounds, which may be negative on the command line.
    pub fn new(min: i64, max: Option<i64>) -> Result<Self> {
        if min < 0 {
            return Err(Error::Validation(
                "Minimum read length must be greater than or equal to 0".to_string(),
            ));
        }

        let max = match max {
            Some(max) if max < 0 => {
                return Err(Error::Validation(
                    "Maximum read length must be greater than or equal to 0".to_string(),
                ))
            }
            Some(max) if max < min => {
                return Err(Error::Validation(
                    "Minimum read length must be less than or equal to maximum read length"
                        .to_string(),
                ))
            }
            Some(max) => Some(max as usize),
            None => None,
        };

        Ok(Self {
            min: min as usize,
            max,
        })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    pub fn contains(&self, len: usize) -> bool {
        len >= self.min && self.max.map_or(true, |max| len <= max)
    }

    /// Range part of an output file name, e.g. `18_24` or `18_maxLen`.
    pub fn to_output_name(&self) -> String {
        match self.max {
            Some(max) => format!("{}_{}", self.min, max),
            None => format!("{}_maxLen", self.min),
        }
    }
}

impl fmt::Display for LengthRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}..={}", self.min, max),
            None => write!(f, "{}..", self.min),
        }
    }
}
