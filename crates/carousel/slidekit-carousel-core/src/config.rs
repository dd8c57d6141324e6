//! Carousel configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};

pub const DEFAULT_CLONE_COUNT: usize = 2;
pub const DEFAULT_TRANSITION_MS: u32 = 500;

/// Options recognized by [`Carousel::new`](crate::Carousel::new).
///
/// Every field has a default, so hosts may pass a partial JSON object:
/// `{ "transition_duration_ms": 300 }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Slides duplicated at each end of the track. Recommended to match the
    /// number of simultaneously visible slides.
    pub clone_count: usize,
    /// Length of one animated move, and of the settle timer that follows it.
    pub transition_duration_ms: u32,
    /// Original slide shown first.
    pub initial_index: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            clone_count: DEFAULT_CLONE_COUNT,
            transition_duration_ms: DEFAULT_TRANSITION_MS,
            initial_index: 0,
        }
    }
}

impl CarouselConfig {
    /// Parse a (possibly partial) JSON config.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map_err(|e| CarouselError::InvalidConfiguration(format!("config json: {e}")))
    }

    /// Check the config against the number of original slides.
    pub fn validate(&self, slide_count: usize) -> Result<()> {
        if slide_count == 0 {
            return Err(CarouselError::InvalidConfiguration(
                "carousel needs at least one slide".into(),
            ));
        }
        if self.clone_count < 1 {
            return Err(CarouselError::InvalidConfiguration(
                "clone_count must be at least 1 for looping".into(),
            ));
        }
        if self.transition_duration_ms == 0 {
            return Err(CarouselError::InvalidConfiguration(
                "transition_duration_ms must be positive".into(),
            ));
        }
        if self.initial_index >= slide_count {
            return Err(CarouselError::OutOfRange {
                index: self.initial_index,
                len: slide_count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = CarouselConfig::from_json(r#"{ "transition_duration_ms": 300 }"#).unwrap();
        assert_eq!(cfg.clone_count, 2);
        assert_eq!(cfg.transition_duration_ms, 300);
        assert_eq!(cfg.initial_index, 0);
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = CarouselConfig::default();
        assert!(matches!(
            cfg.validate(0),
            Err(CarouselError::InvalidConfiguration(_))
        ));

        let no_clones = CarouselConfig {
            clone_count: 0,
            ..CarouselConfig::default()
        };
        assert!(no_clones.validate(3).is_err());

        let instant = CarouselConfig {
            transition_duration_ms: 0,
            ..CarouselConfig::default()
        };
        assert!(instant.validate(3).is_err());

        let past_end = CarouselConfig {
            initial_index: 3,
            ..CarouselConfig::default()
        };
        assert_eq!(
            past_end.validate(3),
            Err(CarouselError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            CarouselConfig::from_json("{ clone_count: }"),
            Err(CarouselError::InvalidConfiguration(_))
        ));
    }
}
