//! Style strings for transform-based tracks.

/// `transform` value that scrolls `offset` pixels past the track start.
pub fn translate_x(offset: f32) -> String {
    format!("translateX(-{offset}px)")
}

/// `transition` value for a move. Instant moves disable the transition so the
/// browser does not tween a teleport.
pub fn transition(animated: bool, duration_ms: u32) -> String {
    if animated {
        format!("transform {}s ease-out", duration_ms as f32 / 1000.0)
    } else {
        "none".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_strings() {
        assert_eq!(translate_x(640.0), "translateX(-640px)");
        assert_eq!(translate_x(0.0), "translateX(-0px)");
        assert_eq!(transition(true, 500), "transform 0.5s ease-out");
        assert_eq!(transition(false, 500), "none");
    }
}
