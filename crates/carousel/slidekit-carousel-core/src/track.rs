//! Track model: original slides, boundary clones, and pagination dots.
//!
//! The track is a linear array of `N + 2 * clone_count` slides viewed as a
//! ring. All wraparound is index arithmetic; no cyclic structure is built.

use serde::{Deserialize, Serialize};

/// Entry-animation state of one slide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayState {
    Active,
    PendingLeft,
    PendingRight,
}

impl DisplayState {
    /// Class applied to the slide element for this state.
    pub fn class_name(self) -> &'static str {
        match self {
            DisplayState::Active => "show",
            DisplayState::PendingLeft => "slide-from-left",
            DisplayState::PendingRight => "slide-from-right",
        }
    }

    /// Alternating re-entry direction, derived from the original index only.
    pub fn pending_for(original: usize) -> Self {
        if original % 2 == 0 {
            DisplayState::PendingLeft
        } else {
            DisplayState::PendingRight
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Index into the original, non-duplicated slide list.
    pub identity: usize,
    pub is_clone: bool,
    pub display_state: DisplayState,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dot {
    pub original: usize,
    pub active: bool,
}

/// Full ordered sequence of renderable slides, clones included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    slides: Vec<Slide>,
    originals: usize,
    clone_count: usize,
}

impl Track {
    /// Lay out `originals` slides with `clone_count` duplicates at each end.
    ///
    /// Leading clones copy the last `clone_count` originals in order; trailing
    /// clones copy the first `clone_count`. Identities wrap modulo `originals`
    /// when there are more clones than originals.
    pub fn new(originals: usize, clone_count: usize) -> Self {
        let mut slides = Vec::with_capacity(originals + 2 * clone_count);
        if originals > 0 {
            let lead_start = originals * clone_count.div_ceil(originals) - clone_count;
            for j in 0..clone_count {
                slides.push(Slide {
                    identity: (lead_start + j) % originals,
                    is_clone: true,
                    display_state: DisplayState::Active,
                });
            }
            for identity in 0..originals {
                slides.push(Slide {
                    identity,
                    is_clone: false,
                    display_state: DisplayState::Active,
                });
            }
            for j in 0..clone_count {
                slides.push(Slide {
                    identity: j % originals,
                    is_clone: true,
                    display_state: DisplayState::Active,
                });
            }
        }
        Self {
            slides,
            originals,
            clone_count,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[inline]
    pub fn original_count(&self) -> usize {
        self.originals
    }

    #[inline]
    pub fn clone_count(&self) -> usize {
        self.clone_count
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, track_index: usize) -> Option<&Slide> {
        self.slides.get(track_index)
    }

    /// Track position of original slide `original`.
    #[inline]
    pub fn position_of(&self, original: usize) -> usize {
        original + self.clone_count
    }

    /// Original slide shown at track position `track_index`.
    ///
    /// Computed as `((i - c) mod N + N) mod N` in signed arithmetic so
    /// positions inside the leading clone block map back correctly.
    pub fn original_at(&self, track_index: usize) -> usize {
        if self.originals == 0 {
            return 0;
        }
        let n = self.originals as i64;
        let rel = track_index as i64 - self.clone_count as i64;
        (((rel % n) + n) % n) as usize
    }

    /// Whether `track_index` lies in the original (non-clone) block.
    #[inline]
    pub fn in_original_block(&self, track_index: usize) -> bool {
        track_index >= self.clone_count && track_index < self.originals + self.clone_count
    }

    /// Original slides, in order.
    pub fn originals(&self) -> &[Slide] {
        &self.slides[self.clone_count..self.clone_count + self.originals]
    }

    pub(crate) fn set_original_state(&mut self, original: usize, state: DisplayState) -> bool {
        let pos = self.position_of(original);
        match self.slides.get_mut(pos) {
            Some(slide) if slide.display_state != state => {
                slide.display_state = state;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identities(track: &Track) -> Vec<(usize, bool)> {
        track
            .slides()
            .iter()
            .map(|s| (s.identity, s.is_clone))
            .collect()
    }

    #[test]
    fn clones_mirror_opposite_ends() {
        let track = Track::new(5, 2);
        assert_eq!(track.len(), 9);
        assert_eq!(
            identities(&track),
            vec![
                (3, true),
                (4, true),
                (0, false),
                (1, false),
                (2, false),
                (3, false),
                (4, false),
                (0, true),
                (1, true),
            ]
        );
        assert!(track
            .slides()
            .iter()
            .filter(|s| s.is_clone)
            .all(|s| s.display_state == DisplayState::Active));
    }

    #[test]
    fn clones_wrap_when_more_clones_than_originals() {
        let track = Track::new(1, 2);
        assert_eq!(identities(&track)[..2], [(0, true), (0, true)]);

        let track = Track::new(2, 3);
        // Leading block must end on the last original so stepping back from
        // position 3 lands on identity 1.
        let lead: Vec<usize> = track.slides()[..3].iter().map(|s| s.identity).collect();
        assert_eq!(lead, vec![1, 0, 1]);
        let trail: Vec<usize> = track.slides()[5..].iter().map(|s| s.identity).collect();
        assert_eq!(trail, vec![0, 1, 0]);
    }

    #[test]
    fn original_at_agrees_with_slide_identity() {
        for n in 1..6 {
            for c in 1..4 {
                let track = Track::new(n, c);
                for (i, slide) in track.slides().iter().enumerate() {
                    assert_eq!(track.original_at(i), slide.identity, "n={n} c={c} i={i}");
                }
            }
        }
    }

    #[test]
    fn pending_direction_alternates_by_parity() {
        assert_eq!(DisplayState::pending_for(0), DisplayState::PendingLeft);
        assert_eq!(DisplayState::pending_for(1), DisplayState::PendingRight);
        assert_eq!(DisplayState::pending_for(4).class_name(), "slide-from-left");
        assert_eq!(DisplayState::Active.class_name(), "show");
    }
}
