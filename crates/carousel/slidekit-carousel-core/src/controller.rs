//! Carousel controller: position state, loop reconciliation, and derived UI.
//!
//! Methods:
//! - new, move_to, advance, jump_to_original, activate_dot, on_resize, on_ready
//! - update (clock → commands → settle/teleport)

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};
use crate::inputs::{CarouselCommand, Direction, Inputs};
use crate::outputs::{CarouselEvent, Outputs};
use crate::surface::{RenderSurface, SlideExtent};
use crate::timer::{Clock, SettleTimer};
use crate::track::{DisplayState, Dot, Track};

/// Whether a move request was carried out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Moved,
    /// Dropped because a transition was still in flight.
    Rejected,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Transitioning,
}

/// Offset of track position `index` for one measurement; 0 when not laid out.
pub fn offset_for_extent(extent: SlideExtent, index: usize) -> f32 {
    if !extent.is_ready() {
        return 0.0;
    }
    index as f32 * extent.pitch()
}

/// One carousel instance. Owns its position and its surface; instances share
/// nothing.
#[derive(Debug)]
pub struct Carousel<S: RenderSurface> {
    cfg: CarouselConfig,
    track: Track,
    dots: Vec<Dot>,
    current_index: usize,
    active_original: usize,
    transitioning: bool,
    layout_pending: bool,
    clock: Clock,
    settle: SettleTimer,
    surface: S,
    outputs: Outputs,
    /// `outputs` was handed out by `update`; the next event starts a new batch.
    outputs_delivered: bool,
}

impl<S: RenderSurface> Carousel<S> {
    /// Build the track (clones included), mount it on `surface`, and render the
    /// initial slide without animation.
    pub fn new(slide_count: usize, cfg: CarouselConfig, mut surface: S) -> Result<Self> {
        cfg.validate(slide_count)?;

        let track = Track::new(slide_count, cfg.clone_count);
        let dots = (0..slide_count)
            .map(|original| Dot {
                original,
                active: false,
            })
            .collect();
        surface.mount(&track);

        let start = track.position_of(cfg.initial_index);
        let mut carousel = Self {
            active_original: cfg.initial_index,
            cfg,
            track,
            dots,
            current_index: start,
            transitioning: false,
            layout_pending: false,
            clock: Clock::default(),
            settle: SettleTimer::default(),
            surface,
            outputs: Outputs::default(),
            outputs_delivered: false,
        };
        debug!(
            "carousel: init slides={} clones={} start={}",
            slide_count, carousel.cfg.clone_count, start
        );
        carousel.render_instant();
        carousel.sync_derived(true);
        Ok(carousel)
    }

    /// Pixel offset of track position `index`, measured now.
    ///
    /// Returns `0.0` while the slides have no width yet. Callers treat that as
    /// "retry later", which resize and ready notifications do naturally.
    pub fn compute_offset(&self, index: usize) -> f32 {
        offset_for_extent(self.surface.measure(), index)
    }

    /// Commit a move to track position `target`.
    ///
    /// An animated move while another transition is in flight is a no-op. An
    /// instant move is always applied and leaves the transition flag alone.
    pub fn move_to(&mut self, target: usize, animate: bool) -> Result<MoveOutcome> {
        if target >= self.track.len() {
            return Err(CarouselError::OutOfRange {
                index: target,
                len: self.track.len(),
            });
        }
        if animate && self.transitioning {
            return Ok(self.reject());
        }
        self.commit(target, animate);
        Ok(MoveOutcome::Moved)
    }

    /// Step one slide in `direction`.
    pub fn advance(&mut self, direction: Direction) -> Result<MoveOutcome> {
        if self.transitioning {
            return Ok(self.reject());
        }
        let target = match direction {
            Direction::Next => self.current_index + 1,
            Direction::Prev => {
                self.current_index
                    .checked_sub(1)
                    .ok_or(CarouselError::OutOfRange {
                        index: 0,
                        len: self.track.len(),
                    })?
            }
        };
        self.move_to(target, true)
    }

    /// Animate to original slide `original`. Indices outside `[0, N)` are an
    /// error.
    pub fn jump_to_original(&mut self, original: usize) -> Result<MoveOutcome> {
        let n = self.track.original_count();
        if original >= n {
            return Err(CarouselError::OutOfRange {
                index: original,
                len: n,
            });
        }
        if self.transitioning {
            return Ok(self.reject());
        }
        self.move_to(self.track.position_of(original), true)
    }

    /// Dot activation path: the index is normalized modulo `N` instead of
    /// rejected.
    pub fn activate_dot(&mut self, dot: usize) -> MoveOutcome {
        let original = dot % self.track.original_count();
        if self.transitioning {
            return self.reject();
        }
        self.commit(self.track.position_of(original), true);
        MoveOutcome::Moved
    }

    /// Snap from a clone back onto the matching original, without animation.
    ///
    /// Returns `true` if a snap happened. Does nothing while a transition is
    /// in flight or when the position is already inside the original block.
    pub fn reconcile_loop_boundary(&mut self) -> bool {
        if self.transitioning {
            return false;
        }
        let n = self.track.original_count();
        let c = self.track.clone_count();
        let target = if self.current_index >= n + c {
            c
        } else if self.current_index < c {
            n + c - 1
        } else {
            return false;
        };
        let from = self.current_index;
        debug!("carousel: teleport {} -> {}", from, target);
        self.commit(target, false);
        self.emit(CarouselEvent::Teleported { from, to: target });
        true
    }

    /// Geometry correction only: re-issue the current offset instantly.
    ///
    /// Never changes the index, the transition flag, or the settle timer.
    pub fn on_resize(&mut self) {
        self.render_instant();
    }

    /// Full instant re-render, used once the host reports the page loaded.
    pub fn on_ready(&mut self) {
        self.render_instant();
        self.sync_derived(true);
    }

    /// Advance the clock by `dt_ms`, then apply host commands in order.
    ///
    /// `dt_ms` is time that passed before the commands, so it never counts
    /// toward a transition they start. The returned [`Outputs`] holds events
    /// from this call and from direct calls made since the previous update
    /// returned.
    pub fn update(&mut self, dt_ms: u32, inputs: Inputs) -> &Outputs {
        if self.outputs_delivered {
            self.outputs.clear();
            self.outputs_delivered = false;
        }
        self.advance_time(dt_ms);
        for command in inputs.commands {
            self.apply_command(command);
        }
        self.poll_settle();
        self.outputs_delivered = true;
        &self.outputs
    }

    /// Advance the controller clock, firing the settle timer when due.
    ///
    /// A transition committed since the last clock step starts its countdown
    /// at the new clock reading.
    pub fn advance_time(&mut self, dt_ms: u32) {
        self.clock.advance(dt_ms);
        self.poll_settle();
    }

    fn poll_settle(&mut self) {
        let now = self.clock.now_ms();
        self.settle.start(now);
        if self.settle.poll(now) {
            self.settle_now();
        }
    }

    fn emit(&mut self, event: CarouselEvent) {
        if self.outputs_delivered {
            self.outputs.clear();
            self.outputs_delivered = false;
        }
        self.outputs.push_event(event);
    }

    fn apply_command(&mut self, command: CarouselCommand) {
        let result = match command {
            CarouselCommand::Next => self.advance(Direction::Next).map(|_| ()),
            CarouselCommand::Prev => self.advance(Direction::Prev).map(|_| ()),
            CarouselCommand::JumpTo { index } => self.jump_to_original(index).map(|_| ()),
            CarouselCommand::DotClicked { index } => {
                self.activate_dot(index);
                Ok(())
            }
            CarouselCommand::Resize => {
                self.on_resize();
                Ok(())
            }
            CarouselCommand::Ready => {
                self.on_ready();
                Ok(())
            }
        };
        if let Err(e) = result {
            warn!("carousel: command failed: {e}");
            self.emit(CarouselEvent::Error {
                message: e.to_string(),
            });
        }
    }

    fn settle_now(&mut self) {
        self.transitioning = false;
        trace!("carousel: settled at {}", self.current_index);
        self.emit(CarouselEvent::Settled {
            index: self.current_index,
        });
        self.reconcile_loop_boundary();
    }

    fn reject(&mut self) -> MoveOutcome {
        debug!("carousel: navigation rejected, transition in flight");
        self.emit(CarouselEvent::NavigationRejected);
        MoveOutcome::Rejected
    }

    /// Steps 2–8 of a move; bounds and rejection are the caller's concern.
    fn commit(&mut self, target: usize, animate: bool) {
        let from = self.current_index;
        let duration = self.cfg.transition_duration_ms;
        self.current_index = target;

        let offset = self.measure_offset(target);
        self.surface.set_offset(offset, animate, duration);

        if animate {
            self.transitioning = true;
            self.settle.arm(duration);
            debug!("carousel: move {} -> {} ({}px)", from, target, offset);
            self.emit(CarouselEvent::TransitionStarted {
                from,
                to: target,
                offset,
            });
        } else {
            self.emit(CarouselEvent::Rendered {
                index: target,
                offset,
            });
        }

        self.sync_derived(false);
    }

    fn render_instant(&mut self) {
        let offset = self.measure_offset(self.current_index);
        self.surface
            .set_offset(offset, false, self.cfg.transition_duration_ms);
        self.emit(CarouselEvent::Rendered {
            index: self.current_index,
            offset,
        });
    }

    fn measure_offset(&mut self, index: usize) -> f32 {
        let extent = self.surface.measure();
        if extent.is_ready() {
            self.layout_pending = false;
        } else {
            trace!("carousel: layout not ready, deferring offset for {index}");
            self.layout_pending = true;
            self.emit(CarouselEvent::LayoutDeferred);
        }
        offset_for_extent(extent, index)
    }

    /// Recompute slide display states and dot flags from `current_index`.
    /// With `force`, every state is pushed to the surface, not just changes.
    fn sync_derived(&mut self, force: bool) {
        let active = self.track.original_at(self.current_index);

        for original in 0..self.track.original_count() {
            let state = if original == active {
                DisplayState::Active
            } else {
                DisplayState::pending_for(original)
            };
            if self.track.set_original_state(original, state) || force {
                self.surface.set_slide_state(original, state);
            }
        }

        let previous = self.active_original;
        if force {
            for dot in &mut self.dots {
                dot.active = dot.original == active;
                self.surface.set_dot_active(dot.original, dot.active);
            }
        } else if previous != active {
            if let Some(dot) = self.dots.get_mut(previous) {
                dot.active = false;
                self.surface.set_dot_active(previous, false);
            }
            if let Some(dot) = self.dots.get_mut(active) {
                dot.active = true;
                self.surface.set_dot_active(active, true);
            }
        }

        if previous != active {
            self.active_original = active;
            self.emit(CarouselEvent::ActiveChanged { original: active });
        }
    }
}

impl<S: RenderSurface> Carousel<S> {
    /// Original slide currently shown; also the active dot.
    #[inline]
    pub fn active_original_index(&self) -> usize {
        self.active_original
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn phase(&self) -> Phase {
        if self.transitioning {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }

    /// Whether the last offset computation found no usable geometry.
    #[inline]
    pub fn is_layout_pending(&self) -> bool {
        self.layout_pending
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.track.original_count()
    }

    #[inline]
    pub fn clone_count(&self) -> usize {
        self.track.clone_count()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.cfg
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Events not yet returned by [`Carousel::update`], or the last returned
    /// batch if nothing happened since.
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Milliseconds until the pending settle fires, if a transition is in flight.
    pub fn settle_remaining_ms(&self) -> Option<u64> {
        self.settle.remaining_ms(self.clock.now_ms())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn carousel(n: usize) -> Carousel<RecordingSurface> {
        Carousel::new(
            n,
            CarouselConfig::default(),
            RecordingSurface::new(SlideExtent::new(300.0, 20.0)),
        )
        .unwrap()
    }

    #[test]
    fn offset_is_zero_until_measurable() {
        assert_eq!(offset_for_extent(SlideExtent::default(), 7), 0.0);
        assert_eq!(offset_for_extent(SlideExtent::new(100.0, 10.0), 0), 0.0);
        assert_eq!(offset_for_extent(SlideExtent::new(100.0, 10.0), 3), 330.0);
    }

    #[test]
    fn instant_move_ignores_transition_flag() {
        let mut c = carousel(4);
        c.advance(Direction::Next).unwrap();
        assert!(c.is_transitioning());

        assert_eq!(c.move_to(4, false).unwrap(), MoveOutcome::Moved);
        assert_eq!(c.current_index(), 4);
        assert!(c.is_transitioning());
    }

    #[test]
    fn move_to_rejects_positions_off_the_track() {
        let mut c = carousel(3);
        assert_eq!(
            c.move_to(7, true),
            Err(CarouselError::OutOfRange { index: 7, len: 7 })
        );
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn reconcile_waits_for_settle() {
        let mut c = carousel(3);
        c.move_to(1, true).unwrap();
        assert!(!c.reconcile_loop_boundary());
        assert_eq!(c.current_index(), 1);
    }
}
