//! Controller clock and the single post-transition settle timer.

/// Monotonic millisecond clock advanced only by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    now_ms: u64,
}

impl Clock {
    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[inline]
    pub fn advance(&mut self, dt_ms: u32) {
        self.now_ms = self.now_ms.saturating_add(dt_ms as u64);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Deadline {
    /// Armed, counting starts at the next clock reading.
    Waiting(u32),
    Due(u64),
}

/// At most one pending deadline. Arming while armed replaces the deadline.
///
/// Arming does not read the clock: the countdown starts at the first
/// [`SettleTimer::start`] after it, so time that elapsed before the arm is
/// never charged against it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SettleTimer {
    deadline: Option<Deadline>,
}

impl SettleTimer {
    pub fn arm(&mut self, after_ms: u32) {
        self.deadline = Some(Deadline::Waiting(after_ms));
    }

    /// Begin counting a waiting deadline from `now_ms`. Running deadlines are
    /// left alone.
    pub fn start(&mut self, now_ms: u64) {
        if let Some(Deadline::Waiting(after_ms)) = self.deadline {
            self.deadline = Some(Deadline::Due(now_ms.saturating_add(after_ms as u64)));
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.deadline.map(|deadline| match deadline {
            Deadline::Waiting(after_ms) => after_ms as u64,
            Deadline::Due(due) => due.saturating_sub(now_ms),
        })
    }

    /// Disarm and report `true` if a started deadline has been reached.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(Deadline::Due(due)) if now_ms >= due => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
