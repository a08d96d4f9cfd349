use std::time::Duration;

use tracing::debug;

/// Deferred computer move, tagged with the game epoch it was planned under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTurn {
    pub epoch: u64,
    pub due: Duration,
}

/// Holds at most one pending computer move.
///
/// Time is whatever monotonic clock the owner passes in. Firing only hands the
/// entry back; the owner decides whether it is still current.
#[derive(Clone, Debug)]
pub struct AiTurnScheduler {
    delay: Duration,
    pending: Option<ScheduledTurn>,
}

impl AiTurnScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Plans a move for `now + delay`, superseding any earlier entry.
    pub fn schedule(&mut self, epoch: u64, now: Duration) -> ScheduledTurn {
        let turn = ScheduledTurn {
            epoch,
            due: now.saturating_add(self.delay),
        };
        if let Some(previous) = self.pending.replace(turn) {
            debug!(epoch = previous.epoch, "superseded scheduled computer move");
        }
        turn
    }

    pub fn cancel(&mut self) {
        if let Some(turn) = self.pending.take() {
            debug!(epoch = turn.epoch, "cancelled scheduled computer move");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.pending.map(|turn| turn.due)
    }

    /// Takes the pending entry once it is due.
    pub fn fire(&mut self, now: Duration) -> Option<ScheduledTurn> {
        match self.pending {
            Some(turn) if now >= turn.due => self.pending.take(),
            _ => None,
        }
    }
}
