//! Periodic presence rotation from the status list.

use crate::presence::PresenceSession;
use cogbot_common::StatusEntry;
use cogbot_config::{read_status_lines, Config};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

/// Lifecycle of a rotator. It only ever moves from `Stopped` to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorState {
    /// Not started yet.
    Stopped,
    /// Ticking on its interval.
    Running,
}

/// What a single tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The presence was set to this entry.
    Updated(StatusEntry),
    /// The status list was missing or had no usable lines.
    Empty,
    /// Reading the list or applying the presence failed.
    Failed(String),
}

/// Picks a random status line on a fixed interval and applies it.
pub struct StatusRotator {
    status_file: PathBuf,
    interval: Duration,
    running: AtomicBool,
}

impl StatusRotator {
    /// Creates a stopped rotator.
    pub fn new(status_file: impl Into<PathBuf>, interval: Duration) -> Self {
        Self {
            status_file: status_file.into(),
            interval,
            running: AtomicBool::new(false),
        }
    }

    /// Creates a stopped rotator from the configured file and interval.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.paths.status_file, config.status.interval())
    }

    /// The status list this rotator reads.
    #[must_use]
    pub fn status_file(&self) -> &Path {
        &self.status_file
    }

    /// Time between ticks.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> RotatorState {
        if self.running.load(Ordering::Acquire) {
            RotatorState::Running
        } else {
            RotatorState::Stopped
        }
    }

    /// Runs one rotation step. The list is re-read every time, so edits show
    /// up on the next tick. Never panics and never returns an error.
    pub fn tick<S, R>(&self, session: &S, rng: &mut R) -> TickOutcome
    where
        S: PresenceSession + ?Sized,
        R: Rng + ?Sized,
    {
        let lines = match read_status_lines(&self.status_file) {
            Ok(lines) => lines,
            Err(e) => {
                error!("Error changing status: {}", e);
                return TickOutcome::Failed(e.to_string());
            }
        };

        let Some(line) = lines.choose(rng) else {
            debug!("No statuses in {}, skipping tick", self.status_file.display());
            return TickOutcome::Empty;
        };

        let entry = StatusEntry::parse(line);
        match session.set_presence(&entry) {
            Ok(()) => {
                debug!("Presence set to {}", entry);
                TickOutcome::Updated(entry)
            }
            Err(e) => {
                error!("Error changing status: {}", e);
                TickOutcome::Failed(e.to_string())
            }
        }
    }

    /// Starts ticking against `session` on a background task. The first tick
    /// runs immediately.
    ///
    /// Returns `None` if the rotator is already running.
    pub fn start<S>(self: &Arc<Self>, session: S) -> Option<JoinHandle<()>>
    where
        S: PresenceSession + 'static,
    {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }

        info!(
            "Starting status rotation every {}s from {}",
            self.interval.as_secs(),
            self.status_file.display()
        );

        let rotator = Arc::clone(self);
        Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(rotator.interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut rng = StdRng::from_entropy();

            loop {
                interval.tick().await;
                rotator.tick(&session, &mut rng);
            }
        }))
    }
}
