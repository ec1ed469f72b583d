//! Drives a [`Timer`] in real time.
//!
//! The runner owns the timer inside a single tokio task. That task waits on
//! both the one-second interval and the intent channel, so a user action and
//! a tick are never applied at the same time. Completion events leave on an
//! unbounded channel and every state change is published on a `watch`
//! channel for rendering.
//!
//! ```rust,no_run
//! use pomo::libs::runner::{Intent, TimerRunner};
//! use pomo::libs::settings::Settings;
//! use pomo::libs::timer::Timer;
//!
//! # async fn run() {
//! let mut handle = TimerRunner::new(Timer::new(Settings::default())).spawn();
//! handle.send(Intent::Toggle);
//! if let Some(event) = handle.completions.recv().await {
//!     println!("{} finished", event.phase);
//! }
//! # }
//! ```

use crate::libs::messages::Message;
use crate::libs::record::Phase;
use crate::libs::settings::Settings;
use crate::libs::timer::{CompletionEvent, Timer, TimerState};
use crate::{msg_debug, msg_warning};
use chrono::{Local, NaiveDateTime};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

/// User actions forwarded to the running timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Toggle,
    Reset,
    Switch(Phase),
    UpdateSettings(Settings),
    Quit,
}

pub struct TimerRunner {
    timer: Timer,
    period: Duration,
}

/// Channels connecting the caller to a spawned runner.
pub struct TimerHandle {
    intents: mpsc::UnboundedSender<Intent>,
    pub snapshots: watch::Receiver<TimerState>,
    pub completions: mpsc::UnboundedReceiver<CompletionEvent>,
    task: JoinHandle<Timer>,
}

impl TimerRunner {
    pub fn new(timer: Timer) -> Self {
        TimerRunner {
            timer,
            period: Duration::from_secs(1),
        }
    }

    /// Overrides the tick period. Every tick still removes exactly one
    /// second from the countdown.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn spawn(self) -> TimerHandle {
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(self.timer.snapshot());

        let task = tokio::spawn(run(self.timer, self.period, intent_rx, snapshot_tx, completion_tx));

        TimerHandle {
            intents: intent_tx,
            snapshots: snapshot_rx,
            completions: completion_rx,
            task,
        }
    }
}

impl TimerHandle {
    /// Queues an intent. Returns `false` once the runner has stopped.
    pub fn send(&self, intent: Intent) -> bool {
        self.intents.send(intent).is_ok()
    }

    /// A sender that can be moved to an input thread.
    pub fn intent_sender(&self) -> mpsc::UnboundedSender<Intent> {
        self.intents.clone()
    }

    /// Stops the runner and hands back the timer in its final state.
    pub async fn shutdown(self) -> anyhow::Result<Timer> {
        let _ = self.intents.send(Intent::Quit);
        Ok(self.task.await?)
    }
}

async fn run(
    mut timer: Timer,
    period: Duration,
    mut intents: mpsc::UnboundedReceiver<Intent>,
    snapshots: watch::Sender<TimerState>,
    completions: mpsc::UnboundedSender<CompletionEvent>,
) -> Timer {
    let mut ticker = interval(period);
    // Burst keeps ticks anchored to the start instant, so late wakeups do
    // not accumulate drift.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(event) = timer.tick(now()) {
                    msg_debug!("{} completed, next {}", event.phase, event.next_phase);
                    if completions.send(event).is_err() {
                        msg_debug!("completion receiver dropped");
                    }
                }
            }
            intent = intents.recv() => match intent {
                None | Some(Intent::Quit) => break,
                Some(Intent::Toggle) => timer.toggle(now()),
                Some(Intent::Reset) => timer.reset(),
                Some(Intent::Switch(phase)) => {
                    if timer.switch_phase(phase).is_err() {
                        msg_warning!(Message::SwitchWhileRunning);
                    }
                }
                Some(Intent::UpdateSettings(settings)) => timer.update_settings(settings),
            },
        }

        snapshots.send_if_modified(|current| {
            let next = timer.snapshot();
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }

    timer
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
