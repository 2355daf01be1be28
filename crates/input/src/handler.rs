//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::core::InputSampler;
use crate::map::{intent_for_key, should_quit};
use crate::types::{Intent, Intents, StopSignal};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state. Auto-repeat events refresh it.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

fn slot(intent: Intent) -> usize {
    match intent {
        Intent::RotateLeft => 0,
        Intent::RotateRight => 1,
        Intent::MoveForward => 2,
        Intent::MoveBackward => 3,
    }
}

/// Which intents are currently held, from press/repeat/release events.
#[derive(Debug, Clone)]
pub struct HeldIntents {
    /// Time of the last press or repeat per intent; `None` when released.
    last_seen: [Option<Instant>; 4],
    key_release_timeout: Duration,
    /// The terminal reports releases, so no timeout applies.
    release_events: bool,
}

impl HeldIntents {
    pub fn new() -> Self {
        Self {
            last_seen: [None; 4],
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
            release_events: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.key_release_timeout
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    pub fn press(&mut self, intent: Intent, now: Instant) {
        self.last_seen[slot(intent)] = Some(now);
    }

    pub fn release(&mut self, intent: Intent) {
        self.last_seen[slot(intent)] = None;
    }

    /// Apply a key event. Returns the intent it affected, if any.
    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> Option<Intent> {
        let intent = intent_for_key(key.code)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(intent, now),
            KeyEventKind::Release => self.release(intent),
        }
        Some(intent)
    }

    /// Snapshot of held intents at `now`.
    pub fn intents_at(&self, now: Instant) -> Intents {
        let mut intents = Intents::NONE;
        for intent in Intent::ALL {
            let held = match self.last_seen[slot(intent)] {
                Some(_) if self.release_events => true,
                Some(t) => now.saturating_duration_since(t) <= self.key_release_timeout,
                None => false,
            };
            intents.set(intent, held);
        }
        intents
    }

    pub fn reset(&mut self) {
        self.last_seen = [None; 4];
    }
}

impl Default for HeldIntents {
    fn default() -> Self {
        Self::new()
    }
}

/// [`InputSampler`] backed by the crossterm event queue.
///
/// Each sample drains pending events without blocking. Quit keys raise the
/// shared [`StopSignal`].
#[derive(Debug, Clone)]
pub struct KeyboardSampler {
    held: HeldIntents,
    stop: StopSignal,
}

impl KeyboardSampler {
    pub fn new(stop: StopSignal) -> Self {
        Self {
            held: HeldIntents::new(),
            stop,
        }
    }

    pub fn with_held(mut self, held: HeldIntents) -> Self {
        self.held = held;
        self
    }

    pub fn held(&self) -> &HeldIntents {
        &self.held
    }

    pub fn handle_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Release && should_quit(*key) {
                    self.stop.request_stop();
                    return;
                }
                self.held.handle_key(key, now);
            }
            // Releases that happen while unfocused are never delivered.
            Event::FocusLost => self.held.reset(),
            _ => {}
        }
    }

    /// Drain every pending terminal event without blocking.
    pub fn pump(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.handle_event(&ev, Instant::now());
        }
        Ok(())
    }
}

impl InputSampler for KeyboardSampler {
    fn sample(&mut self) -> Intents {
        if let Err(err) = self.pump() {
            tracing::warn!(%err, "failed to read terminal input");
        }
        self.held.intents_at(Instant::now())
    }
}
