//! Ready-made observers.
//!
//! Both keep their output behind a shared handle: the registry owns the
//! observer, the caller keeps a clone to read what was collected.

use crate::engine::{Notification, Observer, ObserverResult};
use crate::locale::{Language, Localizer};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(shared: &Mutex<T>) -> MutexGuard<'_, T> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Records every notification it receives, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    log: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of the recorded notifications.
    pub fn notifications(&self) -> Vec<Notification> {
        lock(&self.log).clone()
    }

    /// Kind names of the recorded notifications.
    pub fn kinds(&self) -> Vec<&'static str> {
        lock(&self.log).iter().map(Notification::name).collect()
    }

    pub fn len(&self) -> usize {
        lock(&self.log).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.log).is_empty()
    }

    pub fn clear(&self) {
        lock(&self.log).clear();
    }
}

impl Observer for RecordingObserver {
    fn kind(&self) -> &str {
        "recording"
    }

    fn notify(&mut self, notification: &Notification) -> ObserverResult {
        lock(&self.log).push(notification.clone());
        Ok(())
    }
}

/// Keeps a localized, line-per-event transcript of the game.
///
/// Only moves and results are written down, not turn prompts or rejected
/// input.
///
/// # Example
///
/// ```rust
/// use tictac::engine::GameEngine;
/// use tictac::locale::Language;
/// use tictac::observers::TranscriptObserver;
///
/// let transcript = TranscriptObserver::new(Language::Pt);
/// let mut engine = GameEngine::new();
/// engine.subscribe("pt-log", transcript.clone()).unwrap();
///
/// engine.submit_move(2, 2).unwrap();
/// assert_eq!(transcript.lines(), vec!["X colocou em [2,2]".to_string()]);
/// ```
#[derive(Clone, Debug)]
pub struct TranscriptObserver {
    localizer: Localizer,
    lines: Arc<Mutex<Vec<String>>>,
}

impl TranscriptObserver {
    pub fn new(language: Language) -> Self {
        Self {
            localizer: Localizer::new(language),
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn language(&self) -> Language {
        self.localizer.language()
    }

    pub fn lines(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }

    /// Return the transcript so far and start a new one.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *lock(&self.lines))
    }
}

impl Observer for TranscriptObserver {
    fn kind(&self) -> &str {
        "transcript"
    }

    fn notify(&mut self, notification: &Notification) -> ObserverResult {
        if matches!(
            notification,
            Notification::MoveMade(_) | Notification::GameWon(_) | Notification::GameTied(_)
        ) {
            lock(&self.lines).push(self.localizer.render(notification));
        }
        Ok(())
    }
}
