//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use rep_timer::{
    services::{CompletionNotifier, Exercise, MemoryStore},
    state::{AppState, SessionContext, TimerConfig},
};

/// Notifier counting how often completion was signalled
#[derive(Debug, Default)]
pub struct CountingNotifier {
    vibrations: AtomicUsize,
    alerts: AtomicUsize,
}

impl CountingNotifier {
    pub fn vibrations(&self) -> usize {
        self.vibrations.load(Ordering::SeqCst)
    }

    pub fn alerts(&self) -> usize {
        self.alerts.load(Ordering::SeqCst)
    }
}

impl CompletionNotifier for CountingNotifier {
    fn vibrate(&self) {
        self.vibrations.fetch_add(1, Ordering::SeqCst);
    }

    fn alert(&self, _title: &str, _message: &str) {
        self.alerts.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Harness {
    pub state: Arc<AppState>,
    pub store: Arc<MemoryStore>,
    pub notifier: Arc<CountingNotifier>,
}

pub fn session() -> SessionContext {
    SessionContext {
        user_id: "user-1".to_string(),
        exercise_id: "7".to_string(),
    }
}

pub fn push_up() -> Exercise {
    Exercise {
        id: "7".to_string(),
        name: "Push-up".to_string(),
        description: Some("Keep your back straight".to_string()),
        image_url: Some("exercises/push-up.png".to_string()),
        recommended_reps: Some(15),
    }
}

pub fn harness(duration_seconds: u32, repetitions: u32) -> Harness {
    harness_with_store(duration_seconds, repetitions, MemoryStore::new())
}

pub fn harness_with_store(duration_seconds: u32, repetitions: u32, store: MemoryStore) -> Harness {
    let store = Arc::new(store);
    let notifier = Arc::new(CountingNotifier::default());
    let config = TimerConfig::new(duration_seconds, repetitions).unwrap();
    let state = Arc::new(AppState::new(session(), config, store.clone(), notifier.clone()));

    Harness {
        state,
        store,
        notifier,
    }
}
