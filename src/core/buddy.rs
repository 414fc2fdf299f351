use chrono::Utc;
use std::time::{Duration, Instant};

use super::error::Result;
use super::mood::{Activity, Mood};
use super::notify::Notifier;
use super::responses::{random_advice, response_for, AdviceSource, RandomAdvice};
use super::state::CompanionState;
use super::store::KeyValueStore;

pub const DEFAULT_STATE_KEY: &str = "byteBuddy";
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(150);

pub const WISDOM_TITLE: &str = "🤖 ByteBuddy's Wisdom:";

#[derive(Debug, Clone)]
pub struct BuddyOptions {
    /// Storage key holding the serialized state
    pub state_key: String,
    /// How long the avatar counts as "changing" after a mood switch
    pub transition: Duration,
}

impl Default for BuddyOptions {
    fn default() -> Self {
        BuddyOptions {
            state_key: DEFAULT_STATE_KEY.to_string(),
            transition: DEFAULT_TRANSITION,
        }
    }
}

/// The companion itself: owns the state and writes it through on every change
pub struct ByteBuddy<S, N, R = RandomAdvice> {
    state: CompanionState,
    store: S,
    notifier: N,
    advice: R,
    options: BuddyOptions,
    changed_at: Option<Instant>,
}

impl<S, N, R> ByteBuddy<S, N, R>
where
    S: KeyValueStore,
    N: Notifier,
    R: AdviceSource,
{
    /// Restore from `store`, falling back to a fresh companion if nothing usable is stored
    pub fn load(store: S, notifier: N, advice: R, options: BuddyOptions) -> Self {
        let state = match store.get(&options.state_key) {
            Ok(Some(raw)) => match CompanionState::from_json(&raw) {
                Ok(state) => {
                    tracing::debug!(
                        key = %options.state_key,
                        count = state.interaction_count,
                        "restored state"
                    );
                    state
                }
                Err(e) => {
                    tracing::warn!(
                        key = %options.state_key,
                        error = %e,
                        "stored state is malformed, using defaults"
                    );
                    CompanionState::default()
                }
            },
            Ok(None) => {
                tracing::debug!(key = %options.state_key, "no stored state, starting fresh");
                CompanionState::default()
            }
            Err(e) => {
                tracing::warn!(
                    key = %options.state_key,
                    error = %e,
                    "could not read storage, using defaults"
                );
                CompanionState::default()
            }
        };

        ByteBuddy {
            state,
            store,
            notifier,
            advice,
            options,
            changed_at: None,
        }
    }

    pub fn state(&self) -> &CompanionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// True while the mood-change animation window is open. Cosmetic only.
    pub fn is_changing(&self) -> bool {
        self.changed_at
            .is_some_and(|at| at.elapsed() < self.options.transition)
    }

    /// Switch mood. Returns `false` without touching anything if already in `mood`.
    pub fn set_mood(&mut self, mood: Mood) -> Result<bool> {
        if mood == self.state.mood {
            return Ok(false);
        }

        tracing::info!(from = %self.state.mood, to = %mood, "mood changed");
        self.changed_at = Some(Instant::now());
        self.state.mood = mood;
        self.state.touch(Utc::now());
        self.persist()?;
        Ok(true)
    }

    pub fn perform_activity(&mut self, activity: Activity) -> Result<&'static str> {
        let mood = self.state.mood;
        let response = response_for(mood, activity);

        tracing::info!(%mood, %activity, "activity performed");
        self.state.last_activity = Some(activity);
        self.state.touch(Utc::now());

        // The reply is shown even if the write below fails
        let title = format!("{} ByteBuddy responds:", mood.emoji());
        self.notifier.notify(&title, response);

        self.persist()?;
        Ok(response)
    }

    pub fn request_advice(&mut self) -> Result<&'static str> {
        let advice = random_advice(&mut self.advice);

        tracing::info!("advice requested");
        self.state.touch(Utc::now());
        self.notifier.notify(WISDOM_TITLE, advice);

        self.persist()?;
        Ok(advice)
    }

    fn persist(&mut self) -> Result<()> {
        let json = self.state.to_json()?;
        self.store.set(&self.options.state_key, &json)?;
        tracing::debug!(
            key = %self.options.state_key,
            count = self.state.interaction_count,
            "state persisted"
        );
        Ok(())
    }
}
