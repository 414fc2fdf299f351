pub mod buddy;
pub mod error;
pub mod mood;
pub mod notify;
pub mod responses;
pub mod state;
pub mod store;

pub use buddy::{BuddyOptions, ByteBuddy};
pub use error::{BuddyError, Result};
pub use mood::{Activity, ColorTag, Mood};
pub use notify::{NotificationLog, Notifier};
pub use responses::{
    activity_info, emoji_for, random_advice, response_for, ActivityInfo, AdviceSource,
    RandomAdvice, ADVICE_QUOTES,
};
pub use state::CompanionState;
pub use store::{FileStore, KeyValueStore, MemoryStore};
