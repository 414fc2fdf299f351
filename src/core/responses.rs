//! Lookup tables behind ByteBuddy's personality.
//!
//! Every table is an exhaustive `match`, so a new mood or activity will not
//! compile until each table has an entry for it.

use rand::Rng;

use super::mood::{Activity, Mood};

pub const ADVICE_QUOTES: [&str; 10] = [
    "Remember: Even robots need regular maintenance. Take care of yourself! 🔧",
    "Every bug is just a feature waiting to be understood! 🐛✨",
    "The best code is written with curiosity and caffeine! ☕️💻",
    "Don't forget to save your progress - in code and in life! 💾",
    "Error messages are just the computer's way of asking for help! 🤝",
    "Keep your algorithms simple and your dreams complex! 🌟",
    "Even artificial intelligence knows that learning never stops! 📚🤖",
    "Debugging is like detective work - embrace the mystery! 🔍",
    "Version control your life: commit to growth, branch out, merge experiences! 🌿",
    "The most advanced technology is a kind heart and an open mind! ❤️",
];

/// Glyph and display name of an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityInfo {
    pub emoji: &'static str,
    pub name: &'static str,
}

pub fn emoji_for(mood: Mood) -> &'static str {
    mood.emoji()
}

pub fn activity_info(activity: Activity) -> ActivityInfo {
    ActivityInfo {
        emoji: activity.emoji(),
        name: activity.name(),
    }
}

/// ByteBuddy's reply when `activity` is performed while feeling `mood`
pub fn response_for(mood: Mood, activity: Activity) -> &'static str {
    match (mood, activity) {
        (Mood::Happy, Activity::Charge) => {
            "I'm already buzzing with energy! ⚡️ Let's build something amazing!"
        }
        (Mood::Happy, Activity::Explore) => {
            "Adventure time! 🚀 I'm ready to discover new things with you!"
        }
        (Mood::Happy, Activity::Sleep) => {
            "Even when I'm happy, rest is important. Sweet digital dreams! 💤"
        }
        (Mood::Happy, Activity::Learn) => {
            "Knowledge makes me glow brighter! 🌟 What should we learn today?"
        }

        (Mood::Tired, Activity::Charge) => "Ah, that's better... ⚡ My circuits feel refreshed!",
        (Mood::Tired, Activity::Explore) => {
            "I'm too sleepy to explore right now... 😴 Maybe after a nap?"
        }
        (Mood::Tired, Activity::Sleep) => "Finally! Time for some well-deserved downtime... 💤",
        (Mood::Tired, Activity::Learn) => {
            "Learning while tired? My processors need a break first! 🧠"
        }

        (Mood::Curious, Activity::Charge) => {
            "Charging up my curiosity circuits! ⚡ Ready to investigate!"
        }
        (Mood::Curious, Activity::Explore) => {
            "Perfect! 🔍 There's so much to discover and understand!"
        }
        (Mood::Curious, Activity::Sleep) => {
            "But I'm too curious to sleep... What if I miss something? ❓"
        }
        (Mood::Curious, Activity::Learn) => "Yes! Feed my hunger for knowledge! 🤖📚",

        (Mood::Excited, Activity::Charge) => {
            "MAXIMUM POWER! ⚡⚡ I'm practically vibrating with energy!"
        }
        (Mood::Excited, Activity::Explore) => {
            "LET'S GO EVERYWHERE! 🚀🌟 The digital world is our playground!"
        }
        (Mood::Excited, Activity::Sleep) => {
            "Sleep? Who needs sleep when there's so much to do! 🤖"
        }
        (Mood::Excited, Activity::Learn) => {
            "TEACH ME EVERYTHING! 🧠💥 My learning algorithms are optimized!"
        }
    }
}

/// Picks an index in `0..len` for advice selection
pub trait AdviceSource {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform selection from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomAdvice;

impl AdviceSource for RandomAdvice {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

impl<F> AdviceSource for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

pub fn random_advice<R: AdviceSource + ?Sized>(source: &mut R) -> &'static str {
    let len = ADVICE_QUOTES.len();
    ADVICE_QUOTES[source.pick(len) % len]
}
