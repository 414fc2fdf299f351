use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::BuddyError;

/// ByteBuddy's current emotional state
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Tired,
    #[default]
    Curious,
    Excited,
}

/// Theme color attached to each mood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    WarmOrange,
    SoftGray,
    MagicPurple,
    ElectricBlue,
}

impl ColorTag {
    pub fn name(&self) -> &'static str {
        match self {
            ColorTag::WarmOrange => "warm-orange",
            ColorTag::SoftGray => "soft-gray",
            ColorTag::MagicPurple => "magic-purple",
            ColorTag::ElectricBlue => "electric-blue",
        }
    }

    /// RGB equivalent of the theme's HSL value
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorTag::WarmOrange => (255, 181, 77),
            ColorTag::SoftGray => (233, 234, 237),
            ColorTag::MagicPurple => (190, 94, 237),
            ColorTag::ElectricBlue => (0, 191, 255),
        }
    }
}

impl Mood {
    /// Picker order
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Tired, Mood::Curious, Mood::Excited];

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Tired => "😴",
            Mood::Curious => "🤔",
            Mood::Excited => "🤖",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Tired => "tired",
            Mood::Curious => "curious",
            Mood::Excited => "excited",
        }
    }

    pub fn color(&self) -> ColorTag {
        match self {
            Mood::Happy => ColorTag::WarmOrange,
            Mood::Tired => ColorTag::SoftGray,
            Mood::Curious => ColorTag::MagicPurple,
            Mood::Excited => ColorTag::ElectricBlue,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Mood {
    type Err = BuddyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.name() == wanted)
            .ok_or_else(|| BuddyError::UnknownMood(s.to_string()))
    }
}

/// Something the user can do with ByteBuddy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Charge,
    Explore,
    Sleep,
    Learn,
}

impl Activity {
    /// Menu order
    pub const ALL: [Activity; 4] = [
        Activity::Charge,
        Activity::Explore,
        Activity::Sleep,
        Activity::Learn,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            Activity::Charge => "⚡",
            Activity::Explore => "🔍",
            Activity::Sleep => "💤",
            Activity::Learn => "📚",
        }
    }

    /// Display name shown in menus
    pub fn name(&self) -> &'static str {
        match self {
            Activity::Charge => "Charge",
            Activity::Explore => "Explore",
            Activity::Sleep => "Sleep",
            Activity::Learn => "Learn",
        }
    }

    /// Lowercase identifier used on the command line and in storage
    pub fn key(&self) -> &'static str {
        match self {
            Activity::Charge => "charge",
            Activity::Explore => "explore",
            Activity::Sleep => "sleep",
            Activity::Learn => "learn",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Activity {
    type Err = BuddyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Activity::ALL
            .into_iter()
            .find(|activity| activity.key() == wanted)
            .ok_or_else(|| BuddyError::UnknownActivity(s.to_string()))
    }
}
