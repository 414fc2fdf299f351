use chrono::Local;
use colored::*;

use crate::core::{activity_info, emoji_for, Activity, ColorTag, CompanionState, Mood};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Terminal rendering of ByteBuddy
pub struct BuddyFormatter;

impl BuddyFormatter {
    /// Full status card: header, avatar, last activity and stats
    pub fn format_status(state: &CompanionState, changing: bool) -> String {
        let mood = state.mood;
        let avatar = if changing {
            format!("✨ ( {} ) ✨", emoji_for(mood))
        } else {
            format!("( {} )", emoji_for(mood))
        };

        let activity_line = match state.last_activity {
            Some(activity) => {
                let info = activity_info(activity);
                format!("Last activity: {} {}", info.emoji, info.name)
            }
            None => "What should we do together?".to_string(),
        };

        let last_interaction = match state.last_interaction {
            Some(at) => format!(
                "\nLast interaction: {}",
                at.with_timezone(&Local).format("%H:%M:%S").to_string().bold()
            ),
            None => String::new(),
        };

        format!(
            r#"
╔══════════════════════════════════════════════════════╗
║                  Meet ByteBuddy 🤖                   ║
╚══════════════════════════════════════════════════════╝
{}

                        {}

{}
{}

{}
📊 Interaction Stats
{}
Total interactions: {}
Current mood: {}{}
{}"#,
            "Your friendly digital companion who responds to your every interaction!".dimmed(),
            avatar,
            Self::paint(&format!("I'm feeling {}!", mood), mood.color()).bold(),
            activity_line.dimmed(),
            RULE,
            RULE,
            state.interaction_count.to_string().bold(),
            mood.name().bold(),
            last_interaction,
            RULE
        )
    }

    /// Mood picker with the active mood marked
    pub fn format_moods(current: Mood) -> String {
        let mut out = format!("{}\n", "How are you feeling, ByteBuddy?".bold());
        for mood in Mood::ALL {
            let line = format!("{} {}", mood.emoji(), mood.name());
            if mood == current {
                out.push_str(&format!("  ▶ {}\n", Self::paint(&line, mood.color()).bold()));
            } else {
                out.push_str(&format!("    {}\n", line));
            }
        }
        out
    }

    pub fn format_activities() -> String {
        let mut out = format!("{}\n", "What would you like to do?".bold());
        for activity in Activity::ALL {
            let info = activity_info(activity);
            out.push_str(&format!(
                "    {} {:<8} {}\n",
                info.emoji,
                info.name,
                format!("(do {})", activity.key()).dimmed()
            ));
        }
        out
    }

    /// Boxed transient notification
    pub fn format_toast(title: &str, body: &str) -> String {
        format!(
            "┌─ {}\n│ {}\n└─",
            title.bold(),
            body
        )
    }

    fn paint(text: &str, tag: ColorTag) -> ColoredString {
        let (r, g, b) = tag.rgb();
        text.truecolor(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_status_fresh() {
        plain();
        let card = BuddyFormatter::format_status(&CompanionState::default(), false);
        assert!(card.contains("Meet ByteBuddy"));
        assert!(card.contains("( 🤔 )"));
        assert!(card.contains("I'm feeling curious!"));
        assert!(card.contains("What should we do together?"));
        assert!(card.contains("Total interactions: 0"));
        assert!(!card.contains("Last interaction:"));
        assert!(!card.contains("✨"));
    }

    #[test]
    fn test_status_after_activity() {
        plain();
        let state = CompanionState {
            mood: Mood::Happy,
            last_activity: Some(Activity::Charge),
            interaction_count: 5,
            last_interaction: Some(Utc::now()),
        };
        let card = BuddyFormatter::format_status(&state, true);
        assert!(card.contains("✨ ( 😊 ) ✨"));
        assert!(card.contains("Last activity: ⚡ Charge"));
        assert!(card.contains("Total interactions: 5"));
        assert!(card.contains("Current mood: happy"));
        assert!(card.contains("Last interaction: "));
    }

    #[test]
    fn test_mood_picker_marks_current() {
        plain();
        let picker = BuddyFormatter::format_moods(Mood::Tired);
        assert!(picker.contains("▶ 😴 tired"));
        assert!(picker.contains("    😊 happy"));
    }

    #[test]
    fn test_activity_menu_lists_all() {
        plain();
        let menu = BuddyFormatter::format_activities();
        for activity in Activity::ALL {
            assert!(menu.contains(activity.name()));
        }
    }

    #[test]
    fn test_toast() {
        plain();
        let toast = BuddyFormatter::format_toast("🤖 ByteBuddy's Wisdom:", "Keep going");
        assert_eq!(toast, "┌─ 🤖 ByteBuddy's Wisdom:\n│ Keep going\n└─");
    }
}
