use crate::core::Notifier;
use crate::formatter::BuddyFormatter;

/// Prints notifications to stdout as toast boxes
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, title: &str, body: &str) {
        println!("{}", BuddyFormatter::format_toast(title, body));
    }
}
