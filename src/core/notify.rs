/// Receives transient `(title, body)` notifications. Fire-and-forget.
pub trait Notifier {
    fn notify(&mut self, title: &str, body: &str);
}

/// Keeps every notification in call order
#[derive(Debug, Default, Clone)]
pub struct NotificationLog {
    pub entries: Vec<(String, String)>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&(String, String)> {
        self.entries.last()
    }
}

impl Notifier for NotificationLog {
    fn notify(&mut self, title: &str, body: &str) {
        self.entries.push((title.to_string(), body.to_string()));
    }
}
