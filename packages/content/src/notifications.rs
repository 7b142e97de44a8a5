//! In-app notifications for the admin header.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    /// Display string, e.g. "09:41" or "2h ago".
    pub time: String,
    pub read: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u32,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial items shown in a fresh dashboard session.
    pub fn seeded() -> Self {
        let mut n = Self::new();
        n.push(
            NotificationLevel::Info,
            "Welcome back",
            "The public site is live and serving traffic.",
            "today",
        );
        n.push(
            NotificationLevel::Success,
            "Testimonials synced",
            "Active testimonials are published in their configured order.",
            "1h ago",
        );
        n
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Newest first.
    pub fn newest_first(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().rev()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn push(
        &mut self,
        level: NotificationLevel,
        title: &str,
        message: &str,
        time: &str,
    ) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            level,
            title: title.to_string(),
            message: message.to_string(),
            time: time.to_string(),
            read: false,
        });
        id
    }

    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|n| n.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_unread() {
        let mut n = Notifications::new();
        let a = n.push(NotificationLevel::Info, "a", "", "now");
        let b = n.push(NotificationLevel::Error, "b", "", "now");
        assert_ne!(a, b);
        assert_eq!(n.unread_count(), 2);
        assert!(n.mark_read(a));
        assert_eq!(n.unread_count(), 1);
        assert!(!n.mark_read(999));
    }

    #[test]
    fn test_newest_first() {
        let mut n = Notifications::new();
        n.push(NotificationLevel::Info, "first", "", "");
        n.push(NotificationLevel::Info, "second", "", "");
        let titles: Vec<&str> = n.newest_first().map(|x| x.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn test_mark_all_dismiss_clear() {
        let mut n = Notifications::seeded();
        assert_eq!(n.unread_count(), 2);
        n.mark_all_read();
        assert_eq!(n.unread_count(), 0);

        let id = n.push(NotificationLevel::Warning, "w", "", "");
        n.dismiss(id);
        assert_eq!(n.items().len(), 2);

        n.clear();
        assert!(n.items().is_empty());
        // ids keep increasing after a clear
        assert!(n.push(NotificationLevel::Info, "x", "", "") > id);
    }

    #[test]
    fn test_dismiss_unread_drops_badge() {
        let mut n = Notifications::new();
        let a = n.push(NotificationLevel::Error, "a", "", "");
        n.push(NotificationLevel::Info, "b", "", "");
        n.dismiss(a);
        assert_eq!(n.unread_count(), 1);
        n.dismiss(a);
        assert_eq!(n.items().len(), 1);
    }
}
