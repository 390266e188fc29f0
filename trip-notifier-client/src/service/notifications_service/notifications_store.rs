use crate::dto::NotificationItem;
use std::collections::{HashSet, VecDeque};

///
/// Bounded window of the most recent notifications, newest first.
///
/// Store holds at most one notification with the same id.
/// Once notification is read it never becomes unread again.
///
pub struct NotificationsStore {
    items: VecDeque<NotificationItem>,
    max_len: usize,
}

impl NotificationsStore {
    pub fn new(max_len: usize) -> Self {
        Self {
            // Grows with content, window size may be much larger than what is received
            items: VecDeque::new(),
            max_len,
        }
    }

    ///
    /// Replaces content of the store with notifications sorted from the newest.
    /// Only the first occurrence of every id is kept.
    ///
    pub fn replace_all(&mut self, items: Vec<NotificationItem>) {
        let mut ids = HashSet::with_capacity(items.len());

        self.items = items
            .into_iter()
            .filter(|item| ids.insert(item.id.clone()))
            .take(self.max_len)
            .collect();
    }

    ///
    /// Inserts notification as the newest one and evicts the oldest ones
    /// that don't fit in the window.
    ///
    /// Notification that is already stored is moved to the front.
    ///
    pub fn prepend(&mut self, mut item: NotificationItem) {
        if let Some(position) = self.position(&item.id) {
            if let Some(previous) = self.items.remove(position) {
                item.is_read |= previous.is_read;
            }
        }

        self.items.push_front(item);
        self.items.truncate(self.max_len);
    }

    ///
    /// ### Returns
    /// true when notification was found and it was unread
    ///
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if !item.is_read => {
                item.is_read = true;
                true
            }
            _ => false,
        }
    }

    ///
    /// ### Returns
    /// number of notifications that changed
    ///
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|item| !item.is_read) {
            item.is_read = true;
            changed += 1;
        }

        changed
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_read).count()
    }

    pub fn items(&self) -> impl Iterator<Item = &NotificationItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}
