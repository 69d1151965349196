use std::collections::VecDeque;

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient, non-blocking message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Bounded list of visible toasts; the oldest is dropped once `limit` is exceeded.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    limit: usize,
    next_id: ToastId,
}

impl ToastQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            limit: limit.max(1),
            next_id: 1,
        }
    }

    /// Assigns the toast an id and shows it.
    pub fn push(&mut self, mut toast: Toast) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        toast.id = id;
        self.toasts.push_front(toast);
        self.toasts.truncate(self.limit);
        id
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut q = ToastQueue::new(3);
        let a = q.push(Toast::new("a", ""));
        let b = q.push(Toast::new("b", ""));
        assert!(b > a);
        let titles = q.iter().map(|t| t.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["b", "a"]);
    }

    #[test]
    fn limit_evicts_oldest() {
        let mut q = ToastQueue::new(1);
        let first = q.push(Toast::new("first", ""));
        q.push(Toast::destructive("second", ""));
        assert_eq!(q.len(), 1);
        assert!(!q.dismiss(first));
        let t = q.iter().next().unwrap();
        assert_eq!(t.title, "second");
        assert!(t.is_error());
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut q = ToastQueue::new(2);
        let id = q.push(Toast::new("x", "y"));
        assert!(q.dismiss(id));
        assert!(q.is_empty());
        assert!(!q.dismiss(id));
    }
}
