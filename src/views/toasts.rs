//! Transient notification surface
//!
//! A bounded, newest-first queue of toasts. Each toast auto-dismisses after
//! the configured TTL; pushing past the limit drops the oldest.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
    Warning,
}

impl ToastVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast-default",
            ToastVariant::Destructive => "toast-destructive",
            ToastVariant::Warning => "toast-warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Warning,
        }
    }
}

/// Limits shared by every toaster, built once from configuration.
#[derive(Debug, Clone, Copy)]
pub struct ToastPolicy {
    pub limit: usize,
    pub ttl: Duration,
}

impl Default for ToastPolicy {
    fn default() -> Self {
        Self {
            limit: 3,
            ttl: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
struct Posted {
    toast: Toast,
    expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Toaster {
    policy: ToastPolicy,
    queue: VecDeque<Posted>,
}

/// A toast ready for rendering, with its remaining lifetime.
#[derive(Debug, Clone)]
pub struct VisibleToast {
    pub toast: Toast,
    pub remaining_ms: u128,
}

impl Toaster {
    pub fn new(policy: ToastPolicy) -> Self {
        Self {
            policy,
            queue: VecDeque::with_capacity(policy.limit),
        }
    }

    pub fn push(&mut self, toast: Toast) {
        self.push_at(toast, Instant::now());
    }

    pub fn push_at(&mut self, toast: Toast, now: Instant) {
        if self.policy.limit == 0 {
            return;
        }
        self.queue.push_front(Posted {
            toast,
            expires_at: now + self.policy.ttl,
        });
        self.queue.truncate(self.policy.limit);
    }

    /// Drop expired toasts and return the rest, newest first.
    pub fn visible_at(&mut self, now: Instant) -> Vec<VisibleToast> {
        self.queue.retain(|posted| posted.expires_at > now);
        self.queue
            .iter()
            .map(|posted| VisibleToast {
                toast: posted.toast.clone(),
                remaining_ms: posted.expires_at.duration_since(now).as_millis(),
            })
            .collect()
    }

    pub fn visible(&mut self) -> Vec<VisibleToast> {
        self.visible_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(limit: usize, ttl_ms: u64) -> ToastPolicy {
        ToastPolicy {
            limit,
            ttl: Duration::from_millis(ttl_ms),
        }
    }

    #[test]
    fn test_bounded_newest_first() {
        let mut toaster = Toaster::new(policy(2, 5_000));
        let now = Instant::now();
        toaster.push_at(Toast::info("one", ""), now);
        toaster.push_at(Toast::info("two", ""), now);
        toaster.push_at(Toast::info("three", ""), now);

        let titles: Vec<_> = toaster.visible_at(now).into_iter().map(|v| v.toast.title).collect();
        assert_eq!(titles, vec!["three", "two"]);
    }

    #[test]
    fn test_auto_dismiss() {
        let mut toaster = Toaster::new(policy(3, 1_000));
        let now = Instant::now();
        toaster.push_at(Toast::destructive("Location required", ""), now);
        toaster.push_at(Toast::info("later", ""), now + Duration::from_millis(600));

        let visible = toaster.visible_at(now + Duration::from_millis(1_200));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].toast.title, "later");
        assert_eq!(visible[0].remaining_ms, 400);
    }

    #[test]
    fn test_zero_limit_shows_nothing() {
        let mut toaster = Toaster::new(policy(0, 1_000));
        toaster.push(Toast::info("hidden", ""));
        assert!(toaster.visible().is_empty());
    }
}
