// SPDX-License-Identifier: MPL-2.0
//! Mount bookkeeping shared by the product page components.
//!
//! Every mount of a component draws a fresh [`MountId`] and tags its fetch
//! result with it. The fetch itself runs as an abortable task whose handle is
//! owned by a [`FetchGuard`]; dropping the component drops the guard and
//! aborts the request. Results that still slip through carry an old id and are
//! discarded by the receiving component.

use iced::task::Handle;
use iced::Task;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_MOUNT: AtomicU64 = AtomicU64::new(1);

/// Identifies one mount of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl MountId {
    /// Returns an id never handed out before in this process.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_MOUNT.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Loading state of a component's one-shot fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase<T> {
    #[default]
    Loading,
    Failed,
    Ready(T),
}

impl<T> Phase<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Phase::Failed)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Phase::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Phase::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Owns the abort handle of an in-flight task.
///
/// The task is aborted when the guard is dropped.
pub struct FetchGuard {
    handle: Handle,
}

impl FetchGuard {
    /// Makes `task` abortable and ties it to the returned guard.
    pub fn spawn<T: 'static>(task: Task<T>) -> (Task<T>, Self) {
        let (task, handle) = task.abortable();
        (
            task,
            Self {
                handle: handle.abort_on_drop(),
            },
        )
    }

    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl fmt::Debug for FetchGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchGuard")
            .field("aborted", &self.is_aborted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_ids_are_unique_and_increasing() {
        let first = MountId::next();
        let second = MountId::next();
        assert_ne!(first, second);
        assert!(second.value() > first.value());
    }

    #[test]
    fn phase_accessors() {
        let loading: Phase<u8> = Phase::default();
        assert!(loading.is_loading());
        assert!(loading.ready().is_none());

        let failed: Phase<u8> = Phase::Failed;
        assert!(failed.is_failed());

        let mut ready = Phase::Ready(3u8);
        if let Some(value) = ready.ready_mut() {
            *value += 1;
        }
        assert_eq!(ready.ready(), Some(&4));
    }

    #[test]
    fn guarded_task_starts_live() {
        let (_task, guard) = FetchGuard::spawn(Task::done(7u8));
        assert!(!guard.is_aborted());
        assert!(format!("{guard:?}").contains("aborted: false"));
    }
}
