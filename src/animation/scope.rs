// SPDX-License-Identifier: MPL-2.0
//! Groups the registrations of one view so they can be reverted together.

use super::{Animator, Descriptor, Handle};

/// Registration set owned by a view.
///
/// Reverting the scope cancels every animation it registered, scheduled or
/// in flight, so no event fires for a view that is gone.
#[derive(Debug, Default)]
pub struct AnimationScope {
    handles: Vec<Handle>,
}

impl AnimationScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `descriptor` and remembers its handle.
    pub fn register<K, A>(&mut self, animator: &mut A, descriptor: Descriptor<K>) -> Handle
    where
        A: Animator<K> + ?Sized,
    {
        let handle = animator.register(descriptor);
        self.handles.push(handle);
        handle
    }

    /// Reverts a single registration of this scope.
    pub fn release<K, A>(&mut self, animator: &mut A, handle: Handle) -> bool
    where
        A: Animator<K> + ?Sized,
    {
        let Some(position) = self.handles.iter().position(|h| *h == handle) else {
            return false;
        };
        self.handles.swap_remove(position);
        animator.revert(handle)
    }

    /// Reverts every registration. Returns how many were still live.
    pub fn revert<K, A>(&mut self, animator: &mut A) -> usize
    where
        A: Animator<K> + ?Sized,
    {
        self.handles
            .drain(..)
            .filter(|handle| animator.revert(*handle))
            .count()
    }

    #[must_use]
    pub fn contains(&self, handle: Handle) -> bool {
        self.handles.contains(&handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Property, ScrollTimeline, Settings, Timeline, Tween};

    fn fade(target: u8) -> Descriptor<u8> {
        Descriptor::timed(Timeline::new().from(target, &[(Property::Opacity, 0.0)], Tween::new(1.0)))
    }

    #[test]
    fn revert_clears_all_handles() {
        let mut animator = ScrollTimeline::new(Settings::default());
        let mut scope = AnimationScope::new();
        let a = scope.register(&mut animator, fade(1));
        let b = scope.register(&mut animator, fade(2));
        let outside = animator.register(fade(3));
        assert_eq!(scope.len(), 2);

        assert_eq!(scope.revert(&mut animator), 2);
        assert!(scope.is_empty());
        assert!(!animator.is_registered(a));
        assert!(!animator.is_registered(b));
        assert!(animator.is_registered(outside));
    }

    #[test]
    fn release_reverts_one() {
        let mut animator = ScrollTimeline::new(Settings::default());
        let mut scope = AnimationScope::new();
        let a = scope.register(&mut animator, fade(1));
        let b = scope.register(&mut animator, fade(2));
        assert!(scope.release(&mut animator, a));
        assert!(!scope.contains(a));
        assert!(scope.contains(b));
        assert!(!scope.release(&mut animator, a));
        assert!(animator.is_registered(b));
    }

    #[test]
    fn revert_skips_handles_already_gone() {
        let mut animator = ScrollTimeline::new(Settings::default());
        let mut scope = AnimationScope::new();
        let a = scope.register(&mut animator, fade(1));
        scope.register(&mut animator, fade(2));
        animator.revert(a);
        assert_eq!(scope.revert(&mut animator), 1);
    }
}
