/// Tense selection and scoped tense overrides.
///
/// Two independent tense states exist: each player character's six-way
/// referral tense, and the single global past/present flag in
/// `NarrationConfig`. Nothing here ever derives one from the other.

use std::ops::{Deref, DerefMut};

use crate::core::config::NarrationConfig;
use crate::schema::entity::PlayerCharacter;
use crate::schema::grammar::Tense;

/// Pick the value matching the character's tense. Future I and Future II
/// share the `future` value.
pub fn select_by_tense<T>(
    character: &PlayerCharacter,
    present: T,
    imperfect: T,
    perfect: T,
    pluperfect: T,
    future: T,
) -> T {
    match character.tense() {
        Tense::Present => present,
        Tense::Imperfect => imperfect,
        Tense::Perfect => perfect,
        Tense::Pluperfect => pluperfect,
        Tense::Future1 | Tense::Future2 => future,
    }
}

/// Pick by the past/present flag only.
pub fn select_by_past_present<F, T>(flag: &F, present: T, past: T) -> T
where
    F: PastTenseFlag + ?Sized,
{
    if flag.is_past() {
        past
    } else {
        present
    }
}

/// Two-way selection on the character's tense: `present` for the present
/// tense, `past` for all five others.
pub fn time_select<T>(character: &PlayerCharacter, present: T, past: T) -> T {
    if character.tense() == Tense::Present {
        present
    } else {
        past
    }
}

/// Anything holding a global past/present flag that can be overridden.
pub trait PastTenseFlag {
    fn is_past(&self) -> bool;
    fn set_past(&mut self, past: bool);
}

impl PastTenseFlag for NarrationConfig {
    fn is_past(&self) -> bool {
        self.use_past_tense
    }

    fn set_past(&mut self, past: bool) {
        self.use_past_tense = past;
    }
}

/// Holds the flag overridden while alive and puts the saved value back
/// when dropped, including during unwinding.
pub struct TenseOverride<'a, T: PastTenseFlag + ?Sized> {
    target: &'a mut T,
    saved: bool,
}

impl<'a, T: PastTenseFlag + ?Sized> TenseOverride<'a, T> {
    pub fn new(target: &'a mut T, past: bool) -> Self {
        let saved = target.is_past();
        target.set_past(past);
        tracing::debug!(saved, past, "tense override entered");
        Self { target, saved }
    }
}

impl<T: PastTenseFlag + ?Sized> Deref for TenseOverride<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &*self.target
    }
}

impl<T: PastTenseFlag + ?Sized> DerefMut for TenseOverride<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.target
    }
}

impl<T: PastTenseFlag + ?Sized> Drop for TenseOverride<'_, T> {
    fn drop(&mut self) {
        self.target.set_past(self.saved);
        tracing::debug!(restored = self.saved, "tense override left");
    }
}

/// Run `callback` with the flag set to `past`, then restore it however
/// the callback exits.
pub fn with_tense<T, R, F>(target: &mut T, past: bool, callback: F) -> R
where
    T: PastTenseFlag + ?Sized,
    F: FnOnce(&mut T) -> R,
{
    let mut guard = TenseOverride::new(target, past);
    callback(&mut *guard)
}

pub fn with_past<T, R, F>(target: &mut T, callback: F) -> R
where
    T: PastTenseFlag + ?Sized,
    F: FnOnce(&mut T) -> R,
{
    with_tense(target, true, callback)
}

pub fn with_present<T, R, F>(target: &mut T, callback: F) -> R
where
    T: PastTenseFlag + ?Sized,
    F: FnOnce(&mut T) -> R,
{
    with_tense(target, false, callback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::entity::{Actor, EntityId};
    use proptest::prelude::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn pc(tense: Tense) -> PlayerCharacter {
        let mut pc = PlayerCharacter::new(Actor::new(EntityId(1), "Anna"));
        pc.set_tense(tense);
        pc
    }

    fn select(tense: Tense) -> &'static str {
        select_by_tense(&pc(tense), "geht", "ging", "ist gegangen", "war gegangen", "wird gehen")
    }

    #[test]
    fn select_by_tense_branches() {
        assert_eq!(select(Tense::Present), "geht");
        assert_eq!(select(Tense::Imperfect), "ging");
        assert_eq!(select(Tense::Perfect), "ist gegangen");
        assert_eq!(select(Tense::Pluperfect), "war gegangen");
        assert_eq!(select(Tense::Future1), "wird gehen");
    }

    #[test]
    fn both_future_tenses_share_a_branch() {
        assert_eq!(select(Tense::Future2), select(Tense::Future1));
    }

    #[test]
    fn past_present_follows_global_flag() {
        let mut config = NarrationConfig::default();
        assert_eq!(select_by_past_present(&config, "ist", "war"), "ist");
        config.set_past_tense(true);
        assert_eq!(select_by_past_present(&config, "ist", "war"), "war");
    }

    #[test]
    fn selectors_use_independent_state() {
        let mut config = NarrationConfig::default();
        config.set_past_tense(true);
        let character = pc(Tense::Present);
        assert_eq!(select_by_past_present(&config, "ist", "war"), "war");
        assert_eq!(time_select(&character, "ist", "war"), "ist");
        assert_eq!(character.tense(), Tense::Present);
    }

    #[test]
    fn time_select_treats_every_non_present_as_past() {
        assert_eq!(time_select(&pc(Tense::Present), 0, 1), 0);
        for tense in &Tense::ALL[1..] {
            assert_eq!(time_select(&pc(*tense), 0, 1), 1);
        }
    }

    #[test]
    fn with_past_sees_override_and_restores() {
        let mut config = NarrationConfig::default();
        let seen = with_past(&mut config, |c| select_by_past_present(&*c, "ist", "war"));
        assert_eq!(seen, "war");
        assert!(!config.use_past_tense);

        config.set_past_tense(true);
        let seen = with_present(&mut config, |c| select_by_past_present(&*c, "ist", "war"));
        assert_eq!(seen, "ist");
        assert!(config.use_past_tense);
    }

    #[test]
    fn restores_on_error_result() {
        let mut config = NarrationConfig::default();
        let result: Result<(), String> =
            with_past(&mut config, |_| Err("content defect".to_string()));
        assert!(result.is_err());
        assert!(!config.use_past_tense);
    }

    #[test]
    fn restores_on_panic() {
        let mut config = NarrationConfig::default();
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            with_past(&mut config, |_| -> () { panic!("callback blew up") })
        }));
        assert!(outcome.is_err());
        assert!(!config.use_past_tense);
    }

    #[test]
    fn nested_overrides_unwind_in_order() {
        let mut config = NarrationConfig::default();
        with_past(&mut config, |outer| {
            assert!(outer.use_past_tense);
            with_present(outer, |inner| assert!(!inner.use_past_tense));
            assert!(outer.use_past_tense);
        });
        assert!(!config.use_past_tense);
    }

    proptest! {
        #[test]
        fn flag_is_restored_unconditionally(
            initial in any::<bool>(),
            past in any::<bool>(),
            callback_sets in proptest::option::of(any::<bool>()),
        ) {
            let mut config = NarrationConfig::default();
            config.set_past_tense(initial);
            with_tense(&mut config, past, |c| {
                if let Some(value) = callback_sets {
                    c.set_past_tense(value);
                }
            });
            prop_assert_eq!(config.use_past_tense, initial);
        }
    }
}
