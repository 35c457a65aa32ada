/// Separable-verb conjugation across coordinated clauses.
///
/// A `VerbHelper` lives for one sentence. It remembers the finite verb it
/// last emitted so that a coordinated clause reusing the same finite verb
/// renders without repeating it ("Sie steht auf und hinaus"). Whether the
/// next clause needs inverted order is never inferred: the sentence
/// assembler calls `reverse_next` at the coordination boundary.

use crate::schema::grammar::{Person, Tense};
use crate::schema::lexicon::{LexiconError, Verb};

/// The two states of a `VerbHelper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerbState {
    #[default]
    Fresh,
    PendingReversal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerbHelper {
    state: VerbState,
    /// `None` is the "undefined" sentinel.
    last_verb: Option<String>,
    participle: String,
}

impl VerbHelper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> VerbState {
        self.state
    }

    pub fn last_verb(&self) -> Option<&str> {
        self.last_verb.as_deref()
    }

    /// The participle recorded by the most recent conjugation.
    pub fn participle(&self) -> &str {
        &self.participle
    }

    pub fn set_participle(&mut self, participle: &str) {
        self.participle = participle.to_string();
    }

    /// Render the next clause in inverted order.
    pub fn reverse_next(&mut self) {
        tracing::trace!("verb helper: pending reversal");
        self.state = VerbState::PendingReversal;
    }

    /// Emit the finite-verb token for a clause.
    ///
    /// Fresh: records `participle`; emits `finite_verb` unless it repeats
    /// the last emitted verb, in which case it emits nothing and forgets
    /// the last verb. Pending reversal: clears the reversal, records
    /// `finite_verb` as the participle, emits `" {participle} {finite_verb}"`.
    pub fn conjugate_verb(&mut self, participle: &str, finite_verb: &str) -> String {
        match self.state {
            VerbState::Fresh => {
                self.set_participle(participle);
                if self.last_verb.as_deref() != Some(finite_verb) {
                    tracing::trace!(finite_verb, participle, "verb helper: emit");
                    self.last_verb = Some(finite_verb.to_string());
                    finite_verb.to_string()
                } else {
                    tracing::trace!(finite_verb, participle, "verb helper: suppress repeat");
                    self.last_verb = None;
                    String::new()
                }
            }
            VerbState::PendingReversal => {
                tracing::trace!(finite_verb, participle, "verb helper: reversed");
                self.state = VerbState::Fresh;
                self.set_participle(finite_verb);
                format!(" {} {}", participle, finite_verb)
            }
        }
    }

    /// Forget everything; the next sentence starts fresh.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The finite form of `verb` for `person` in `tense`.
///
/// A missing Future II form falls back to Future I; anything else
/// missing is a content defect.
pub fn resolve_verb_form(verb: &Verb, person: Person, tense: Tense) -> Result<&str, LexiconError> {
    if let Some(form) = verb.form(person, tense) {
        return Ok(form);
    }
    if tense == Tense::Future2 {
        if let Some(form) = verb.form(person, Tense::Future1) {
            tracing::trace!(lemma = %verb.lemma, "no future II form, using future I");
            return Ok(form);
        }
    }
    tracing::warn!(lemma = %verb.lemma, person = person.number(), ?tense, "missing verb form");
    Err(LexiconError::MissingForm {
        lemma: verb.lemma.clone(),
        person,
        tense,
    })
}
