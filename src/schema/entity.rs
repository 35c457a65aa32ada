use serde::{Deserialize, Serialize};

use super::grammar::{Person, Tense};

/// Newtype wrapper for entity IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// How the narration refers to an actor: as the speaker, the addressee,
/// or someone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Referral {
    First,
    Second,
    #[default]
    Third,
}

/// Anyone who can be the subject of a conjugated verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub referral: Referral,
    #[serde(default)]
    pub plural: bool,
    /// Addressed with the formal "Sie" register.
    #[serde(default)]
    pub formal: bool,
}

impl Actor {
    pub fn new(id: EntityId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            referral: Referral::Third,
            plural: false,
            formal: false,
        }
    }

    /// Grammatical person derived from referral, number and register.
    ///
    /// Formal address takes third-plural agreement whatever the number;
    /// third-person plurals land on the same person.
    pub fn person(&self) -> Person {
        match (self.referral, self.plural, self.formal) {
            (Referral::First, false, _) => Person::FirstSingular,
            (Referral::First, true, _) => Person::FirstPlural,
            (Referral::Second, _, true) => Person::ThirdPlural,
            (Referral::Second, false, false) => Person::SecondSingular,
            (Referral::Second, true, false) => Person::SecondPlural,
            (Referral::Third, false, _) => Person::ThirdSingular,
            (Referral::Third, true, _) => Person::ThirdPlural,
        }
    }

    /// Pick `singular` or `plural` by the actor's number.
    pub fn select_by_number<T>(&self, singular: T, plural: T) -> T {
        if self.plural {
            plural
        } else {
            singular
        }
    }
}

/// A player character. Each one narrates in its own tense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCharacter {
    pub actor: Actor,
    #[serde(default)]
    referral_tense: Tense,
}

impl PlayerCharacter {
    pub fn new(actor: Actor) -> Self {
        Self {
            actor,
            referral_tense: Tense::Present,
        }
    }

    pub fn id(&self) -> EntityId {
        self.actor.id
    }

    pub fn tense(&self) -> Tense {
        self.referral_tense
    }

    pub fn set_tense(&mut self, tense: Tense) {
        tracing::debug!(pc = self.actor.id.0, ?tense, "narrative tense changed");
        self.referral_tense = tense;
    }
}
