/// Grammatical axes: case, article, person, tense, gender.
///
/// Plain value types. Nothing here carries state; the resolvers in
/// `core` decide what to do with them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::lexicon::LexiconError;

/// German grammatical case. Used both for the ordinary clause case and,
/// held separately, for the list case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Case {
    #[default]
    Nominative,
    Genitive,
    Dative,
    Accusative,
}

impl Case {
    pub const ALL: [Case; 4] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
    ];

    /// Column index into the article tables.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Nominative => 0,
            Self::Genitive => 1,
            Self::Dative => 2,
            Self::Accusative => 3,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nominative => "nominative",
            Self::Genitive => "genitive",
            Self::Dative => "dative",
            Self::Accusative => "accusative",
        };
        f.write_str(name)
    }
}

/// Article policy applied uniformly to the items of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ListArticle {
    /// der/die/das
    #[default]
    Definite,
    /// ein/eine
    Indefinite,
}

/// Grammatical gender of a noun; plural nouns share one article column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

/// The six German grammatical persons.
///
/// Persons 4–6 are the plural forms; `ThirdPlural` doubles as the formal
/// "Sie" address, which takes third-plural verb agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    /// ich
    FirstSingular,
    /// du
    SecondSingular,
    /// er/sie/es
    ThirdSingular,
    /// wir
    FirstPlural,
    /// ihr
    SecondPlural,
    /// sie / Sie
    ThirdPlural,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    /// The traditional 1–6 numbering.
    pub fn number(self) -> u8 {
        match self {
            Self::FirstSingular => 1,
            Self::SecondSingular => 2,
            Self::ThirdSingular => 3,
            Self::FirstPlural => 4,
            Self::SecondPlural => 5,
            Self::ThirdPlural => 6,
        }
    }
}

impl TryFrom<u8> for Person {
    type Error = LexiconError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::FirstSingular),
            2 => Ok(Self::SecondSingular),
            3 => Ok(Self::ThirdSingular),
            4 => Ok(Self::FirstPlural),
            5 => Ok(Self::SecondPlural),
            6 => Ok(Self::ThirdPlural),
            other => Err(LexiconError::InvalidPerson(other)),
        }
    }
}

/// The six German tenses, numbered as authors know them:
/// 1 Present, 2 Imperfect, 3 Perfect, 4 Pluperfect, 5 Future I, 6 Future II.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tense {
    #[default]
    Present,
    Imperfect,
    Perfect,
    Pluperfect,
    Future1,
    Future2,
}

impl Tense {
    pub const ALL: [Tense; 6] = [
        Tense::Present,
        Tense::Imperfect,
        Tense::Perfect,
        Tense::Pluperfect,
        Tense::Future1,
        Tense::Future2,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::Present => 1,
            Self::Imperfect => 2,
            Self::Perfect => 3,
            Self::Pluperfect => 4,
            Self::Future1 => 5,
            Self::Future2 => 6,
        }
    }

    pub fn is_future(self) -> bool {
        matches!(self, Self::Future1 | Self::Future2)
    }
}

impl TryFrom<u8> for Tense {
    type Error = LexiconError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Present),
            2 => Ok(Self::Imperfect),
            3 => Ok(Self::Perfect),
            4 => Ok(Self::Pluperfect),
            5 => Ok(Self::Future1),
            6 => Ok(Self::Future2),
            other => Err(LexiconError::InvalidTense(other)),
        }
    }
}
