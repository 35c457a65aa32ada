/// Lexical forms supplied by content authors: nouns, verbs, infinitives.
///
/// The core never invents a form: every surface string comes from here.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use super::grammar::{Case, Gender, Person, Tense};

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("unknown noun: {0}")]
    UnknownNoun(String),
    #[error("unknown verb: {0}")]
    UnknownVerb(String),
    #[error("verb '{lemma}' has no {tense:?} form for person {}", .person.number())]
    MissingForm {
        lemma: String,
        person: Person,
        tense: Tense,
    },
    #[error("invalid person {0}: expected 1-6")]
    InvalidPerson(u8),
    #[error("invalid tense {0}: expected 1-6")]
    InvalidTense(u8),
}

/// Per-case surface forms of a noun. The nominative is mandatory; the
/// other cases may be omitted when they equal it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseForms {
    pub nominative: String,
    #[serde(default)]
    pub genitive: Option<String>,
    #[serde(default)]
    pub dative: Option<String>,
    #[serde(default)]
    pub accusative: Option<String>,
}

impl CaseForms {
    pub fn new(nominative: &str) -> Self {
        Self {
            nominative: nominative.to_string(),
            genitive: None,
            dative: None,
            accusative: None,
        }
    }

    /// Register the form for `case`, replacing any earlier one.
    pub fn with(mut self, case: Case, form: &str) -> Self {
        let form = form.to_string();
        match case {
            Case::Nominative => self.nominative = form,
            Case::Genitive => self.genitive = Some(form),
            Case::Dative => self.dative = Some(form),
            Case::Accusative => self.accusative = Some(form),
        }
        self
    }

    /// The form registered for `case`, if any. No fallback happens here.
    pub fn get(&self, case: Case) -> Option<&str> {
        match case {
            Case::Nominative => Some(self.nominative.as_str()),
            Case::Genitive => self.genitive.as_deref(),
            Case::Dative => self.dative.as_deref(),
            Case::Accusative => self.accusative.as_deref(),
        }
    }

    /// Cases for which no explicit form was registered.
    pub fn missing(&self) -> Vec<Case> {
        Case::ALL
            .into_iter()
            .filter(|case| self.get(*case).is_none())
            .collect()
    }
}

/// A noun entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Noun {
    pub lemma: String,
    pub gender: Gender,
    pub plural: bool,
    pub forms: CaseForms,
}

impl Noun {
    pub fn new(lemma: &str, gender: Gender, forms: CaseForms) -> Self {
        Self {
            lemma: lemma.to_string(),
            gender,
            plural: false,
            forms,
        }
    }

    pub fn plural(mut self) -> Self {
        self.plural = true;
        self
    }
}

/// A verb entry: an optional separable particle plus finite forms keyed
/// by person and tense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    pub lemma: String,
    pub particle: Option<String>,
    pub forms: FxHashMap<(Person, Tense), String>,
}

impl Verb {
    pub fn new(lemma: &str) -> Self {
        Self {
            lemma: lemma.to_string(),
            particle: None,
            forms: FxHashMap::default(),
        }
    }

    pub fn with_particle(mut self, particle: &str) -> Self {
        self.particle = Some(particle.to_string());
        self
    }

    pub fn with_form(mut self, person: Person, tense: Tense, form: &str) -> Self {
        self.forms.insert((person, tense), form.to_string());
        self
    }

    pub fn form(&self, person: Person, tense: Tense) -> Option<&str> {
        self.forms.get(&(person, tense)).map(String::as_str)
    }
}

/// Maps a verb word the player may type to the infinitive used when
/// echoing the command back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfinitiveTable {
    tab: FxHashMap<String, String>,
}

impl InfinitiveTable {
    pub fn add(&mut self, word: &str, infinitive: &str) {
        self.tab.insert(word.to_string(), infinitive.to_string());
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.tab.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tab.is_empty()
    }

    fn extend(&mut self, other: InfinitiveTable) {
        self.tab.extend(other.tab);
    }
}

/// All vocabulary available to the renderer.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub nouns: FxHashMap<String, Noun>,
    pub verbs: FxHashMap<String, Verb>,
    pub infinitives: InfinitiveTable,
}

// The RON shape is flatter than the public types.

#[derive(Debug, Deserialize)]
struct RonNoun {
    gender: Gender,
    #[serde(default)]
    plural: bool,
    nominative: String,
    #[serde(default)]
    genitive: Option<String>,
    #[serde(default)]
    dative: Option<String>,
    #[serde(default)]
    accusative: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RonVerbForm {
    person: Person,
    tense: Tense,
    form: String,
}

#[derive(Debug, Deserialize)]
struct RonVerb {
    #[serde(default)]
    particle: Option<String>,
    #[serde(default)]
    forms: Vec<RonVerbForm>,
}

#[derive(Debug, Deserialize)]
struct RonLexicon {
    #[serde(default)]
    nouns: HashMap<String, RonNoun>,
    #[serde(default)]
    verbs: HashMap<String, RonVerb>,
    #[serde(default)]
    infinitives: InfinitiveTable,
}

impl Lexicon {
    /// Load a lexicon from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Lexicon, LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        let lexicon = Self::parse_ron(&contents)?;
        tracing::debug!(
            path = %path.display(),
            nouns = lexicon.nouns.len(),
            verbs = lexicon.verbs.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Parse a lexicon from a RON string.
    pub fn parse_ron(input: &str) -> Result<Lexicon, LexiconError> {
        let raw: RonLexicon = ron::from_str(input)?;

        let mut nouns = FxHashMap::default();
        for (lemma, ron_noun) in raw.nouns {
            let forms = CaseForms {
                nominative: ron_noun.nominative,
                genitive: ron_noun.genitive,
                dative: ron_noun.dative,
                accusative: ron_noun.accusative,
            };
            nouns.insert(
                lemma.clone(),
                Noun {
                    lemma,
                    gender: ron_noun.gender,
                    plural: ron_noun.plural,
                    forms,
                },
            );
        }

        let mut verbs = FxHashMap::default();
        for (lemma, ron_verb) in raw.verbs {
            let mut verb = Verb::new(&lemma);
            verb.particle = ron_verb.particle;
            for entry in ron_verb.forms {
                verb.forms.insert((entry.person, entry.tense), entry.form);
            }
            verbs.insert(lemma, verb);
        }

        Ok(Lexicon {
            nouns,
            verbs,
            infinitives: raw.infinitives,
        })
    }

    /// Merge another lexicon into this one. Entries from `other` replace
    /// entries in `self` with the same lemma.
    pub fn merge(&mut self, other: Lexicon) {
        self.nouns.extend(other.nouns);
        self.verbs.extend(other.verbs);
        self.infinitives.extend(other.infinitives);
    }

    pub fn insert_noun(&mut self, noun: Noun) {
        self.nouns.insert(noun.lemma.clone(), noun);
    }

    pub fn insert_verb(&mut self, verb: Verb) {
        self.verbs.insert(verb.lemma.clone(), verb);
    }

    pub fn noun(&self, lemma: &str) -> Result<&Noun, LexiconError> {
        self.nouns
            .get(lemma)
            .ok_or_else(|| LexiconError::UnknownNoun(lemma.to_string()))
    }

    pub fn verb(&self, lemma: &str) -> Result<&Verb, LexiconError> {
        self.verbs
            .get(lemma)
            .ok_or_else(|| LexiconError::UnknownVerb(lemma.to_string()))
    }
}
