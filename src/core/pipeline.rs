/// The narrator: lexicon, configuration and player characters, plus
/// per-sentence rendering.
///
/// Each `Sentence` starts with a fresh `RenderingContext` and a fresh
/// `VerbHelper`, so case settings and verb suppression never leak from
/// one sentence into the next.

use rustc_hash::FxHashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::case::{a_name, resolve_case, the_name};
use crate::core::config::{ConfigError, NarrationConfig};
use crate::core::context::RenderingContext;
use crate::core::infinitive::verb_phrase;
use crate::core::list::render_list;
use crate::core::tense::{self, PastTenseFlag};
use crate::core::verb::{resolve_verb_form, VerbHelper};
use crate::schema::entity::{Actor, EntityId, PlayerCharacter};
use crate::schema::grammar::Tense;
use crate::schema::lexicon::{Lexicon, LexiconError, Noun};

#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("character not found: {0:?}")]
    CharacterNotFound(EntityId),
    #[error("no player character set")]
    NoPlayerCharacter,
}

/// Top-level renderer. Built via `Narrator::builder()`.
pub struct Narrator {
    lexicon: Lexicon,
    config: NarrationConfig,
    characters: FxHashMap<EntityId, PlayerCharacter>,
    player: Option<EntityId>,
}

/// Builder for constructing a `Narrator`.
pub struct NarratorBuilder {
    lexicon_dirs: Vec<String>,
    lexicon_files: Vec<String>,
    config_path: Option<String>,
    /// Directly provided lexicon (for testing without files).
    lexicon: Option<Lexicon>,
    /// Directly provided config (for testing without files).
    config: Option<NarrationConfig>,
    characters: Vec<PlayerCharacter>,
    player: Option<EntityId>,
}

impl Narrator {
    pub fn builder() -> NarratorBuilder {
        NarratorBuilder {
            lexicon_dirs: Vec::new(),
            lexicon_files: Vec::new(),
            config_path: None,
            lexicon: None,
            config: None,
            characters: Vec::new(),
            player: None,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &NarrationConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut NarrationConfig {
        &mut self.config
    }

    pub fn add_character(&mut self, character: PlayerCharacter) {
        self.characters.insert(character.id(), character);
    }

    pub fn character(&self, id: EntityId) -> Result<&PlayerCharacter, NarrationError> {
        self.characters
            .get(&id)
            .ok_or(NarrationError::CharacterNotFound(id))
    }

    pub fn character_mut(&mut self, id: EntityId) -> Result<&mut PlayerCharacter, NarrationError> {
        self.characters
            .get_mut(&id)
            .ok_or(NarrationError::CharacterNotFound(id))
    }

    /// Switch which character the story is told by.
    pub fn set_player_character(&mut self, id: EntityId) -> Result<(), NarrationError> {
        if !self.characters.contains_key(&id) {
            return Err(NarrationError::CharacterNotFound(id));
        }
        tracing::debug!(pc = id.0, "player character changed");
        self.player = Some(id);
        Ok(())
    }

    pub fn player_character(&self) -> Result<&PlayerCharacter, NarrationError> {
        let id = self.player.ok_or(NarrationError::NoPlayerCharacter)?;
        self.character(id)
    }

    /// Set the current player character's narrative tense.
    pub fn set_tense(&mut self, tense: Tense) -> Result<(), NarrationError> {
        let id = self.player.ok_or(NarrationError::NoPlayerCharacter)?;
        self.character_mut(id)?.set_tense(tense);
        Ok(())
    }

    /// Set the global past/present flag.
    pub fn set_past_tense(&mut self, past: bool) {
        self.config.set_past_tense(past);
    }

    pub fn select_by_tense<T>(
        &self,
        present: T,
        imperfect: T,
        perfect: T,
        pluperfect: T,
        future: T,
    ) -> Result<T, NarrationError> {
        let pc = self.player_character()?;
        Ok(tense::select_by_tense(
            pc, present, imperfect, perfect, pluperfect, future,
        ))
    }

    pub fn select_by_past_present<T>(&self, present: T, past: T) -> T {
        tense::select_by_past_present(&self.config, present, past)
    }

    pub fn time_select<T>(&self, present: T, past: T) -> Result<T, NarrationError> {
        Ok(tense::time_select(self.player_character()?, present, past))
    }

    /// Run `callback` narrating in the past; the flag is restored afterwards.
    pub fn with_past<R>(&mut self, callback: impl FnOnce(&mut Narrator) -> R) -> R {
        tense::with_past(self, callback)
    }

    /// Run `callback` narrating in the present; the flag is restored afterwards.
    pub fn with_present<R>(&mut self, callback: impl FnOnce(&mut Narrator) -> R) -> R {
        tense::with_present(self, callback)
    }

    pub fn verb_phrase(&self, typed: Option<&str>, default_infinitive: &str, fragment: &str) -> String {
        verb_phrase(&self.lexicon.infinitives, typed, default_infinitive, fragment)
    }

    /// Start rendering a new sentence.
    pub fn sentence(&self) -> Sentence<'_> {
        self.resume_sentence(SentenceState::default())
    }

    /// Continue a sentence suspended with `Sentence::suspend`. The past
    /// flag is taken afresh from the config.
    pub fn resume_sentence(&self, state: SentenceState) -> Sentence<'_> {
        Sentence {
            narrator: self,
            state,
            past: self.config.use_past_tense,
        }
    }
}

impl PastTenseFlag for Narrator {
    fn is_past(&self) -> bool {
        self.config.use_past_tense
    }

    fn set_past(&mut self, past: bool) {
        self.config.use_past_tense = past;
    }
}

/// Rendering state carried from one clause of a sentence to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceState {
    pub context: RenderingContext,
    pub verbs: VerbHelper,
}

/// One sentence in progress.
///
/// Holds its own copy of the past/present flag, seeded from the config
/// when the sentence opens, so quoted text can switch tense with
/// `with_past`/`with_present` without touching the narrator.
pub struct Sentence<'a> {
    narrator: &'a Narrator,
    state: SentenceState,
    past: bool,
}

impl<'a> Sentence<'a> {
    pub fn context(&self) -> &RenderingContext {
        &self.state.context
    }

    pub fn context_mut(&mut self) -> &mut RenderingContext {
        &mut self.state.context
    }

    pub fn verbs(&self) -> &VerbHelper {
        &self.state.verbs
    }

    /// Close the sentence, keeping its state for `Narrator::resume_sentence`.
    pub fn suspend(self) -> SentenceState {
        self.state
    }

    fn noun(&mut self, lemma: &str) -> Result<&'a Noun, NarrationError> {
        let narrator = self.narrator;
        let noun = narrator.lexicon.noun(lemma)?;
        self.state.context.remember_object(lemma);
        Ok(noun)
    }

    /// The noun's bare form in the current case.
    pub fn noun_form(&mut self, lemma: &str) -> Result<String, NarrationError> {
        let noun = self.noun(lemma)?;
        Ok(resolve_case(&noun.forms, self.state.context.case()).to_string())
    }

    pub fn the_name(&mut self, lemma: &str) -> Result<String, NarrationError> {
        let noun = self.noun(lemma)?;
        Ok(the_name(noun, self.state.context.case()))
    }

    pub fn a_name(&mut self, lemma: &str) -> Result<String, NarrationError> {
        let noun = self.noun(lemma)?;
        Ok(a_name(noun, self.state.context.case()))
    }

    /// Render a list in the list case with the list article.
    pub fn list(&mut self, lemmas: &[&str]) -> Result<String, NarrationError> {
        let narrator = self.narrator;
        let nouns = lemmas
            .iter()
            .map(|lemma| narrator.lexicon.noun(lemma))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(last) = lemmas.last() {
            self.state.context.remember_object(last);
        }
        Ok(render_list(&nouns, &self.state.context, &narrator.config))
    }

    /// Conjugate `lemma` for `actor` in the player character's tense and
    /// pass it through the coordination state machine.
    pub fn verb(&mut self, lemma: &str, actor: &Actor) -> Result<String, NarrationError> {
        let narrator = self.narrator;
        let verb = narrator.lexicon.verb(lemma)?;
        let tense = narrator.player_character()?.tense();
        let finite = resolve_verb_form(verb, actor.person(), tense)?;
        let particle = verb.particle.as_deref().unwrap_or("");
        Ok(self.state.verbs.conjugate_verb(particle, finite))
    }

    pub fn conjugate_verb(&mut self, participle: &str, finite_verb: &str) -> String {
        self.state.verbs.conjugate_verb(participle, finite_verb)
    }

    /// The next verb call renders in inverted order.
    pub fn reverse_next(&mut self) {
        self.state.verbs.reverse_next();
    }

    /// The participle recorded by the last verb call.
    pub fn participle(&self) -> &str {
        self.state.verbs.participle()
    }

    pub fn select_by_tense<T>(
        &self,
        present: T,
        imperfect: T,
        perfect: T,
        pluperfect: T,
        future: T,
    ) -> Result<T, NarrationError> {
        self.narrator
            .select_by_tense(present, imperfect, perfect, pluperfect, future)
    }

    /// Pick by this sentence's past/present flag.
    pub fn select_by_past_present<T>(&self, present: T, past: T) -> T {
        tense::select_by_past_present(self, present, past)
    }

    pub fn time_select<T>(&self, present: T, past: T) -> Result<T, NarrationError> {
        self.narrator.time_select(present, past)
    }

    /// Run `callback` narrating in the past; the flag is restored afterwards.
    pub fn with_past<R>(&mut self, callback: impl FnOnce(&mut Sentence<'a>) -> R) -> R {
        tense::with_past(self, callback)
    }

    /// Run `callback` in the present; the flag is restored afterwards.
    pub fn with_present<R>(&mut self, callback: impl FnOnce(&mut Sentence<'a>) -> R) -> R {
        tense::with_present(self, callback)
    }
}

impl PastTenseFlag for Sentence<'_> {
    fn is_past(&self) -> bool {
        self.past
    }

    fn set_past(&mut self, past: bool) {
        self.past = past;
    }
}

impl NarratorBuilder {
    /// Load every `.ron` lexicon in `path`. Missing directories are skipped.
    pub fn lexicon_dir(mut self, path: &str) -> Self {
        self.lexicon_dirs.push(path.to_string());
        self
    }

    pub fn lexicon_file(mut self, path: &str) -> Self {
        self.lexicon_files.push(path.to_string());
        self
    }

    pub fn config_file(mut self, path: &str) -> Self {
        self.config_path = Some(path.to_string());
        self
    }

    /// Provide a lexicon directly (for testing without files).
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Provide a config directly (for testing without files).
    pub fn with_config(mut self, config: NarrationConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn character(mut self, character: PlayerCharacter) -> Self {
        self.characters.push(character);
        self
    }

    pub fn player_character(mut self, id: EntityId) -> Self {
        self.player = Some(id);
        self
    }

    pub fn build(self) -> Result<Narrator, NarrationError> {
        let mut lexicon = self.lexicon.unwrap_or_default();

        // Directories first so explicitly named files override them
        for dir in &self.lexicon_dirs {
            if Path::new(dir).exists() {
                load_ron_files_from_dir(dir, |path| {
                    lexicon.merge(Lexicon::load_from_ron(path)?);
                    Ok(())
                })?;
            } else {
                tracing::debug!(dir = %dir, "lexicon directory missing, skipped");
            }
        }
        for file in &self.lexicon_files {
            lexicon.merge(Lexicon::load_from_ron(Path::new(file))?);
        }

        let config = match self.config_path {
            Some(ref path) => NarrationConfig::load_from_ron(Path::new(path))?,
            None => self.config.unwrap_or_default(),
        };

        let mut characters = FxHashMap::default();
        for character in self.characters {
            characters.insert(character.id(), character);
        }
        if let Some(id) = self.player {
            if !characters.contains_key(&id) {
                return Err(NarrationError::CharacterNotFound(id));
            }
        }

        Ok(Narrator {
            lexicon,
            config,
            characters,
            player: self.player,
        })
    }
}

/// Load all .ron files from a directory in name order, calling `loader`
/// for each.
fn load_ron_files_from_dir<F>(dir: &str, mut loader: F) -> Result<(), NarrationError>
where
    F: FnMut(&Path) -> Result<(), NarrationError>,
{
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            paths.push(path);
        }
    }
    paths.sort();
    for path in paths {
        loader(&path)?;
    }
    Ok(())
}
