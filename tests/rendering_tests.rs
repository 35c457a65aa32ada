//! End-to-end rendering tests: lexicon files in, German text out.

use narrative_flexion::core::pipeline::{NarrationError, Narrator};
use narrative_flexion::core::verb::VerbState;
use narrative_flexion::schema::entity::{Actor, EntityId, PlayerCharacter, Referral};
use narrative_flexion::schema::grammar::{Case, Tense};
use narrative_flexion::schema::lexicon::LexiconError;

fn anna() -> Actor {
    Actor::new(EntityId(1), "Anna")
}

fn build_narrator() -> Narrator {
    Narrator::builder()
        .lexicon_dir("lexicon_data/de")
        .character(PlayerCharacter::new(anna()))
        .player_character(EntityId(1))
        .build()
        .unwrap()
}

#[test]
fn coordinated_separable_verb() {
    let narrator = build_narrator();
    let anna = anna();
    let mut sentence = narrator.sentence();

    let finite = sentence.verb("aufstehen", &anna).unwrap();
    let text = format!("Anna {} {}", finite, sentence.participle());
    assert_eq!(text, "Anna steht auf");

    // the assembler marks the coordination boundary
    sentence.reverse_next();
    let second = sentence.conjugate_verb("hinaus", "steht");
    assert_eq!(second, " hinaus steht");
    assert_eq!(sentence.participle(), "steht");
    assert_eq!(sentence.verbs().last_verb(), Some("steht"));
}

#[test]
fn reversed_clause_through_lexicon_verb() {
    let narrator = build_narrator();
    let anna = anna();
    let mut sentence = narrator.sentence();

    assert_eq!(sentence.verb("aufstehen", &anna).unwrap(), "steht");
    assert_eq!(sentence.participle(), "auf");

    sentence.reverse_next();
    assert_eq!(sentence.verb("aufmachen", &anna).unwrap(), " auf macht");
    assert_eq!(sentence.participle(), "macht");
    assert_eq!(sentence.verbs().state(), VerbState::Fresh);
}

#[test]
fn quoted_override_inside_open_sentence() {
    let narrator = build_narrator();
    let anna = anna();
    let mut sentence = narrator.sentence();

    let opening = sentence.verb("aufstehen", &anna).unwrap();
    assert_eq!(opening, "steht");

    // quoted speech in the past, mid-sentence
    let quoted = sentence.with_past(|s| s.select_by_past_present("ist offen", "war offen"));
    assert_eq!(quoted, "war offen");
    assert_eq!(sentence.select_by_past_present("ist offen", "war offen"), "ist offen");
    assert!(!narrator.config().use_past_tense);

    // coordination state survived the override
    assert_eq!(sentence.verbs().last_verb(), Some("steht"));
    sentence.reverse_next();
    assert_eq!(sentence.verb("aufstehen", &anna).unwrap(), " auf steht");
    assert_eq!(sentence.context().case(), Case::Nominative);
}

#[test]
fn repeated_finite_verb_is_dropped_in_second_clause() {
    let narrator = build_narrator();
    let anna = anna();
    let mut sentence = narrator.sentence();

    assert_eq!(sentence.verb("aufmachen", &anna).unwrap(), "macht");
    assert_eq!(sentence.verb("aufmachen", &anna).unwrap(), "");
    assert_eq!(sentence.verbs().last_verb(), None);
    assert_eq!(sentence.verb("gehen", &anna).unwrap(), "geht");
}

#[test]
fn list_in_dative_clause() {
    let narrator = build_narrator();
    let mut sentence = narrator.sentence();
    sentence.context_mut().set_case_nominative();
    sentence.context_mut().set_list_case_dative();

    let list = sentence.list(&["schluessel", "lampe", "buecher"]).unwrap();
    assert_eq!(
        format!("Anna spielt mit {}.", list),
        "Anna spielt mit dem Schlüssel, der Lampe und den Büchern."
    );
    assert_eq!(sentence.the_name("junge").unwrap(), "der Junge");
    assert_eq!(sentence.context().last_object(), Some("junge"));
}

#[test]
fn indefinite_accusative_list() {
    let narrator = build_narrator();
    let mut sentence = narrator.sentence();
    sentence.context_mut().set_list_case_accusative();
    sentence.context_mut().set_list_article_indefinite();

    assert_eq!(
        sentence.list(&["schluessel", "seil", "buecher"]).unwrap(),
        "einen Schlüssel, ein Seil und Bücher"
    );
}

#[test]
fn formal_address_conjugates_as_sie() {
    let narrator = build_narrator();
    let guest = Actor {
        referral: Referral::Second,
        formal: true,
        ..Actor::new(EntityId(2), "Frau Berger")
    };
    let mut sentence = narrator.sentence();
    assert_eq!(sentence.verb("gehen", &guest).unwrap(), "gehen");
}

#[test]
fn past_narration_per_character() {
    let mut narrator = build_narrator();
    narrator.set_tense(Tense::Imperfect).unwrap();
    let anna = anna();
    let mut sentence = narrator.sentence();
    assert_eq!(sentence.verb("gehen", &anna).unwrap(), "ging");
    assert_eq!(
        narrator.select_by_tense("geht", "ging", "ist gegangen", "war gegangen", "wird gehen").unwrap(),
        "ging"
    );
}

#[test]
fn missing_form_surfaces_as_content_error() {
    let mut narrator = build_narrator();
    narrator.set_tense(Tense::Perfect).unwrap();
    let mut sentence = narrator.sentence();
    let err = sentence.verb("aufstehen", &anna()).unwrap_err();
    assert!(matches!(
        err,
        NarrationError::Lexicon(LexiconError::MissingForm { .. })
    ));
    assert!(err.to_string().contains("aufstehen"));
}

#[test]
fn quoted_text_in_other_tense() {
    let mut narrator = Narrator::builder()
        .lexicon_dir("lexicon_data/de")
        .config_file("tests/fixtures/test_config.ron")
        .character(PlayerCharacter::new(anna()))
        .player_character(EntityId(1))
        .build()
        .unwrap();
    assert!(narrator.config().use_past_tense);

    let quoted = narrator.with_present(|n| n.select_by_past_present("ist offen", "war offen"));
    assert_eq!(quoted, "ist offen");
    assert_eq!(narrator.select_by_past_present("ist offen", "war offen"), "war offen");

    let mut sentence = narrator.sentence();
    sentence.context_mut().set_list_case_nominative();
    assert_eq!(
        sentence.list(&["lampe", "seil"]).unwrap(),
        "die Lampe sowie das Seil"
    );
}

#[test]
fn verb_phrase_from_typed_word() {
    let narrator = build_narrator();
    let mut sentence = narrator.sentence();
    sentence.context_mut().set_case_accusative();
    let object = sentence.the_name("schluessel").unwrap();
    assert_eq!(
        narrator.verb_phrase(Some("nimm"), "nehmen", &object),
        "nehmen den Schlüssel"
    );
}
