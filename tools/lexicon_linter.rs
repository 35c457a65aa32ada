/// Lexicon Linter: reports gaps in German lexicon files.
///
/// Usage: lexicon_linter <lexicon_dir_or_file>

use narrative_flexion::schema::grammar::{Person, Tense};
use narrative_flexion::schema::lexicon::Lexicon;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: lexicon_linter <lexicon_dir_or_file>");
        process::exit(0);
    }

    let lexicon_path = Path::new(&args[1]);
    let mut lexicon = Lexicon::default();
    let mut load_errors = 0;

    if lexicon_path.is_file() {
        match Lexicon::load_from_ron(lexicon_path) {
            Ok(loaded) => lexicon.merge(loaded),
            Err(e) => {
                eprintln!("ERROR: Failed to load lexicon file: {}", e);
                process::exit(1);
            }
        }
    } else if lexicon_path.is_dir() {
        load_errors = load_lexicons_recursive(lexicon_path, &mut lexicon);
    } else {
        eprintln!("ERROR: Path '{}' does not exist", args[1]);
        process::exit(1);
    }

    println!(
        "Loaded {} nouns, {} verbs, {} infinitives",
        lexicon.nouns.len(),
        lexicon.verbs.len(),
        lexicon.infinitives.len()
    );

    let (errors, warnings) = lint_lexicon(&lexicon);

    println!("\n=== Lexicon Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings, {} files failed to load",
        errors.len(),
        warnings.len(),
        load_errors
    );

    if errors.is_empty() && load_errors == 0 {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn load_lexicons_recursive(dir: &Path, lexicon: &mut Lexicon) -> usize {
    let mut failures = 0;
    let mut paths: Vec<_> = match std::fs::read_dir(dir) {
        Ok(entries) => entries.flatten().map(|entry| entry.path()).collect(),
        Err(e) => {
            eprintln!("  ERROR reading {}: {}", dir.display(), e);
            return 1;
        }
    };
    paths.sort();

    for path in paths {
        if path.is_dir() {
            failures += load_lexicons_recursive(&path, lexicon);
        } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            match Lexicon::load_from_ron(&path) {
                Ok(loaded) => {
                    println!("  Loaded: {}", path.display());
                    lexicon.merge(loaded);
                }
                Err(e) => {
                    eprintln!("  ERROR loading {}: {}", path.display(), e);
                    failures += 1;
                }
            }
        }
    }
    failures
}

fn lint_lexicon(lexicon: &Lexicon) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let mut nouns: Vec<_> = lexicon.nouns.values().collect();
    nouns.sort_by(|a, b| a.lemma.cmp(&b.lemma));
    for noun in nouns {
        if noun.forms.nominative.trim().is_empty() {
            errors.push(format!("Noun '{}' has an empty nominative", noun.lemma));
        }
        // Missing cases fall back to the nominative, which is only
        // right for nouns that do not inflect there.
        let missing = noun.forms.missing();
        if !missing.is_empty() {
            let names: Vec<String> = missing.iter().map(|case| case.to_string()).collect();
            warnings.push(format!(
                "Noun '{}' falls back to the nominative for: {}",
                noun.lemma,
                names.join(", ")
            ));
        }
    }

    let mut verbs: Vec<_> = lexicon.verbs.values().collect();
    verbs.sort_by(|a, b| a.lemma.cmp(&b.lemma));
    for verb in verbs {
        if verb.particle.as_deref().is_some_and(|p| p.trim().is_empty()) {
            errors.push(format!(
                "Verb '{}' declares an empty separable particle",
                verb.lemma
            ));
        }
        for tense in [Tense::Present, Tense::Imperfect] {
            let missing: Vec<String> = Person::ALL
                .iter()
                .filter(|person| verb.form(**person, tense).is_none())
                .map(|person| person.number().to_string())
                .collect();
            if !missing.is_empty() {
                warnings.push(format!(
                    "Verb '{}' has no {:?} form for person(s) {}",
                    verb.lemma,
                    tense,
                    missing.join(", ")
                ));
            }
        }
    }

    (errors, warnings)
}
