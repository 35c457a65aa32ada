/// Preview: interactive shell for trying lexicon entries in context.
///
/// Usage: preview --lexicon <path> [--config <path>]
///
/// Commands:
///   case <nom|gen|dat|akk>       : set the clause case
///   listcase <nom|gen|dat|akk>   : set the list case
///   article <def|indef>          : set the list article
///   tense <1-6>                  : set the narrator's tense
///   past <on|off>                : set the global past/present flag
///   tsel <present> <past>        : pick by the past/present flag and by tense
///   quote <present> <past>       : pick inside a past override
///   actor <1|2|3> [pl] [formal]  : set who the verb is conjugated for
///   the <lemma> / a <lemma>      : render a noun with an article
///   list <lemma,lemma,...>       : render a list
///   verb <lemma>                 : conjugate through the verb helper
///   reverse                      : invert the next verb clause
///   new                          : start a new sentence
///   help                         : list commands
///   quit                         : exit

use narrative_flexion::core::pipeline::{NarrationError, Narrator, Sentence, SentenceState};
use narrative_flexion::schema::entity::{Actor, EntityId, PlayerCharacter, Referral};
use narrative_flexion::schema::grammar::{Case, Tense};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut lexicon_path = None;
    let mut config_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--lexicon" if i + 1 < args.len() => {
                i += 1;
                lexicon_path = Some(args[i].clone());
            }
            "--config" if i + 1 < args.len() => {
                i += 1;
                config_path = Some(args[i].clone());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let narrator_pc = PlayerCharacter::new(Actor::new(EntityId(1), "Erzähler"));
    let mut builder = Narrator::builder()
        .character(narrator_pc)
        .player_character(EntityId(1));
    if let Some(ref path) = lexicon_path {
        builder = if std::path::Path::new(path).is_dir() {
            builder.lexicon_dir(path)
        } else {
            builder.lexicon_file(path)
        };
    }
    if let Some(ref path) = config_path {
        builder = builder.config_file(path);
    }

    let mut narrator = match builder.build() {
        Ok(narrator) => narrator,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Loaded {} nouns, {} verbs",
        narrator.lexicon().nouns.len(),
        narrator.lexicon().verbs.len()
    );
    println!("Type 'help' for commands.\n");

    // Carried between commands; `new` starts the next sentence
    let mut state = SentenceState::default();
    let mut actor = Actor::new(EntityId(2), "Anna");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Tschüss.");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
            }
            "case" | "listcase" => {
                let case = match parts.get(1).and_then(|s| parse_case(s)) {
                    Some(case) => case,
                    None => {
                        println!("Usage: {} <nom|gen|dat|akk>", cmd);
                        continue;
                    }
                };
                if cmd == "case" {
                    state.context.set_case(case);
                } else {
                    state.context.set_list_case(case);
                }
                println!("{} set to {}", cmd, case);
            }
            "article" => match parts.get(1).copied() {
                Some("def") => state.context.set_list_article_definite(),
                Some("indef") => state.context.set_list_article_indefinite(),
                _ => println!("Usage: article <def|indef>"),
            },
            "tense" => {
                let tense = parts
                    .get(1)
                    .and_then(|s| s.parse::<u8>().ok())
                    .and_then(|n| Tense::try_from(n).ok());
                match tense {
                    Some(tense) => match narrator.set_tense(tense) {
                        Ok(()) => println!("Tense set to {:?}", tense),
                        Err(e) => println!("ERROR: {}", e),
                    },
                    None => println!("Usage: tense <1-6>"),
                }
            }
            "past" => match parts.get(1).copied() {
                Some("on") => narrator.set_past_tense(true),
                Some("off") => narrator.set_past_tense(false),
                _ => println!(
                    "Usage: past <on|off> (currently {})",
                    if narrator.config().use_past_tense { "on" } else { "off" }
                ),
            },
            "actor" => {
                let referral = match parts.get(1).copied() {
                    Some("1") => Referral::First,
                    Some("2") => Referral::Second,
                    Some("3") => Referral::Third,
                    _ => {
                        println!("Usage: actor <1|2|3> [pl] [formal]");
                        continue;
                    }
                };
                actor.referral = referral;
                actor.plural = parts.contains(&"pl");
                actor.formal = parts.contains(&"formal");
                println!("Actor is now person {}", actor.person().number());
            }
            "tsel" | "quote" => {
                let (Some(present), Some(past)) = (parts.get(1).copied(), parts.get(2).copied()) else {
                    println!("Usage: {} <present> <past>", cmd);
                    continue;
                };
                let picked = in_sentence(&narrator, &mut state, |sentence| {
                    let by_flag = if cmd == "quote" {
                        sentence.with_past(|s| s.select_by_past_present(present, past))
                    } else {
                        sentence.select_by_past_present(present, past)
                    };
                    let by_tense = sentence.time_select(present, past)?;
                    Ok((by_flag, by_tense))
                });
                match picked {
                    Ok((by_flag, by_tense)) => {
                        println!("flag: {}  tense: {}", by_flag, by_tense)
                    }
                    Err(e) => println!("ERROR: {}", e),
                }
            }
            "the" | "a" => {
                let Some(lemma) = parts.get(1).copied() else {
                    println!("Usage: {} <lemma>", cmd);
                    continue;
                };
                let rendered = in_sentence(&narrator, &mut state, |sentence| {
                    if cmd == "the" {
                        sentence.the_name(lemma)
                    } else {
                        sentence.a_name(lemma)
                    }
                });
                print_rendered(rendered);
            }
            "list" => {
                let lemmas: Vec<&str> = parts
                    .get(1)
                    .map(|s| s.split(',').filter(|l| !l.is_empty()).collect())
                    .unwrap_or_default();
                let rendered = in_sentence(&narrator, &mut state, |sentence| sentence.list(&lemmas));
                print_rendered(rendered);
            }
            "verb" => {
                let Some(lemma) = parts.get(1).copied() else {
                    println!("Usage: verb <lemma>");
                    continue;
                };
                let rendered = in_sentence(&narrator, &mut state, |sentence| {
                    let text = sentence.verb(lemma, &actor)?;
                    Ok(format!("'{}' (participle: '{}')", text, sentence.participle()))
                });
                print_rendered(rendered);
            }
            "reverse" => {
                state.verbs.reverse_next();
                println!("Next verb clause will be inverted.");
            }
            "new" => {
                state = SentenceState::default();
                println!("New sentence.");
            }
            _ => {
                println!("Unknown command: '{}'. Type 'help' for available commands.", cmd);
            }
        }
    }
}

/// Reopen the suspended sentence for one command.
fn in_sentence<R>(
    narrator: &Narrator,
    state: &mut SentenceState,
    render: impl FnOnce(&mut Sentence<'_>) -> Result<R, NarrationError>,
) -> Result<R, NarrationError> {
    let mut sentence = narrator.resume_sentence(std::mem::take(state));
    let result = render(&mut sentence);
    *state = sentence.suspend();
    result
}

fn print_rendered(rendered: Result<String, NarrationError>) {
    match rendered {
        Ok(text) => println!("{}", text),
        Err(e) => println!("ERROR: {}", e),
    }
}

fn print_usage() {
    println!("Preview: interactive shell for trying lexicon entries in context.");
    println!();
    println!("Usage: preview --lexicon <path> [--config <path>]");
    println!();
    println!("  --lexicon <path>  Path to lexicon file or directory");
    println!("  --config <path>   Path to narration config (optional)");
}

fn print_help() {
    println!("Commands:");
    println!("  case <nom|gen|dat|akk>       Set the clause case");
    println!("  listcase <nom|gen|dat|akk>   Set the list case");
    println!("  article <def|indef>          Set the list article");
    println!("  tense <1-6>                  Set the narrator's tense");
    println!("  past <on|off>                Set the global past/present flag");
    println!("  tsel <present> <past>        Pick by the flag and by the tense");
    println!("  quote <present> <past>       Pick inside a past override");
    println!("  actor <1|2|3> [pl] [formal]  Set who verbs are conjugated for");
    println!("  the <lemma> / a <lemma>      Render a noun with an article");
    println!("  list <lemma,lemma,...>       Render a list");
    println!("  verb <lemma>                 Conjugate through the verb helper");
    println!("  reverse                      Invert the next verb clause");
    println!("  new                          Start a new sentence");
    println!("  help                         Show this help");
    println!("  quit                         Exit");
    println!();
    println!("Tenses: 1 present, 2 imperfect, 3 perfect, 4 pluperfect, 5 future I, 6 future II");
}

fn parse_case(s: &str) -> Option<Case> {
    match s.to_lowercase().as_str() {
        "nom" | "nominative" => Some(Case::Nominative),
        "gen" | "genitive" => Some(Case::Genitive),
        "dat" | "dative" => Some(Case::Dative),
        "akk" | "acc" | "accusative" => Some(Case::Accusative),
        _ => None,
    }
}
