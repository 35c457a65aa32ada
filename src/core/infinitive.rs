/// Verb phrases for echoing a command back to the player.

use crate::schema::lexicon::InfinitiveTable;

/// Build a verb phrase such as "nehmen den Schlüssel".
///
/// With no typed verb word the action's own infinitive is used; otherwise
/// the typed word is mapped through `table`, and kept as typed when the
/// table has no entry for it.
pub fn verb_phrase(
    table: &InfinitiveTable,
    typed: Option<&str>,
    default_infinitive: &str,
    fragment: &str,
) -> String {
    let infinitive = match typed {
        None => default_infinitive,
        Some(word) => table.get(&word.to_lowercase()).unwrap_or(word),
    };
    format!("{} {}", infinitive, fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> InfinitiveTable {
        let mut table = InfinitiveTable::default();
        table.add("nimm", "nehmen");
        table.add("hol", "holen");
        table
    }

    #[test]
    fn untyped_uses_default_infinitive() {
        assert_eq!(
            verb_phrase(&table(), None, "nehmen", "(was)"),
            "nehmen (was)"
        );
    }

    #[test]
    fn typed_word_maps_through_table() {
        assert_eq!(
            verb_phrase(&table(), Some("hol"), "nehmen", "(was)"),
            "holen (was)"
        );
        assert_eq!(
            verb_phrase(&table(), Some("Nimm"), "holen", "(was)"),
            "nehmen (was)"
        );
    }

    #[test]
    fn unknown_typed_word_kept() {
        assert_eq!(
            verb_phrase(&table(), Some("greif"), "nehmen", "(was)"),
            "greif (was)"
        );
    }
}
