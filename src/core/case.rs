/// Case resolution for single referenced items.
///
/// Form selection is a table lookup with a nominative fallback. Articles
/// are a closed class, so their tables live here rather than in content.

use crate::schema::grammar::{Case, Gender, ListArticle};
use crate::schema::lexicon::{CaseForms, Noun};

/// Rows: masculine, feminine, neuter, plural. Columns follow `Case::index`.
const DEFINITE: [[&str; 4]; 4] = [
    ["der", "des", "dem", "den"],
    ["die", "der", "der", "die"],
    ["das", "des", "dem", "das"],
    ["die", "der", "den", "die"],
];

const INDEFINITE: [[&str; 4]; 3] = [
    ["ein", "eines", "einem", "einen"],
    ["eine", "einer", "einer", "eine"],
    ["ein", "eines", "einem", "ein"],
];

/// The form registered for `case`, or the nominative when the author
/// left that case out.
pub fn resolve_case(forms: &CaseForms, case: Case) -> &str {
    match forms.get(case) {
        Some(form) => form,
        None => {
            tracing::trace!(nominative = %forms.nominative, %case, "case form missing, using nominative");
            &forms.nominative
        }
    }
}

fn gender_row(gender: Gender) -> usize {
    match gender {
        Gender::Masculine => 0,
        Gender::Feminine => 1,
        Gender::Neuter => 2,
    }
}

pub fn definite_article(gender: Gender, plural: bool, case: Case) -> &'static str {
    let row = if plural { 3 } else { gender_row(gender) };
    DEFINITE[row][case.index()]
}

/// Plurals take no indefinite article.
pub fn indefinite_article(gender: Gender, plural: bool, case: Case) -> Option<&'static str> {
    if plural {
        None
    } else {
        Some(INDEFINITE[gender_row(gender)][case.index()])
    }
}

/// Noun in `case` preceded by the article `article` calls for.
pub fn render_noun(noun: &Noun, case: Case, article: ListArticle) -> String {
    let form = resolve_case(&noun.forms, case);
    let article = match article {
        ListArticle::Definite => Some(definite_article(noun.gender, noun.plural, case)),
        ListArticle::Indefinite => indefinite_article(noun.gender, noun.plural, case),
    };
    match article {
        Some(article) => format!("{} {}", article, form),
        None => form.to_string(),
    }
}

/// "der Schlüssel", "dem Schlüssel", ...
pub fn the_name(noun: &Noun, case: Case) -> String {
    render_noun(noun, case, ListArticle::Definite)
}

/// "ein Schlüssel", "einem Schlüssel", ...
pub fn a_name(noun: &Noun, case: Case) -> String {
    render_noun(noun, case, ListArticle::Indefinite)
}
