/// List rendering: every item takes the list case and the list article,
/// never the clause case.

use crate::core::case::{render_noun, resolve_case};
use crate::core::config::NarrationConfig;
use crate::core::context::RenderingContext;
use crate::schema::lexicon::{CaseForms, Noun};

/// Like `resolve_case`, but keyed on the context's list case.
pub fn resolve_list_case<'a>(forms: &'a CaseForms, ctx: &RenderingContext) -> &'a str {
    resolve_case(forms, ctx.list_case())
}

/// One list item with the list article in the list case.
pub fn render_list_item(noun: &Noun, ctx: &RenderingContext) -> String {
    render_noun(noun, ctx.list_case(), ctx.list_article())
}

/// "der Schlüssel", "der Schlüssel und die Lampe",
/// "der Schlüssel, die Lampe und das Seil".
pub fn render_list(items: &[&Noun], ctx: &RenderingContext, config: &NarrationConfig) -> String {
    let rendered: Vec<String> = items
        .iter()
        .map(|noun| render_list_item(noun, ctx))
        .collect();

    match rendered.split_last() {
        None => config.empty_list.clone(),
        Some((last, [])) => last.clone(),
        Some((last, init)) => {
            format!("{} {} {}", init.join(", "), config.list_conjunction, last)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::grammar::{Case, Gender};

    fn key() -> Noun {
        Noun::new(
            "schluessel",
            Gender::Masculine,
            CaseForms::new("Schlüssel").with(Case::Genitive, "Schlüssels"),
        )
    }

    fn lamp() -> Noun {
        Noun::new("lampe", Gender::Feminine, CaseForms::new("Lampe"))
    }

    fn rope() -> Noun {
        Noun::new(
            "seil",
            Gender::Neuter,
            CaseForms::new("Seil").with(Case::Genitive, "Seils"),
        )
    }

    #[test]
    fn list_case_drives_form_lookup() {
        let mut ctx = RenderingContext::new();
        ctx.set_case_accusative();
        ctx.set_list_case_genitive();
        assert_eq!(resolve_list_case(&key().forms, &ctx), "Schlüssels");
    }

    #[test]
    fn dative_list_in_nominative_clause() {
        let mut ctx = RenderingContext::new();
        ctx.set_list_case_dative();
        let config = NarrationConfig::default();
        let (key, lamp) = (key(), lamp());
        assert_eq!(
            render_list(&[&key, &lamp], &ctx, &config),
            "dem Schlüssel und der Lampe"
        );
        assert_eq!(ctx.case(), Case::Nominative);
    }

    #[test]
    fn indefinite_list_of_three() {
        let mut ctx = RenderingContext::new();
        ctx.set_list_case_accusative();
        ctx.set_list_article_indefinite();
        let config = NarrationConfig::default();
        let (key, lamp, rope) = (key(), lamp(), rope());
        assert_eq!(
            render_list(&[&key, &lamp, &rope], &ctx, &config),
            "einen Schlüssel, eine Lampe und ein Seil"
        );
    }

    #[test]
    fn single_and_empty_lists() {
        let ctx = RenderingContext::new();
        let config = NarrationConfig::default();
        let lamp = lamp();
        assert_eq!(render_list(&[&lamp], &ctx, &config), "die Lampe");
        assert_eq!(render_list(&[], &ctx, &config), "nichts");
    }

    #[test]
    fn configured_conjunction() {
        let ctx = RenderingContext::new();
        let config = NarrationConfig {
            list_conjunction: "oder".to_string(),
            ..NarrationConfig::default()
        };
        let (key, lamp) = (key(), lamp());
        assert_eq!(
            render_list(&[&key, &lamp], &ctx, &config),
            "der Schlüssel oder die Lampe"
        );
    }
}
