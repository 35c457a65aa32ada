/// Rendering context: the case, list case and list article in effect
/// for one rendering pass.
///
/// Setters take effect immediately and stay in effect until changed again.
/// The clause axis (`case`) and the list axes (`list_case`, `list_article`)
/// are disjoint: no setter on one touches the other.

use crate::schema::grammar::{Case, ListArticle};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderingContext {
    case: Case,
    list_case: Case,
    list_article: ListArticle,
    last_object: Option<String>,
}

impl RenderingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn case(&self) -> Case {
        self.case
    }

    pub fn list_case(&self) -> Case {
        self.list_case
    }

    pub fn list_article(&self) -> ListArticle {
        self.list_article
    }

    pub fn set_case(&mut self, case: Case) {
        self.case = case;
    }

    pub fn set_case_nominative(&mut self) {
        self.set_case(Case::Nominative);
    }

    pub fn set_case_genitive(&mut self) {
        self.set_case(Case::Genitive);
    }

    pub fn set_case_dative(&mut self) {
        self.set_case(Case::Dative);
    }

    pub fn set_case_accusative(&mut self) {
        self.set_case(Case::Accusative);
    }

    pub fn set_list_case(&mut self, case: Case) {
        self.list_case = case;
    }

    pub fn set_list_case_nominative(&mut self) {
        self.set_list_case(Case::Nominative);
    }

    pub fn set_list_case_genitive(&mut self) {
        self.set_list_case(Case::Genitive);
    }

    pub fn set_list_case_dative(&mut self) {
        self.set_list_case(Case::Dative);
    }

    pub fn set_list_case_accusative(&mut self) {
        self.set_list_case(Case::Accusative);
    }

    pub fn set_list_article(&mut self, article: ListArticle) {
        self.list_article = article;
    }

    pub fn set_list_article_definite(&mut self) {
        self.set_list_article(ListArticle::Definite);
    }

    pub fn set_list_article_indefinite(&mut self) {
        self.set_list_article(ListArticle::Indefinite);
    }

    /// Record the lemma most recently rendered, for later pronoun reference.
    pub fn remember_object(&mut self, lemma: &str) {
        self.last_object = Some(lemma.to_string());
    }

    pub fn last_object(&self) -> Option<&str> {
        self.last_object.as_deref()
    }

    /// Back to nominative, definite, nothing remembered.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
