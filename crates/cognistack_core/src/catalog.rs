//! crates/cognistack_core/src/catalog.rs
//!
//! View state for the blog listing: free-text search plus a category selection.

use crate::domain::{Category, Post};

pub const ALL_CATEGORIES: &str = "All";

/// Which category the listing is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(Category),
    /// A label outside the closed set. Accepted, but matches no post.
    Unknown(String),
}

impl CategorySelection {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            return CategorySelection::All;
        }
        match Category::from_label(label) {
            Some(category) => CategorySelection::Only(category),
            None => CategorySelection::Unknown(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Only(category) => category.label(),
            CategorySelection::Unknown(label) => label,
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(selected) => *selected == category,
            CategorySelection::Unknown(_) => false,
        }
    }

    /// "All" followed by every category, in the order the listing shows them.
    pub fn choices() -> Vec<CategorySelection> {
        std::iter::once(CategorySelection::All)
            .chain(Category::ALL.into_iter().map(CategorySelection::Only))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    SetSearchText(String),
    SetCategory(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogFilter {
    search_text: String,
    selection: CategorySelection,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_category(&mut self, category: &str) {
        self.selection = CategorySelection::from_label(category);
    }

    /// Pure reducer form of the two setters.
    pub fn reduce(mut self, action: CatalogAction) -> Self {
        match action {
            CatalogAction::SetSearchText(text) => self.set_search_text(text),
            CatalogAction::SetCategory(category) => self.set_category(&category),
        }
        self
    }

    pub fn matches(&self, post: &Post) -> bool {
        let needle = self.search_text.to_lowercase();
        let matches_search = [&post.title, &post.excerpt, &post.author.name]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));

        matches_search && self.selection.matches(post.category)
    }

    /// The posts that pass the filter, in their original order. An empty result is
    /// a normal state for the view to explain.
    pub fn visible_posts<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        posts.iter().filter(|post| self.matches(post)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_posts;

    fn titles(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn defaults_show_everything() {
        let posts = sample_posts();
        let filter = CatalogFilter::new();
        assert_eq!(filter.selection(), &CategorySelection::All);
        assert_eq!(filter.visible_posts(&posts).len(), posts.len());
    }

    #[test]
    fn relationships_category_yields_single_post() {
        let posts = sample_posts();
        let mut filter = CatalogFilter::new();
        filter.set_category("Relationships");
        assert_eq!(
            titles(&filter.visible_posts(&posts)),
            vec!["Building Better Relationships Through Type Compatibility"]
        );
    }

    #[test]
    fn search_is_case_insensitive_over_title_excerpt_and_author() {
        let posts = sample_posts();
        let mut filter = CatalogFilter::new();
        filter.set_search_text("ti");

        let visible = filter.visible_posts(&posts);
        assert!(visible
            .iter()
            .any(|p| p.title == "Introverted vs Extraverted Thinking"));

        let expected: Vec<_> = posts
            .iter()
            .filter(|p| {
                [&p.title, &p.excerpt, &p.author.name]
                    .iter()
                    .any(|f| f.to_lowercase().contains("ti"))
            })
            .map(|p| p.id)
            .collect();
        assert_eq!(visible.iter().map(|p| p.id).collect::<Vec<_>>(), expected);

        filter.set_search_text("SARAH");
        assert_eq!(filter.visible_posts(&posts).len(), 1);
    }

    #[test]
    fn search_and_category_combine() {
        let posts = sample_posts();
        let filter = CatalogFilter::new()
            .reduce(CatalogAction::SetCategory("Cognitive Functions".into()))
            .reduce(CatalogAction::SetSearchText("thinking".into()));
        assert_eq!(
            titles(&filter.visible_posts(&posts)),
            vec!["Introverted vs Extraverted Thinking"]
        );
    }

    #[test]
    fn visible_posts_keep_list_order() {
        let posts = sample_posts();
        let mut filter = CatalogFilter::new();
        filter.set_category("Cognitive Functions");
        let ids: Vec<_> = filter.visible_posts(&posts).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let posts = sample_posts();
        let mut filter = CatalogFilter::new();
        filter.set_search_text("jung");
        filter.set_category("All");
        let first = filter.visible_posts(&posts);
        filter.set_search_text("jung");
        filter.set_category("All");
        assert_eq!(first, filter.visible_posts(&posts));
    }

    #[test]
    fn no_match_is_an_empty_view_not_an_error() {
        let posts = sample_posts();
        let mut filter = CatalogFilter::new();
        filter.set_search_text("astrology");
        assert!(filter.visible_posts(&posts).is_empty());
    }

    #[test]
    fn unknown_category_is_accepted_and_matches_nothing() {
        let posts = sample_posts();
        let mut filter = CatalogFilter::new();
        filter.set_category("Astrology");
        assert_eq!(filter.selection().label(), "Astrology");
        assert!(filter.visible_posts(&posts).is_empty());

        filter.set_category(ALL_CATEGORIES);
        assert_eq!(filter.visible_posts(&posts).len(), posts.len());
    }

    #[test]
    fn choices_start_with_all() {
        let choices = CategorySelection::choices();
        assert_eq!(choices.len(), 6);
        assert_eq!(choices[0], CategorySelection::All);
    }
}
