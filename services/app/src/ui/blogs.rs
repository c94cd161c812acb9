//! services/app/src/ui/blogs.rs
//!
//! The blog listing page: owns the catalog filter and renders the visible posts.

use cognistack_core::{
    catalog::{CatalogAction, CatalogFilter, CategorySelection},
    domain::Post,
};
use tracing::debug;

pub struct BlogsPage {
    posts: Vec<Post>,
    filter: CatalogFilter,
}

impl BlogsPage {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            filter: CatalogFilter::new(),
        }
    }

    pub fn apply(&mut self, action: CatalogAction) {
        debug!(?action, "Catalog filter updated");
        self.filter = std::mem::take(&mut self.filter).reduce(action);
    }

    pub fn visible_posts(&self) -> Vec<&Post> {
        self.filter.visible_posts(&self.posts)
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            "Psychology Insights".to_string(),
            "Expert articles on cognitive functions, MBTI, Jungian psychology, and personal development"
                .to_string(),
            String::new(),
            format!("Search articles: \"{}\"", self.filter.search_text()),
            format!("Categories: {}", self.render_categories()),
            String::new(),
        ];

        let visible = self.visible_posts();
        if visible.is_empty() {
            lines.push("No articles found".to_string());
            lines.push("Try adjusting your search terms or category filter".to_string());
        } else {
            for post in visible {
                lines.extend(render_card(post));
                lines.push(String::new());
            }
            lines.pop();
        }
        lines.join("\n")
    }

    fn render_categories(&self) -> String {
        let selected = self.filter.selection();
        let mut choices = CategorySelection::choices();
        if matches!(selected, CategorySelection::Unknown(_)) {
            choices.push(selected.clone());
        }
        choices
            .iter()
            .map(|choice| {
                if choice == selected {
                    format!("[{}]", choice.label())
                } else {
                    choice.label().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

fn render_card(post: &Post) -> Vec<String> {
    vec![
        format!("#{} {}", post.id, post.category),
        format!("  {}", post.title),
        format!("  {}", post.excerpt),
        format!(
            "  ({}) {} - {} - {} min read",
            post.author.initials(),
            post.author.name,
            post.published_on.format("%b %-d, %Y"),
            post.read_time_minutes
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cognistack_core::seed::sample_posts;

    #[test]
    fn renders_every_post_by_default() {
        let page = BlogsPage::new(sample_posts());
        let out = page.render();
        assert!(out.contains("Categories: [All] | Cognitive Functions"));
        assert!(out.contains("(DSC) Dr. Sarah Chen - Jan 15, 2024 - 8 min read"));
        assert!(out.contains("The Evolution of Personality Theory"));
    }

    #[test]
    fn selected_category_is_bracketed() {
        let mut page = BlogsPage::new(sample_posts());
        page.apply(CatalogAction::SetCategory("Relationships".into()));
        let out = page.render();
        assert!(out.contains("[Relationships]"));
        assert!(out.contains("Building Better Relationships Through Type Compatibility"));
        assert!(!out.contains("The Evolution of Personality Theory"));
    }

    #[test]
    fn empty_result_explains_itself() {
        let mut page = BlogsPage::new(sample_posts());
        page.apply(CatalogAction::SetSearchText("tarot".into()));
        let out = page.render();
        assert!(out.contains("No articles found"));
        assert!(out.contains("Try adjusting your search terms or category filter"));
    }

    #[test]
    fn unknown_category_is_shown_as_selected() {
        let mut page = BlogsPage::new(sample_posts());
        page.apply(CatalogAction::SetCategory("Astrology".into()));
        let out = page.render();
        assert!(out.contains("| [Astrology]"));
        assert!(out.contains("No articles found"));
    }
}
