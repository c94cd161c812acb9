//! services/app/src/ui/state.rs
//!
//! Defines the application's shared state and the state of one console session.

use crate::adapters::{
    FixedScorer, JsonContentStore, StaticContentStore, StubAuthProvider, TallyScorer,
};
use crate::config::{Config, ScorerKind};
use crate::ui::{
    assessment::AssessmentPage, auth::AuthForm, blogs::BlogsPage, pages, protocol::Page,
};
use cognistack_core::domain::Profile;
use cognistack_core::ports::{AuthProvider, ContentStore, PortResult, ScoringService};
use std::sync::Arc;
use tracing::info;

//=========================================================================================
// AppState (Shared, Created Once at Startup)
//=========================================================================================

/// The adapters behind every port, plus the configuration they were built from.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub content: Arc<dyn ContentStore>,
    pub scorer: Arc<dyn ScoringService>,
    pub auth: Arc<dyn AuthProvider>,
}

impl AppState {
    /// Wires up the adapters the configuration asks for.
    pub async fn from_config(config: Config) -> PortResult<Self> {
        let content: Arc<dyn ContentStore> = match &config.content_path {
            Some(path) => Arc::new(JsonContentStore::load(path).await?),
            None => {
                info!("Using built-in content");
                Arc::new(StaticContentStore::new())
            }
        };
        let scorer: Arc<dyn ScoringService> = match config.scorer {
            ScorerKind::Fixed => Arc::new(FixedScorer),
            ScorerKind::Tally => Arc::new(TallyScorer),
        };
        let auth = Arc::new(StubAuthProvider::new(config.auth_delay));

        Ok(Self {
            config: Arc::new(config),
            content,
            scorer,
            auth,
        })
    }
}

//=========================================================================================
// SessionState (Specific to One Console Session)
//=========================================================================================

/// Every piece of view state the user can change, owned by the session.
pub struct SessionState {
    pub page: Page,
    pub blogs: BlogsPage,
    pub assessment: AssessmentPage,
    pub auth_form: AuthForm,
    pub profile: Profile,
}

impl SessionState {
    /// Creates a new `SessionState` by loading the content the pages show.
    pub async fn new(app_state: &AppState) -> PortResult<Self> {
        let posts = app_state.content.list_posts().await?;
        let questions = app_state.content.list_questions().await?;
        let profile = app_state.content.load_profile().await?;

        Ok(Self {
            page: Page::Home,
            blogs: BlogsPage::new(posts),
            assessment: AssessmentPage::new(questions),
            auth_form: AuthForm::new(),
            profile,
        })
    }

    pub fn render(&self) -> String {
        let body = match self.page {
            Page::Home => pages::render_home(),
            Page::About => pages::render_about(),
            Page::Blogs => self.blogs.render(),
            Page::Test => self.assessment.render(),
            Page::Auth => self.auth_form.render(),
            Page::Profile => pages::render_profile(&self.profile),
        };
        format!("==== {} ====\n{}\n", self.page.title(), body)
    }
}
