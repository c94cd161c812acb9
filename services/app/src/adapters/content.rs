//! services/app/src/adapters/content.rs
//!
//! Adapters for the `ContentStore` port: the built-in content compiled into the
//! binary, and a JSON file with the same shape that can replace it.

use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDate;
use cognistack_core::{
    domain::{
        Author, Category, Compatibility, FamousPersonality, FunctionStrength, Post, Profile,
        Question,
    },
    mbti::{CognitiveFunction, MbtiType, Preference},
    ports::{ContentStore, PortError, PortResult},
    seed,
};
use serde::{Deserialize, Serialize};
use tracing::info;

//=========================================================================================
// Built-in Content
//=========================================================================================

/// Serves the fixed in-memory lists the product ships with.
#[derive(Clone, Default)]
pub struct StaticContentStore;

impl StaticContentStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentStore for StaticContentStore {
    async fn list_posts(&self) -> PortResult<Vec<Post>> {
        Ok(seed::sample_posts())
    }

    async fn list_questions(&self) -> PortResult<Vec<Question>> {
        Ok(seed::sample_questions())
    }

    async fn load_profile(&self) -> PortResult<Profile> {
        Ok(seed::sample_profile())
    }
}

//=========================================================================================
// JSON File Content
//=========================================================================================

/// Content read once from a JSON file and kept in memory.
#[derive(Clone)]
pub struct JsonContentStore {
    posts: Vec<Post>,
    questions: Vec<Question>,
    profile: Profile,
}

impl JsonContentStore {
    /// Reads and validates the whole file up front so later calls cannot fail.
    pub async fn load(path: &Path) -> PortResult<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PortError::NotFound(format!("{}: {}", path.display(), e)))?;
        let store = Self::from_json(&raw)?;
        info!(
            "Loaded {} posts and {} questions from {}",
            store.posts.len(),
            store.questions.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn from_json(raw: &str) -> PortResult<Self> {
        let record: ContentRecord =
            serde_json::from_str(raw).map_err(|e| PortError::Unexpected(e.to_string()))?;
        record.to_domain()
    }
}

#[async_trait]
impl ContentStore for JsonContentStore {
    async fn list_posts(&self) -> PortResult<Vec<Post>> {
        Ok(self.posts.clone())
    }

    async fn list_questions(&self) -> PortResult<Vec<Question>> {
        Ok(self.questions.clone())
    }

    async fn load_profile(&self) -> PortResult<Profile> {
        Ok(self.profile.clone())
    }
}

//=========================================================================================
// "Impure" Serialization Record Structs
//=========================================================================================

fn invalid(what: &str, value: &str) -> PortError {
    PortError::Unexpected(format!("invalid {} '{}' in content file", what, value))
}

/// Answers are keyed by question id, so every id must be unique.
fn ensure_unique_ids(what: &str, ids: impl IntoIterator<Item = u32>) -> PortResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PortError::Unexpected(format!(
                "duplicate {} id {} in content file",
                what, id
            )));
        }
    }
    Ok(())
}

/// The on-disk shape of a whole content file.
#[derive(Serialize, Deserialize)]
pub struct ContentRecord {
    pub posts: Vec<PostRecord>,
    pub questions: Vec<QuestionRecord>,
    pub profile: ProfileRecord,
}

impl ContentRecord {
    pub fn from_domain(posts: &[Post], questions: &[Question], profile: &Profile) -> Self {
        Self {
            posts: posts.iter().map(PostRecord::from_domain).collect(),
            questions: questions.iter().map(QuestionRecord::from_domain).collect(),
            profile: ProfileRecord::from_domain(profile),
        }
    }

    fn to_domain(self) -> PortResult<JsonContentStore> {
        ensure_unique_ids("post", self.posts.iter().map(|p| p.id))?;
        ensure_unique_ids("question", self.questions.iter().map(|q| q.id))?;
        let posts = self
            .posts
            .into_iter()
            .map(PostRecord::to_domain)
            .collect::<PortResult<Vec<_>>>()?;
        let questions = self
            .questions
            .into_iter()
            .map(QuestionRecord::to_domain)
            .collect::<PortResult<Vec<_>>>()?;
        let profile = self.profile.to_domain()?;
        Ok(JsonContentStore {
            posts,
            questions,
            profile,
        })
    }
}

#[derive(Serialize, Deserialize)]
pub struct AuthorRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub author: AuthorRecord,
    pub category: String,
    pub read_time: u32,
    pub published_at: NaiveDate,
}

impl PostRecord {
    fn from_domain(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            author: AuthorRecord {
                name: post.author.name.clone(),
                avatar: post.author.avatar_url.clone(),
            },
            category: post.category.label().to_string(),
            read_time: post.read_time_minutes,
            published_at: post.published_on,
        }
    }

    fn to_domain(self) -> PortResult<Post> {
        let category =
            Category::from_label(&self.category).ok_or_else(|| invalid("category", &self.category))?;
        if self.read_time == 0 {
            return Err(invalid("read time", "0"));
        }
        Ok(Post {
            id: self.id,
            title: self.title,
            excerpt: self.excerpt,
            author: Author {
                name: self.author.name,
                avatar_url: self.author.avatar,
            },
            category,
            read_time_minutes: self.read_time,
            published_on: self.published_at,
        })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub multiple_choice: bool,
    /// One preference letter per option, e.g. `["T", "F", "S", "N"]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<String>,
}

impl QuestionRecord {
    fn from_domain(question: &Question) -> Self {
        Self {
            id: question.id,
            text: question.text.clone(),
            options: question.options.clone(),
            multiple_choice: question.multiple_choice,
            dimensions: question
                .option_keys
                .iter()
                .map(|p| p.letter().to_string())
                .collect(),
        }
    }

    fn to_domain(self) -> PortResult<Question> {
        let option_keys = self
            .dimensions
            .iter()
            .map(|d| {
                let mut chars = d.chars();
                let key = match (chars.next(), chars.next()) {
                    (Some(c), None) => Preference::from_letter(c),
                    _ => None,
                };
                key.ok_or_else(|| invalid("dimension", d))
            })
            .collect::<PortResult<Vec<_>>>()?;
        if !option_keys.is_empty() && option_keys.len() != self.options.len() {
            return Err(PortError::Unexpected(format!(
                "question {} has {} options but {} dimensions",
                self.id,
                self.options.len(),
                option_keys.len()
            )));
        }
        Ok(Question {
            id: self.id,
            text: self.text,
            options: self.options,
            multiple_choice: self.multiple_choice,
            option_keys,
        })
    }
}

#[derive(Serialize, Deserialize)]
pub struct StrengthRecord {
    pub function: String,
    pub strength: u8,
}

#[derive(Serialize, Deserialize)]
pub struct FamousRecord {
    pub name: String,
    pub profession: String,
}

#[derive(Serialize, Deserialize)]
pub struct CompatibilityRecord {
    #[serde(rename = "type")]
    pub mbti_type: String,
    pub compatibility: u8,
    pub relationship: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub name: String,
    pub username: String,
    pub email: String,
    pub mbti_type: String,
    pub cognitive_stack: Vec<StrengthRecord>,
    #[serde(default)]
    pub famous_personalities: Vec<FamousRecord>,
    #[serde(default)]
    pub compatibility: Vec<CompatibilityRecord>,
}

impl ProfileRecord {
    fn from_domain(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            username: profile.handle.clone(),
            email: profile.email.clone(),
            mbti_type: profile.mbti_type.to_string(),
            cognitive_stack: profile
                .stack
                .iter()
                .map(|s| StrengthRecord {
                    function: s.function.code().to_string(),
                    strength: s.strength,
                })
                .collect(),
            famous_personalities: profile
                .famous_personalities
                .iter()
                .map(|f| FamousRecord {
                    name: f.name.clone(),
                    profession: f.profession.clone(),
                })
                .collect(),
            compatibility: profile
                .compatibility
                .iter()
                .map(|c| CompatibilityRecord {
                    mbti_type: c.mbti_type.to_string(),
                    compatibility: c.percent,
                    relationship: c.relationship.clone(),
                })
                .collect(),
        }
    }

    fn to_domain(self) -> PortResult<Profile> {
        let mbti_type: MbtiType = self
            .mbti_type
            .parse()
            .map_err(|_| invalid("type", &self.mbti_type))?;
        let stack = self
            .cognitive_stack
            .into_iter()
            .map(|s| -> PortResult<FunctionStrength> {
                let function = CognitiveFunction::from_code(&s.function)
                    .ok_or_else(|| invalid("cognitive function", &s.function))?;
                Ok(FunctionStrength {
                    function,
                    strength: s.strength.min(100),
                })
            })
            .collect::<PortResult<Vec<_>>>()?;
        let compatibility = self
            .compatibility
            .into_iter()
            .map(|c| -> PortResult<Compatibility> {
                Ok(Compatibility {
                    mbti_type: c.mbti_type.parse().map_err(|_| invalid("type", &c.mbti_type))?,
                    percent: c.compatibility.min(100),
                    relationship: c.relationship,
                })
            })
            .collect::<PortResult<Vec<_>>>()?;

        Ok(Profile {
            name: self.name,
            handle: self.username,
            email: self.email,
            mbti_type,
            stack,
            famous_personalities: self
                .famous_personalities
                .into_iter()
                .map(|f| FamousPersonality {
                    name: f.name,
                    profession: f.profession,
                })
                .collect(),
            compatibility,
        })
    }
}
