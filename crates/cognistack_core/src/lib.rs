pub mod catalog;
pub mod domain;
pub mod mbti;
pub mod ports;
pub mod seed;
pub mod walkthrough;

pub use catalog::{CatalogAction, CatalogFilter, CategorySelection};
pub use domain::{
    Answer, AnswerMap, AssessmentResult, AuthSession, Author, Category, Compatibility,
    FamousPersonality, FunctionStrength, Post, Profile, Question, SignInCredentials,
    SignUpCredentials,
};
pub use mbti::{CognitiveFunction, MbtiType, Preference};
pub use ports::{
    AuthError, AuthProvider, AuthResult, ContentStore, PortError, PortResult, ScoringService,
};
pub use walkthrough::{Phase, Walkthrough};
