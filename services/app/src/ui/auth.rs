//! services/app/src/ui/auth.rs
//!
//! Sign-in / sign-up form state. The form validates its own fields, then hands a
//! `Submission` to the identity provider and tracks the loading flag around the call.

use cognistack_core::{
    domain::{AuthSession, SignInCredentials, SignUpCredentials},
    ports::AuthResult,
};

use crate::ui::protocol::{AuthTab, FormField};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("'{0}' is not an email address")]
    InvalidEmail(String),
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("a request is already in progress")]
    Busy,
}

/// What the form sends to the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    SignIn(SignInCredentials),
    SignUp(SignUpCredentials),
}

pub struct AuthForm {
    tab: AuthTab,
    username: String,
    email: String,
    password: String,
    confirm_password: String,
    loading: bool,
    status: Option<String>,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            tab: AuthTab::SignIn,
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            loading: false,
            status: None,
        }
    }
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn select_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
        self.status = None;
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Username => self.username = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
        }
    }

    fn validate(&self) -> Result<Submission, FormError> {
        let required = |value: &str, name: &'static str| {
            if value.trim().is_empty() {
                Err(FormError::Required(name))
            } else {
                Ok(())
            }
        };

        if self.tab == AuthTab::SignUp {
            required(&self.username, "Username")?;
        }
        required(&self.email, "Email")?;
        if !self.email.contains('@') {
            return Err(FormError::InvalidEmail(self.email.clone()));
        }
        required(&self.password, "Password")?;

        match self.tab {
            AuthTab::SignIn => Ok(Submission::SignIn(SignInCredentials {
                email: self.email.trim().to_string(),
                password: self.password.clone(),
            })),
            AuthTab::SignUp => {
                required(&self.confirm_password, "Confirm Password")?;
                if self.password != self.confirm_password {
                    return Err(FormError::PasswordMismatch);
                }
                Ok(Submission::SignUp(SignUpCredentials {
                    username: self.username.trim().to_string(),
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                }))
            }
        }
    }

    /// Validates and, on success, raises the loading flag until `finish_submit`.
    pub fn begin_submit(&mut self) -> Result<Submission, FormError> {
        if self.loading {
            return Err(FormError::Busy);
        }
        let submission = match self.validate() {
            Ok(submission) => submission,
            Err(e) => {
                self.status = Some(e.to_string());
                return Err(e);
            }
        };
        self.loading = true;
        self.status = None;
        Ok(submission)
    }

    pub fn finish_submit(&mut self, outcome: &AuthResult<AuthSession>) {
        self.loading = false;
        self.status = Some(match outcome {
            Ok(session) => format!("Signed in as {}", session.email),
            Err(e) => e.to_string(),
        });
        if outcome.is_ok() {
            self.password.clear();
            self.confirm_password.clear();
        }
    }

    pub fn render(&self) -> String {
        let tab = |t: AuthTab, label: &str| {
            if self.tab == t {
                format!("[{label}]")
            } else {
                label.to_string()
            }
        };
        let masked = |value: &str| "*".repeat(value.chars().count());

        let mut lines = vec![
            "CogniStack".to_string(),
            "Discover your cognitive potential".to_string(),
            String::new(),
            "Welcome".to_string(),
            format!("{} | {}", tab(AuthTab::SignIn, "Sign In"), tab(AuthTab::SignUp, "Sign Up")),
        ];
        if self.tab == AuthTab::SignUp {
            lines.push(format!("  Username: {}", self.username));
        }
        lines.push(format!("  Email: {}", self.email));
        lines.push(format!("  Password: {}", masked(&self.password)));
        if self.tab == AuthTab::SignUp {
            lines.push(format!("  Confirm Password: {}", masked(&self.confirm_password)));
        }

        let button = match (self.tab, self.loading) {
            (AuthTab::SignIn, false) => "[Sign In]",
            (AuthTab::SignIn, true) => "[Signing In...] (disabled)",
            (AuthTab::SignUp, false) => "[Create Account]",
            (AuthTab::SignUp, true) => "[Creating Account...] (disabled)",
        };
        lines.push(button.to_string());
        if let Some(status) = &self.status {
            lines.push(status.clone());
        }
        lines.push(String::new());
        lines.push("By continuing, you agree to our Terms of Service and Privacy Policy".to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cognistack_core::ports::AuthError;

    fn filled_sign_in() -> AuthForm {
        let mut form = AuthForm::new();
        form.set(FormField::Email, "alex@example.com".to_string());
        form.set(FormField::Password, "hunter22".to_string());
        form
    }

    #[test]
    fn sign_in_requires_email_and_password() {
        let mut form = AuthForm::new();
        assert_eq!(form.begin_submit(), Err(FormError::Required("Email")));
        form.set(FormField::Email, "alex".to_string());
        assert!(matches!(form.begin_submit(), Err(FormError::InvalidEmail(_))));
        form.set(FormField::Email, "alex@example.com".to_string());
        assert_eq!(form.begin_submit(), Err(FormError::Required("Password")));
        assert!(!form.is_loading());
        assert_eq!(form.status(), Some("Password is required"));
    }

    #[test]
    fn sign_up_checks_username_and_confirmation() {
        let mut form = filled_sign_in();
        form.select_tab(AuthTab::SignUp);
        assert_eq!(form.begin_submit(), Err(FormError::Required("Username")));
        form.set(FormField::Username, "alex".to_string());
        form.set(FormField::ConfirmPassword, "hunter23".to_string());
        assert_eq!(form.begin_submit(), Err(FormError::PasswordMismatch));
        form.set(FormField::ConfirmPassword, "hunter22".to_string());
        assert!(matches!(form.begin_submit(), Ok(Submission::SignUp(_))));
    }

    #[test]
    fn loading_flag_spans_the_request() {
        let mut form = filled_sign_in();
        let submission = form.begin_submit().expect("valid");
        assert!(matches!(submission, Submission::SignIn(ref c) if c.email == "alex@example.com"));
        assert!(form.is_loading());
        assert!(form.render().contains("[Signing In...] (disabled)"));
        assert_eq!(form.begin_submit(), Err(FormError::Busy));

        form.finish_submit(&Err(AuthError::Unavailable("offline".to_string())));
        assert!(!form.is_loading());
        assert_eq!(form.status(), Some("Identity provider unavailable: offline"));
        assert!(form.render().contains("[Sign In]"));
    }

    #[test]
    fn passwords_are_masked() {
        let form = filled_sign_in();
        let out = form.render();
        assert!(out.contains("Password: ********"));
        assert!(!out.contains("hunter22"));
    }
}
