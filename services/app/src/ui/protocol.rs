//! services/app/src/ui/protocol.rs
//!
//! Defines the line protocol between the terminal user and the console session.
//! Every input line is one `Command`; every accepted command re-renders a `Page`.

use std::str::FromStr;

//=========================================================================================
// Pages
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Blogs,
    Test,
    Auth,
    Profile,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Blogs => "Blogs",
            Page::Test => "Take Test",
            Page::Auth => "Sign In",
            Page::Profile => "Profile",
        }
    }
}

//=========================================================================================
// Commands Sent FROM the User TO the Session
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FromStr for FormField {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "username" => Ok(FormField::Username),
            "email" => Ok(FormField::Email),
            "password" => Ok(FormField::Password),
            "confirm" | "confirm-password" => Ok(FormField::ConfirmPassword),
            other => Err(CommandError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Navigate to a page without changing any state.
    Show(Page),

    /// Replace the blog search text. An empty argument clears it.
    Search(String),

    /// Select a blog category by label, or `All`.
    Category(String),

    /// Start the assessment.
    Begin,

    /// Pick option `n` (1-based) of a single-select question.
    Choose(usize),

    /// Tick or untick option `n` (1-based) of a multi-select question.
    Toggle(usize),

    /// Press "Next Question" / "Complete Assessment".
    Next,

    /// Throw away the current assessment and start a fresh one.
    Restart,

    Tab(AuthTab),
    Set(FormField, String),
    Submit,

    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),
    #[error("'{0}' needs {1}")]
    MissingArgument(&'static str, &'static str),
    #[error("'{0}' is not an option number")]
    BadOptionNumber(String),
    #[error("unknown form field '{0}'")]
    UnknownField(String),
    #[error("unknown tab '{0}', use 'signin' or 'signup'")]
    UnknownTab(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let option_number = |name: &'static str| -> Result<usize, CommandError> {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument(name, "an option number"));
            }
            rest.parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| CommandError::BadOptionNumber(rest.to_string()))
        };

        match verb.to_lowercase().as_str() {
            "home" => Ok(Command::Show(Page::Home)),
            "about" => Ok(Command::Show(Page::About)),
            "blogs" => Ok(Command::Show(Page::Blogs)),
            "test" => Ok(Command::Show(Page::Test)),
            "auth" | "signin" => Ok(Command::Show(Page::Auth)),
            "profile" => Ok(Command::Show(Page::Profile)),
            "search" => Ok(Command::Search(rest.to_string())),
            "category" => {
                if rest.is_empty() {
                    Err(CommandError::MissingArgument("category", "a category name"))
                } else {
                    Ok(Command::Category(rest.to_string()))
                }
            }
            "begin" => Ok(Command::Begin),
            "choose" => option_number("choose").map(Command::Choose),
            "toggle" => option_number("toggle").map(Command::Toggle),
            "next" => Ok(Command::Next),
            "restart" => Ok(Command::Restart),
            "tab" => match rest.to_lowercase().as_str() {
                "signin" | "sign-in" => Ok(Command::Tab(AuthTab::SignIn)),
                "signup" | "sign-up" => Ok(Command::Tab(AuthTab::SignUp)),
                other => Err(CommandError::UnknownTab(other.to_string())),
            },
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(f, v)| (f, v.trim()))
                    .unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(CommandError::MissingArgument("set", "a field name"));
                }
                Ok(Command::Set(field.parse()?, value.to_string()))
            }
            "submit" => Ok(Command::Submit),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
Pages:      home | about | blogs | test | auth | profile
Blogs:      search <text> | category <name or All>
Assessment: begin | choose <n> | toggle <n> | next | restart
Account:    tab signin|signup | set <username|email|password|confirm> <value> | submit
Other:      help | quit";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, CommandError> {
        line.parse()
    }

    #[test]
    fn parses_navigation() {
        assert_eq!(parse("blogs"), Ok(Command::Show(Page::Blogs)));
        assert_eq!(parse("  PROFILE "), Ok(Command::Show(Page::Profile)));
    }

    #[test]
    fn search_keeps_inner_spaces_and_may_be_empty() {
        assert_eq!(
            parse("search  extraverted thinking "),
            Ok(Command::Search("extraverted thinking".to_string()))
        );
        assert_eq!(parse("search"), Ok(Command::Search(String::new())));
    }

    #[test]
    fn category_needs_a_name() {
        assert_eq!(
            parse("category Career Development"),
            Ok(Command::Category("Career Development".to_string()))
        );
        assert!(matches!(
            parse("category"),
            Err(CommandError::MissingArgument("category", _))
        ));
    }

    #[test]
    fn option_numbers_are_one_based() {
        assert_eq!(parse("choose 2"), Ok(Command::Choose(2)));
        assert_eq!(parse("toggle 4"), Ok(Command::Toggle(4)));
        assert!(matches!(parse("choose 0"), Err(CommandError::BadOptionNumber(_))));
        assert!(matches!(parse("toggle x"), Err(CommandError::BadOptionNumber(_))));
    }

    #[test]
    fn set_splits_field_from_value() {
        assert_eq!(
            parse("set email alex@example.com"),
            Ok(Command::Set(FormField::Email, "alex@example.com".to_string()))
        );
        assert_eq!(
            parse("set confirm"),
            Ok(Command::Set(FormField::ConfirmPassword, String::new()))
        );
        assert!(matches!(parse("set age 3"), Err(CommandError::UnknownField(_))));
    }

    #[test]
    fn unknown_verbs_are_errors() {
        assert_eq!(parse("dance"), Err(CommandError::Unknown("dance".to_string())));
    }
}
