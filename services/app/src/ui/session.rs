//! services/app/src/ui/session.rs
//!
//! The console session loop: reads one command per line, applies it to the
//! session's view state and writes the re-rendered page back.

use cognistack_core::catalog::CatalogAction;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::ui::auth::Submission;
use crate::ui::protocol::{Command, Page, HELP};
use crate::ui::state::{AppState, SessionState};

const PROMPT: &str = "> ";

/// What the loop should do after a command has been applied.
enum Flow {
    Render(Option<String>),
    Help,
    Quit,
}

/// Runs one session until the input ends or the user quits.
pub async fn run_session<R, W>(
    app_state: &AppState,
    input: R,
    mut output: W,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut session = SessionState::new(app_state).await?;
    info!(scorer = ?app_state.config.scorer, "Console session started");

    write_frame(&mut output, &session.render()).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("Rejected command {:?}: {}", line, e);
                write_frame(&mut output, &format!("error: {e}\n")).await?;
                continue;
            }
        };
        debug!(?command, "Command received");

        match dispatch(app_state, &mut session, command, &mut output).await? {
            Flow::Quit => break,
            Flow::Help => write_frame(&mut output, &format!("{HELP}\n")).await?,
            Flow::Render(notice) => {
                let mut frame = String::new();
                if let Some(notice) = notice {
                    frame.push_str(&notice);
                    frame.push('\n');
                }
                frame.push_str(&session.render());
                write_frame(&mut output, &frame).await?;
            }
        }
    }

    info!("Console session ended");
    output.write_all(b"Goodbye\n").await?;
    output.flush().await?;
    Ok(())
}

async fn write_frame<W: AsyncWrite + Unpin>(output: &mut W, frame: &str) -> Result<(), AppError> {
    output.write_all(frame.as_bytes()).await?;
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

fn show(session: &mut SessionState, page: Page) {
    if session.page != page {
        info!(page = page.title(), "Page changed");
        session.page = page;
    }
}

async fn dispatch<W: AsyncWrite + Unpin>(
    app_state: &AppState,
    session: &mut SessionState,
    command: Command,
    output: &mut W,
) -> Result<Flow, AppError> {
    let notice = match command {
        Command::Show(page) => {
            show(session, page);
            None
        }
        Command::Search(text) => {
            show(session, Page::Blogs);
            session.blogs.apply(CatalogAction::SetSearchText(text));
            None
        }
        Command::Category(category) => {
            show(session, Page::Blogs);
            session.blogs.apply(CatalogAction::SetCategory(category));
            None
        }
        Command::Begin => {
            show(session, Page::Test);
            let notice = (!session.assessment.begin())
                .then(|| "The assessment has already been started".to_string());
            // An empty question list completes on begin.
            if session.assessment.needs_scoring() {
                score(app_state, session).await;
            }
            notice
        }
        Command::Choose(number) => {
            show(session, Page::Test);
            session.assessment.choose(number).err().map(|e| e.to_string())
        }
        Command::Toggle(number) => {
            show(session, Page::Test);
            session.assessment.toggle(number).err().map(|e| e.to_string())
        }
        Command::Next => {
            show(session, Page::Test);
            let notice = (!session.assessment.next())
                .then(|| "Answer the current question first".to_string());
            if session.assessment.needs_scoring() {
                score(app_state, session).await;
            }
            notice
        }
        Command::Restart => {
            show(session, Page::Test);
            session.assessment.restart();
            None
        }
        Command::Tab(tab) => {
            show(session, Page::Auth);
            session.auth_form.select_tab(tab);
            None
        }
        Command::Set(field, value) => {
            show(session, Page::Auth);
            session.auth_form.set(field, value);
            None
        }
        Command::Submit => {
            show(session, Page::Auth);
            submit(app_state, session, output).await?;
            None
        }
        Command::Help => return Ok(Flow::Help),
        Command::Quit => return Ok(Flow::Quit),
    };
    Ok(Flow::Render(notice))
}

async fn score(app_state: &AppState, session: &mut SessionState) {
    let walkthrough = session.assessment.walkthrough();
    let Some(answers) = walkthrough.completed_answers() else {
        return;
    };
    let outcome = app_state
        .scorer
        .score(walkthrough.questions(), answers)
        .await;
    match &outcome {
        Ok(result) => info!(mbti_type = %result.mbti_type, "Assessment scored"),
        Err(e) => warn!("Scoring failed: {}", e),
    }
    session
        .assessment
        .set_result(outcome.map_err(|e| e.to_string()));
}

async fn submit<W: AsyncWrite + Unpin>(
    app_state: &AppState,
    session: &mut SessionState,
    output: &mut W,
) -> Result<(), AppError> {
    let submission = match session.auth_form.begin_submit() {
        Ok(submission) => submission,
        Err(e) => {
            debug!("Form rejected: {}", e);
            return Ok(());
        }
    };

    // Show the disabled, loading button while the provider works.
    output.write_all(session.render().as_bytes()).await?;
    output.flush().await?;

    let outcome = match &submission {
        Submission::SignIn(credentials) => app_state.auth.sign_in(credentials).await,
        Submission::SignUp(credentials) => app_state.auth.sign_up(credentials).await,
    };
    if let Err(e) = &outcome {
        warn!("Authentication failed: {}", e);
    }
    session.auth_form.finish_submit(&outcome);
    Ok(())
}
