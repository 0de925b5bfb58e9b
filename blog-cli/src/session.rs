//! Line-driven dashboard session. State lives only as long as the session.

use blog_core::{
    Dashboard, DashboardEvent, DashboardOutcome, DraftField, IdGenerator, PostId, PostRepository,
};
use clap::{ColorChoice, Parser};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::info;

use crate::error::CliError;
use crate::render;

/// One line typed into the dashboard session.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "dashboard",
    no_binary_name = true,
    disable_version_flag = true,
    color = ColorChoice::Never
)]
pub enum SessionCommand {
    /// Show your blogs
    #[command(visible_alias = "ls")]
    List,
    /// Show a blog in full
    View { id: PostId },
    /// Show the editor form
    Form,
    /// Fill title, content, image or tags
    Set {
        field: DraftField,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Add the blog, or update the one being edited
    Submit,
    /// Load a blog into the form
    Edit { id: PostId },
    /// Stop editing and clear the form
    Cancel,
    /// Delete a blog (asks for confirmation)
    #[command(visible_alias = "rm")]
    Delete { id: PostId },
    /// Leave the dashboard
    #[command(visible_alias = "exit")]
    Quit,
}

impl SessionCommand {
    /// Words are split on whitespace, so runs of spaces inside a `set`
    /// value collapse to one.
    pub fn from_line(line: &str) -> Result<Self, CliError> {
        Ok(Self::try_parse_from(line.split_whitespace())?)
    }
}

pub struct Session<R, G, I, O>
where
    R: PostRepository,
    G: IdGenerator,
{
    dashboard: Dashboard<R, G>,
    input: Lines<I>,
    output: O,
}

impl<R, G, I, O> Session<R, G, I, O>
where
    R: PostRepository,
    G: IdGenerator,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    pub fn new(dashboard: Dashboard<R, G>, input: I, output: O) -> Self {
        Self {
            dashboard,
            input: input.lines(),
            output,
        }
    }

    pub fn into_dashboard(self) -> Dashboard<R, G> {
        self.dashboard
    }

    async fn say(&mut self, text: &str) -> Result<(), CliError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn prompt(&mut self) -> Result<(), CliError> {
        self.output.write_all(b"> ").await?;
        self.output.flush().await?;
        Ok(())
    }

    pub async fn run(&mut self) -> Result<(), CliError> {
        info!("dashboard session started");
        self.say("Dashboard (type `help` for commands)").await?;

        loop {
            self.prompt().await?;
            let Some(line) = self.input.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match SessionCommand::from_line(&line) {
                Ok(command) => command,
                Err(err) => {
                    self.say(err.to_string().trim_end()).await?;
                    continue;
                }
            };
            if command == SessionCommand::Quit {
                break;
            }
            self.execute(command).await?;
        }

        info!(
            posts = self.dashboard.posts().len(),
            "dashboard session ended"
        );
        Ok(())
    }

    async fn confirm(&mut self, question: &str) -> Result<bool, CliError> {
        self.output
            .write_all(format!("{question} [y/N] ").as_bytes())
            .await?;
        self.output.flush().await?;
        let answer = self.input.next_line().await?.unwrap_or_default();
        Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
    }

    async fn execute(&mut self, command: SessionCommand) -> Result<(), CliError> {
        let event = match command {
            SessionCommand::List => {
                let text = render::post_list(&self.dashboard.posts());
                return self.say(&text).await;
            }
            SessionCommand::View { id } => {
                let text = match self.dashboard.service().get_post(&id) {
                    Ok(post) => render::post_panel(&post),
                    Err(err) => format!("error: {err}"),
                };
                return self.say(&text).await;
            }
            SessionCommand::Form => {
                let text = render::form(self.dashboard.editor());
                return self.say(&text).await;
            }
            SessionCommand::Quit => return Ok(()),
            SessionCommand::Delete { id } => {
                let confirmed = self
                    .confirm(
                        "Are you absolutely sure? This will permanently delete your blog post.",
                    )
                    .await?;
                if !confirmed {
                    return self.say("kept").await;
                }
                DashboardEvent::Delete(id)
            }
            SessionCommand::Set { field, value } => DashboardEvent::Input(field, value.join(" ")),
            SessionCommand::Submit => DashboardEvent::Submit,
            SessionCommand::Edit { id } => DashboardEvent::Edit(id),
            SessionCommand::Cancel => DashboardEvent::CancelEdit,
        };

        let reply = match self.dashboard.dispatch(event) {
            Ok(outcome) => self.describe(outcome),
            Err(err) => format!("error: {err}"),
        };
        if reply.is_empty() {
            return Ok(());
        }
        self.say(&reply).await
    }

    fn describe(&self, outcome: DashboardOutcome) -> String {
        match outcome {
            DashboardOutcome::FieldChanged => String::new(),
            DashboardOutcome::EditStarted(_) | DashboardOutcome::EditCancelled => {
                render::form(self.dashboard.editor())
            }
            DashboardOutcome::Created(post) => format!("added [{}] {}", post.id, post.title),
            DashboardOutcome::Updated { id, matched: true } => format!("updated [{id}]"),
            DashboardOutcome::Deleted { id, matched: true } => format!("deleted [{id}]"),
            DashboardOutcome::Updated { id, matched: false }
            | DashboardOutcome::Deleted { id, matched: false } => {
                format!("no blog with id {id}, nothing changed")
            }
            DashboardOutcome::Ignored => "no such blog".to_string(),
        }
    }
}
