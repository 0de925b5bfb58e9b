mod config;
mod error;
mod logging;
mod render;
mod session;

use blog_core::{Catalog, Lookup, Page, PostId};
use clap::Parser;
use tokio::io::{BufReader, stdin, stdout};

use crate::config::AppConfig;
use crate::error::CliError;
use crate::logging::init_logging;
use crate::session::Session;

#[derive(Parser, Debug)]
#[clap(about = "Browse the blog and manage posts from the terminal")]
struct Cli {
    /// Print data as JSON instead of rendered pages
    #[clap(long)]
    json: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Home page with the recent posts
    Home,
    /// A single post from the public pages
    Show { id: String },
    /// Render the page at a site path, e.g. `/blog/1`
    Open { path: String },
    /// Interactive dashboard; changes last until the session ends
    Dashboard,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    init_logging(config.log_format);

    let args = Cli::parse();
    let catalog = Catalog::sample();

    let page = match args.command {
        Command::Home => Page::Home,
        Command::Show { id } => Page::Blog {
            id: PostId::from(id),
        },
        Command::Open { path } => path.parse::<Page>()?,
        Command::Dashboard => {
            let mut session = Session::new(
                config.seed.dashboard(),
                BufReader::new(stdin()),
                stdout(),
            );
            session.run().await?;
            return Ok(());
        }
    };

    let text = if args.json {
        page_json(&catalog, &page, &config)?
    } else {
        page_text(&catalog, &page, &config)
    };
    println!("{text}");
    Ok(())
}

fn page_text(catalog: &Catalog, page: &Page, config: &AppConfig) -> String {
    match page {
        Page::Home => render::home(&catalog.list_summaries()),
        Page::Blog { id } => render::detail(&catalog.find_by_id(id)),
        Page::Login => render::login(),
        Page::Register => render::register(),
        Page::Dashboard => render::dashboard(&config.seed.dashboard()),
    }
}

fn page_json(catalog: &Catalog, page: &Page, config: &AppConfig) -> Result<String, CliError> {
    let value = match page {
        Page::Home => serde_json::to_value(catalog.list_summaries())?,
        Page::Blog { id } => match catalog.find_by_id(id) {
            Lookup::Found(post) => serde_json::to_value(post)?,
            Lookup::NotFound(id) => serde_json::json!({ "error": "not found", "id": id }),
        },
        Page::Dashboard => serde_json::to_value(config.seed.dashboard().posts())?,
        Page::Login | Page::Register => serde_json::json!({ "page": page.to_string() }),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
