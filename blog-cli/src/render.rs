//! Plain-text renderings of the site's pages.

use blog_core::{Dashboard, Editor, Lookup, Post, PostSummary, excerpt};
use chrono::{Datelike, Utc};

const RULE: &str = "----------------------------------------";

fn tag_line(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("[{t}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn home(summaries: &[PostSummary]) -> String {
    let mut out = vec![
        "Welcome to Our Blog".to_string(),
        "Discover insightful articles, expert opinions, and the latest trends in technology and web development.".to_string(),
        "Sign Up: /register | Login: /login".to_string(),
        String::new(),
        "Recent Blog Posts".to_string(),
        RULE.to_string(),
    ];
    for summary in summaries {
        out.push(summary.title.clone());
        out.push(format!("  image: {}", summary.image));
        out.push(format!("  {}...", summary.excerpt));
        out.push(format!("  {}", tag_line(&summary.tags)));
        out.push(format!("  Read more: /blog/{}", summary.id));
        out.push(RULE.to_string());
    }
    out.push(format!(
        "(c) {} Our Blog. All rights reserved.",
        Utc::now().year()
    ));
    out.join("\n")
}

pub fn detail(lookup: &Lookup) -> String {
    let post = match lookup {
        Lookup::Found(post) => post,
        Lookup::NotFound(_) => return not_found(),
    };

    let mut out = Vec::new();
    if let Some(meta) = &post.meta {
        out.push(format!(
            "{} | {} min read",
            meta.publish_date.format("%B %-d, %Y"),
            meta.reading_time
        ));
    }
    out.push(post.title.clone());
    if let Some(meta) = &post.meta {
        out.push(format!(
            "({}) By {}",
            meta.author.initials(),
            meta.author.name
        ));
        if !meta.author.avatar.is_empty() {
            out.push(format!("avatar: {}", meta.author.avatar));
        }
    }
    out.push(format!("image: {}", post.image));
    out.push(String::new());
    out.push(post.paragraphs().join("\n\n"));
    out.push(String::new());
    out.push(format!("Tags: {}", tag_line(&post.tags)));
    out.push("Back to All Posts: /".to_string());
    out.join("\n")
}

pub fn not_found() -> String {
    [
        "Blog post not found",
        "Sorry, we couldn't find the blog post you're looking for.",
        "Return to Home: /",
    ]
    .join("\n")
}

pub fn login() -> String {
    "Login\n  email:\n  password:\n(sign-in is not available yet)".to_string()
}

pub fn register() -> String {
    "Register\n  name:\n  email:\n  password:\n(sign-up is not available yet)".to_string()
}

/// Full post as shown by the dashboard's "View" action.
pub fn post_panel(post: &Post) -> String {
    [
        post.title.clone(),
        post.content.clone(),
        format!("image: {}", post.image),
        tag_line(&post.tags),
    ]
    .join("\n")
}

pub fn form(editor: &Editor) -> String {
    let draft = editor.draft();
    let mut out = vec![
        editor.heading().to_string(),
        format!("  title:   {}", draft.title),
        format!("  content: {}", draft.content),
        format!("  image:   {}", draft.image),
        format!("  tags:    {}", draft.tags),
        format!("  [{}]", editor.submit_label()),
    ];
    if editor.is_editing() {
        out.push("  [Cancel Edit]".to_string());
    }
    out.join("\n")
}

pub fn post_list(posts: &[Post]) -> String {
    let mut out = vec!["Your Blogs".to_string()];
    if posts.is_empty() {
        out.push("  (none)".to_string());
    }
    for post in posts {
        out.push(format!("  [{}] {}", post.id, post.title));
        out.push(format!("      {}...", excerpt(&post.content)));
    }
    out.join("\n")
}

pub fn dashboard(dashboard: &Dashboard) -> String {
    format!(
        "Dashboard\n\n{}\n\n{}",
        form(dashboard.editor()),
        post_list(&dashboard.posts())
    )
}
