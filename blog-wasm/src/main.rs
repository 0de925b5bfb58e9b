use blog_core::{Catalog, Lookup, PostId};
use chrono::{Datelike, Utc};
use dioxus::prelude::*;

mod dashboard;

use dashboard::Dashboard;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/blog/:id")]
        Blog { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            Link { to: Route::Home {}, class: "brand", "Our Blog" }
            div { class: "nav-links",
                Link { to: Route::Dashboard {}, "Dashboard" }
                Link { to: Route::Login {}, "Login" }
                Link { to: Route::Register {}, class: "button outline", "Sign Up" }
            }
        }
        Outlet::<Route> {}
    }
}

#[component]
fn Tags(tags: Vec<String>) -> Element {
    rsx! {
        div { class: "tags",
            for tag in tags {
                span { class: "tag", "{tag}" }
            }
        }
    }
}

#[component]
fn Home() -> Element {
    let summaries = Catalog::sample().list_summaries();
    let year = Utc::now().year();

    rsx! {
        section { class: "hero",
            h1 { "Welcome to Our Blog" }
            p { "Discover insightful articles, expert opinions, and the latest trends in technology and web development." }
            div { class: "actions",
                Link { to: Route::Register {}, class: "button", "Sign Up" }
                Link { to: Route::Login {}, class: "button outline", "Login" }
            }
        }
        main { class: "container",
            h2 { "Recent Blog Posts" }
            div { class: "grid",
                for summary in summaries {
                    article { key: "{summary.id}", class: "card",
                        h3 { "{summary.title}" }
                        img { src: "{summary.image}", alt: "{summary.title}" }
                        p { class: "muted", "{summary.excerpt}..." }
                        Tags { tags: summary.tags.clone() }
                        Link { to: Route::Blog { id: summary.id.to_string() }, "Read more" }
                    }
                }
            }
        }
        footer { class: "footer", "© {year} Our Blog. All rights reserved." }
    }
}

#[derive(Clone)]
struct Byline {
    datetime: String,
    date: String,
    reading_time: u32,
    author: String,
    avatar: String,
    initials: String,
}

#[component]
fn Blog(id: String) -> Element {
    let mut avatar_failed = use_signal(|| false);
    let post = match Catalog::sample().find_by_id(&PostId::from(id)) {
        Lookup::Found(post) => post,
        Lookup::NotFound(missing) => {
            tracing::debug!(post_id = %missing, "blog post not found");
            return rsx! {
                div { class: "container center",
                    h1 { "Blog post not found" }
                    p { "Sorry, we couldn't find the blog post you're looking for." }
                    Link { to: Route::Home {}, class: "button", "Return to Home" }
                }
            };
        }
    };
    let paragraphs: Vec<String> = post.paragraphs().into_iter().map(String::from).collect();
    let byline = post.meta.as_ref().map(|meta| Byline {
        datetime: meta.publish_date.to_string(),
        date: meta.publish_date.format("%B %-d, %Y").to_string(),
        reading_time: meta.reading_time,
        author: meta.author.name.clone(),
        avatar: meta.author.avatar.clone(),
        initials: meta.author.initials(),
    });

    rsx! {
        div { class: "container narrow",
            article { class: "card",
                if let Some(byline) = byline.clone() {
                    div { class: "muted",
                        time { datetime: "{byline.datetime}", "{byline.date}" }
                        " • {byline.reading_time} min read"
                    }
                }
                h1 { "{post.title}" }
                if let Some(byline) = byline {
                    div { class: "author",
                        if byline.avatar.is_empty() || avatar_failed() {
                            span { class: "avatar", title: "{byline.author}", "{byline.initials}" }
                        } else {
                            img {
                                class: "avatar",
                                src: "{byline.avatar}",
                                alt: "{byline.author}",
                                onerror: move |_| avatar_failed.set(true),
                            }
                        }
                        span { "By {byline.author}" }
                    }
                }
                img { class: "cover", src: "{post.image}", alt: "{post.title}" }
                for paragraph in paragraphs {
                    p { "{paragraph}" }
                }
                Tags { tags: post.tags.clone() }
            }
            div { class: "center",
                Link { to: Route::Home {}, class: "button", "Back to All Posts" }
            }
        }
    }
}

#[component]
fn Login() -> Element {
    rsx! {
        div { class: "container narrow",
            form {
                class: "card form",
                onsubmit: move |evt: FormEvent| evt.prevent_default(),
                h1 { "Login" }
                label { "Email" input { r#type: "email", required: true } }
                label { "Password" input { r#type: "password", required: true } }
                button { class: "button", r#type: "submit", "Login" }
                Link { to: Route::Register {}, "Don't have an account? Sign up" }
            }
        }
    }
}

#[component]
fn Register() -> Element {
    rsx! {
        div { class: "container narrow",
            form {
                class: "card form",
                onsubmit: move |evt: FormEvent| evt.prevent_default(),
                h1 { "Create Account" }
                label { "Name" input { r#type: "text", required: true } }
                label { "Email" input { r#type: "email", required: true } }
                label { "Password" input { r#type: "password", required: true } }
                button { class: "button", r#type: "submit", "Sign Up" }
                Link { to: Route::Login {}, "Already have an account? Log in" }
            }
        }
    }
}
