use blog_core::{DashboardEvent, DraftField, Post, PostId, excerpt};
use dioxus::prelude::*;

/// Dashboard page. The post list lives in this component's signal and is gone
/// after a reload.
#[component]
pub fn Dashboard() -> Element {
    let mut dashboard = use_signal(blog_core::Dashboard::seeded);
    let mut error = use_signal(|| None::<String>);
    let mut viewing = use_signal(|| None::<Post>);
    let mut pending_delete = use_signal(|| None::<PostId>);

    let mut send = move |event: DashboardEvent| {
        let result = dashboard.write().dispatch(event);
        match result {
            Ok(outcome) => {
                tracing::debug!(?outcome, "dashboard updated");
                error.set(None);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let (heading, submit_label, editing, draft) = {
        let state = dashboard.read();
        let editor = state.editor();
        (
            editor.heading(),
            editor.submit_label(),
            editor.is_editing(),
            editor.draft().clone(),
        )
    };
    let posts = dashboard.read().posts();

    rsx! {
        div { class: "container",
            h1 { "Dashboard" }
            form {
                class: "card form half",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    send(DashboardEvent::Submit);
                },
                h2 { "{heading}" }
                label { "Title"
                    input {
                        value: "{draft.title}",
                        required: true,
                        oninput: move |evt| send(DashboardEvent::Input(DraftField::Title, evt.value())),
                    }
                }
                label { "Content"
                    textarea {
                        value: "{draft.content}",
                        required: true,
                        oninput: move |evt| send(DashboardEvent::Input(DraftField::Content, evt.value())),
                    }
                }
                label { "Image URL"
                    input {
                        value: "{draft.image}",
                        required: true,
                        oninput: move |evt| send(DashboardEvent::Input(DraftField::Image, evt.value())),
                    }
                }
                label { "Tags (comma-separated)"
                    input {
                        value: "{draft.tags}",
                        required: true,
                        oninput: move |evt| send(DashboardEvent::Input(DraftField::Tags, evt.value())),
                    }
                }
                if let Some(message) = error.read().clone() {
                    p { class: "error", "{message}" }
                }
                div { class: "actions",
                    button { class: "button", r#type: "submit", "{submit_label}" }
                    if editing {
                        button {
                            class: "button outline",
                            r#type: "button",
                            onclick: move |_| send(DashboardEvent::CancelEdit),
                            "Cancel Edit"
                        }
                    }
                }
            }

            h2 { "Your Blogs" }
            div { class: "grid two",
                for post in posts {
                    div { key: "{post.id}", class: "card row",
                        div {
                            h3 { "{post.title}" }
                            p { class: "muted", "{excerpt(&post.content)}..." }
                        }
                        div { class: "actions",
                            button {
                                class: "button outline",
                                onclick: {
                                    let post = post.clone();
                                    move |_| viewing.set(Some(post.clone()))
                                },
                                "View"
                            }
                            button {
                                class: "button",
                                onclick: {
                                    let id = post.id.clone();
                                    move |_| send(DashboardEvent::Edit(id.clone()))
                                },
                                "Edit"
                            }
                            button {
                                class: "button danger",
                                onclick: {
                                    let id = post.id.clone();
                                    move |_| pending_delete.set(Some(id.clone()))
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }

            if let Some(post) = viewing.read().clone() {
                div { class: "overlay", onclick: move |_| viewing.set(None),
                    div { class: "card dialog",
                        h2 { "{post.title}" }
                        p { "{post.content}" }
                        img { class: "cover", src: "{post.image}", alt: "{post.title}" }
                        div { class: "tags",
                            for tag in post.tags.iter() {
                                span { class: "tag", "{tag}" }
                            }
                        }
                    }
                }
            }

            if let Some(id) = pending_delete.read().clone() {
                div { class: "overlay",
                    div { class: "card dialog",
                        h2 { "Are you absolutely sure?" }
                        p { "This action cannot be undone. This will permanently delete your blog post." }
                        div { class: "actions",
                            button {
                                class: "button outline",
                                onclick: move |_| pending_delete.set(None),
                                "Cancel"
                            }
                            button {
                                class: "button danger",
                                onclick: move |_| {
                                    send(DashboardEvent::Delete(id.clone()));
                                    pending_delete.set(None);
                                },
                                "Yes, delete blog"
                            }
                        }
                    }
                }
            }
        }
    }
}
