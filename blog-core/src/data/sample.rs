//! Compiled-in sample content. The dashboard seed, the home listing and the
//! detail page each get their own copy; nothing here is shared state.

use chrono::NaiveDate;

use crate::domain::post::{Author, Post, PostId, PostMeta};

const CARD_IMAGE: &str = "/placeholder.svg?height=200&width=300";
const HERO_IMAGE: &str = "/placeholder.svg?height=400&width=800";
const AVATAR_IMAGE: &str = "/placeholder.svg?height=100&width=100";

const REACT_GUIDE: &str = "React is a popular JavaScript library for building user interfaces. It allows developers to create reusable UI components and manage the state of their applications efficiently. In this blog post, we'll cover the basics of React and how to set up your first React project.

First, let's understand what React is and why it's so popular. React was developed by Facebook and is now used by many large companies and small startups alike. Its component-based architecture makes it easy to build complex UIs from small, isolated pieces of code.

To get started with React, you'll need to have Node.js installed on your computer. Once you have Node.js, you can use create-react-app, a tool that sets up a new React project with a single command. Here's how you can do it:

1. Open your terminal
2. Run the following command: npx create-react-app my-first-react-app
3. Once the installation is complete, navigate to your project folder: cd my-first-react-app
4. Start your development server: npm start

Congratulations! You've just created your first React application. The create-react-app tool sets up a development environment with everything you need to start building React applications.

In the next part of this series, we'll dive deeper into React components, state management, and how to structure your React applications for scalability and maintainability. Stay tuned!";

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

fn short_posts() -> Vec<Post> {
    vec![
        Post::new(
            PostId::from("1"),
            "Getting Started with React".into(),
            "React is a popular JavaScript library for building user interfaces...".into(),
            CARD_IMAGE.into(),
            tags(&["React", "JavaScript", "Web Development"]),
        ),
        Post::new(
            PostId::from("2"),
            "The Power of Next.js".into(),
            "Next.js is a React framework that enables server-side rendering...".into(),
            CARD_IMAGE.into(),
            tags(&["Next.js", "React", "SSR"]),
        ),
    ]
}

/// Posts the dashboard starts with.
pub fn dashboard_seed() -> Vec<Post> {
    short_posts()
}

/// Cards shown under "Recent Blog Posts" on the home page.
pub fn recent_posts() -> Vec<Post> {
    short_posts()
}

/// Full articles resolvable from `/blog/:id`. Only post "1" exists here.
pub fn published_posts() -> Vec<Post> {
    let publish_date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap_or(NaiveDate::MIN);

    vec![
        Post::new(
            PostId::from("1"),
            "Getting Started with React: A Comprehensive Guide for Beginners".into(),
            REACT_GUIDE.into(),
            HERO_IMAGE.into(),
            tags(&["React", "JavaScript", "Web Development", "Frontend"]),
        )
        .with_meta(PostMeta {
            author: Author {
                name: "Jane Doe".into(),
                avatar: AVATAR_IMAGE.into(),
            },
            publish_date,
            reading_time: 5,
        }),
    ]
}
