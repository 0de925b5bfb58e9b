use assert_cmd::Command;
use predicates::prelude::*;

fn blog() -> Command {
    let mut cmd = Command::cargo_bin("blog-cli").unwrap();
    cmd.env("RUST_LOG", "off").env_remove("BLOG_SEED");
    cmd
}

#[test]
fn home_lists_recent_posts_with_excerpts() {
    blog()
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recent Blog Posts"))
        .stdout(predicate::str::contains("Getting Started with React"))
        .stdout(predicate::str::contains(
            "Next.js is a React framework that enables server-side rendering......",
        ))
        .stdout(predicate::str::contains("Read more: /blog/2"));
}

#[test]
fn show_renders_the_full_article() {
    blog()
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 min read"))
        .stdout(predicate::str::contains("By Jane Doe"))
        .stdout(predicate::str::contains("Back to All Posts: /"));
}

#[test]
fn show_of_unknown_post_renders_not_found_page() {
    blog()
        .args(["open", "/blog/2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blog post not found"))
        .stdout(predicate::str::contains("Return to Home: /"));
}

#[test]
fn json_output_for_articles() {
    blog()
        .args(["--json", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"reading_time\": 5"));
}

#[test]
fn unknown_route_fails() {
    blog()
        .args(["open", "/admin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no page at `/admin`"));
}

#[test]
fn dashboard_session_on_stdin() {
    blog()
        .arg("dashboard")
        .env("BLOG_SEED", "empty")
        .write_stdin(
            "set title Hello\nset content World\nset image /h.svg\nset tags a, b\nsubmit\nlist\nquit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("added ["))
        .stdout(predicate::str::contains("] Hello"))
        .stdout(predicate::str::contains("World..."));
}

#[test]
fn dashboard_page_starts_from_the_sample_posts() {
    blog()
        .args(["open", "/dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Add New Blog"))
        .stdout(predicate::str::contains("[2] The Power of Next.js"));
}

#[test]
fn json_flag_is_not_accepted_by_the_dashboard_session() {
    blog()
        .args(["dashboard", "--json"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--json"));
}
