use blog_core::{
    Catalog, Dashboard, DashboardEvent, DashboardOutcome, Draft, DraftField, IdGenerator,
    InMemoryPostRepository, Lookup, PostId, PostRepository, PostService, SequentialIdGenerator,
};

fn empty_dashboard() -> Dashboard<InMemoryPostRepository, SequentialIdGenerator> {
    Dashboard::new(PostService::with_ids(
        InMemoryPostRepository::new(),
        SequentialIdGenerator::starting_at(1),
    ))
}

fn fill<R: PostRepository, G: IdGenerator>(dashboard: &mut Dashboard<R, G>, draft: Draft) {
    for field in DraftField::ALL {
        dashboard
            .dispatch(DashboardEvent::Input(field, draft.field(field).to_string()))
            .unwrap();
    }
}

#[test]
fn create_update_delete_round() {
    let mut dashboard = empty_dashboard();

    fill(&mut dashboard, Draft::new("A", "c", "i", "x,y"));
    let created = match dashboard.dispatch(DashboardEvent::Submit).unwrap() {
        DashboardOutcome::Created(post) => post,
        other => panic!("unexpected outcome {other:?}"),
    };
    let posts = dashboard.posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].tags, vec!["x", "y"]);
    assert!(dashboard.editor().draft().is_empty());

    dashboard
        .dispatch(DashboardEvent::Edit(created.id.clone()))
        .unwrap();
    dashboard
        .dispatch(DashboardEvent::Input(DraftField::Title, "B".into()))
        .unwrap();
    let outcome = dashboard.dispatch(DashboardEvent::Submit).unwrap();
    assert_eq!(
        outcome,
        DashboardOutcome::Updated {
            id: created.id.clone(),
            matched: true
        }
    );
    let posts = dashboard.posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, created.id);
    assert_eq!(posts[0].title, "B");
    assert_eq!(posts[0].tags, vec!["x", "y"]);

    dashboard
        .dispatch(DashboardEvent::Delete(created.id.clone()))
        .unwrap();
    assert!(dashboard.posts().is_empty());
}

#[test]
fn update_in_the_middle_keeps_order() {
    let mut dashboard = empty_dashboard();
    for title in ["one", "two", "three"] {
        fill(&mut dashboard, Draft::new(title, "c", "i", "t"));
        dashboard.dispatch(DashboardEvent::Submit).unwrap();
    }

    let middle = dashboard.posts()[1].id.clone();
    dashboard.dispatch(DashboardEvent::Edit(middle.clone())).unwrap();
    dashboard
        .dispatch(DashboardEvent::Input(DraftField::Tags, " a , b ".into()))
        .unwrap();
    dashboard.dispatch(DashboardEvent::Submit).unwrap();

    let posts = dashboard.posts();
    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
    assert_eq!(posts[1].id, middle);
    assert_eq!(posts[1].tags, vec!["a", "b"]);
}

#[test]
fn delete_keeps_relative_order_of_the_rest() {
    let mut dashboard = Dashboard::seeded();
    fill(&mut dashboard, Draft::new("third", "c", "i", "t"));
    dashboard.dispatch(DashboardEvent::Submit).unwrap();

    let first = dashboard.posts()[0].id.clone();
    let outcome = dashboard.dispatch(DashboardEvent::Delete(first.clone())).unwrap();
    assert_eq!(
        outcome,
        DashboardOutcome::Deleted {
            id: first,
            matched: true
        }
    );
    let titles: Vec<_> = dashboard.posts().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["The Power of Next.js", "third"]);
}

#[test]
fn dashboard_posts_never_reach_the_public_pages() {
    let mut dashboard = Dashboard::seeded();
    let catalog = Catalog::sample();

    fill(&mut dashboard, Draft::new("Draft only", "c", "i", "t"));
    let created = match dashboard.dispatch(DashboardEvent::Submit).unwrap() {
        DashboardOutcome::Created(post) => post,
        other => panic!("unexpected outcome {other:?}"),
    };
    assert_eq!(dashboard.posts().len(), 3);
    assert_eq!(
        catalog.find_by_id(&created.id),
        Lookup::NotFound(created.id.clone())
    );
    assert!(
        catalog
            .list_summaries()
            .iter()
            .all(|summary| summary.id != created.id)
    );

    let first = PostId::from("1");
    dashboard.dispatch(DashboardEvent::Edit(first.clone())).unwrap();
    dashboard
        .dispatch(DashboardEvent::Input(DraftField::Title, "Renamed".into()))
        .unwrap();
    dashboard.dispatch(DashboardEvent::Submit).unwrap();
    assert_eq!(dashboard.posts()[0].title, "Renamed");
    assert_eq!(
        catalog.list_summaries()[0].title,
        "Getting Started with React"
    );
    match catalog.find_by_id(&first) {
        Lookup::Found(post) => assert_eq!(
            post.title,
            "Getting Started with React: A Comprehensive Guide for Beginners"
        ),
        other => panic!("unexpected lookup {other:?}"),
    }
}
