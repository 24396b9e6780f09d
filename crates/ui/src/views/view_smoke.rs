use dsa_core::model::{Difficulty, DifficultyFilter};

use super::test_harness::setup_dashboard_harness;

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_fresh_catalog_and_seeds_slot() {
    let harness = setup_dashboard_harness(None, None).await;
    let html = harness.render();

    assert!(html.contains("DSA Explorer"), "missing title in {html}");
    assert!(html.contains("Hashing"), "missing category in {html}");
    assert!(html.contains("(0/2)"), "missing badge in {html}");
    assert!(html.contains("Overall Completion: 0.0%"), "missing overall in {html}");
    assert!(html.contains("An interactive guide to the DSA problem list."));
    assert!(html.contains("Two Sum"), "missing problem in {html}");
    assert!(html.contains("No profile URL saved yet."), "missing profile in {html}");
    assert!(!html.contains("Curated Hard Problems"), "unexpected hard list in {html}");

    let saved = harness.saved_progress().await.expect("seeded snapshot");
    assert!(saved.contains("\"category\":\"Stack\""), "unexpected snapshot {saved}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_restores_persisted_progress() {
    let progress = r#"[{"category":"Arrays & Hashing","problems":[
        {"name":"Two Sum","completed":true,"explanation":"Use a map."},
        {"name":"Removed Problem","completed":true}
    ]}]"#;
    let harness =
        setup_dashboard_harness(Some(progress), Some("\"https://leetcode.com/u/ada/\"")).await;
    let html = harness.render();

    assert!(html.contains("(1/2)"), "missing badge in {html}");
    assert!(html.contains("Overall Completion: 25.0%"), "missing overall in {html}");
    assert!(html.contains("problem-name--done"), "missing strike-through in {html}");
    assert!(html.contains("Saved Profile:"), "missing saved profile in {html}");
    assert!(html.contains("https://leetcode.com/u/ada/"), "missing link in {html}");

    let store = harness.store();
    let two_sum = store
        .category("Arrays & Hashing")
        .and_then(|category| category.problem("Two Sum"))
        .expect("two sum");
    assert_eq!(two_sum.explanation(), Some("Use a map."));
}

#[tokio::test(flavor = "current_thread")]
async fn toggle_updates_badge_and_persists() {
    let mut harness = setup_dashboard_harness(None, None).await;

    harness.dispatch(|actions| actions.toggle.call(("Two Sum".to_string(), true)));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("(1/2)"), "missing badge in {html}");
    assert!(html.contains("Overall Completion: 25.0%"), "missing overall in {html}");

    let saved = harness.saved_progress().await.expect("saved snapshot");
    assert!(
        saved.contains(r#"{"name":"Two Sum","difficulty":"Easy","completed":true"#),
        "toggle not persisted in {saved}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn filter_and_category_switch() {
    let mut harness = setup_dashboard_harness(None, None).await;

    harness.dispatch(|actions| {
        actions
            .filter
            .call(DifficultyFilter::Only(Difficulty::Hard));
    });
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("No problems found for this filter."),
        "missing empty state in {html}"
    );

    harness.dispatch(|actions| actions.select.call("Stack".to_string()));
    harness.settle().await;
    let store = harness.store();
    assert_eq!(store.active_category_name(), "Stack");
    assert_eq!(store.active_filter(), DifficultyFilter::All);

    let html = harness.render();
    assert!(html.contains("Valid Parentheses"), "missing easy row in {html}");
    assert!(html.contains("Curated Hard Problems"), "missing hard list in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn explain_fetches_once_then_toggles() {
    let mut harness = setup_dashboard_harness(None, None).await;

    harness.dispatch(|actions| actions.explain.call("Two Sum".to_string()));
    harness.settle().await;

    assert_eq!(harness.generator.calls(), 1);
    let html = harness.render();
    assert!(
        html.contains("<strong>complements</strong>"),
        "missing explanation in {html}"
    );
    let saved = harness.saved_progress().await.expect("saved snapshot");
    assert!(saved.contains("hash map"), "explanation not persisted in {saved}");

    harness.dispatch(|actions| actions.explain.call("Two Sum".to_string()));
    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("<strong>complements</strong>"), "still visible in {html}");

    harness.dispatch(|actions| actions.explain.call("Two Sum".to_string()));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("<strong>complements</strong>"), "not shown again in {html}");
    assert_eq!(harness.generator.calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn toggle_outside_active_category_is_ignored() {
    let mut harness = setup_dashboard_harness(None, None).await;

    harness.dispatch(|actions| actions.toggle.call(("Valid Parentheses".to_string(), true)));
    harness.settle().await;

    let store = harness.store();
    let problem = store
        .category("Stack")
        .and_then(|category| category.problem("Valid Parentheses"))
        .expect("valid parentheses");
    assert!(!problem.completed());
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("missing {needle} in {html}"))
}

#[tokio::test(flavor = "current_thread")]
async fn rows_follow_catalog_order_across_switches() {
    let mut harness = setup_dashboard_harness(None, None).await;

    harness.dispatch(|actions| {
        actions
            .filter
            .call(DifficultyFilter::Only(Difficulty::Medium));
    });
    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("Two Sum"), "filtered row still shown in {html}");

    harness.dispatch(|actions| actions.filter.call(DifficultyFilter::All));
    harness.settle().await;
    let html = harness.render();
    assert!(position(&html, "Two Sum") < position(&html, "Group Anagrams"));
    assert_eq!(html.matches("Group Anagrams").count(), 1, "duplicated row in {html}");

    harness.dispatch(|actions| actions.select.call("Stack".to_string()));
    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("Group Anagrams"), "stale row in {html}");
    let list = &html[position(&html, "problem-list")..];
    assert!(position(list, "Valid Parentheses") < position(list, "Largest Rectangle in Histogram"));
    let hard = &html[position(&html, "hard-list-rows")..];
    assert_eq!(hard.matches("Largest Rectangle in Histogram").count(), 1);
}
