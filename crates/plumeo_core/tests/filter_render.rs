use plumeo_core::{
    filter_by_genre, filter_by_text, render_reading_list, render_stories, Catalog, LikeCounter,
    ReadingList, SaveLabel, Story, StoryFilter, EMPTY_READING_LIST_MESSAGE, NO_RESULTS_MESSAGE,
};

fn titles(stories: &[&Story]) -> Vec<String> {
    stories.iter().map(|story| story.title.clone()).collect()
}

fn saved(ids: &[&str]) -> ReadingList {
    ids.iter().map(|id| id.to_string()).collect()
}

#[test]
fn empty_query_returns_catalog_in_original_order() {
    let catalog = Catalog::sample();
    let all = filter_by_text(&catalog, "");
    let expected: Vec<&Story> = catalog.stories().iter().collect();
    assert_eq!(all, expected);
}

#[test]
fn text_query_is_case_insensitive() {
    let catalog = Catalog::sample();
    assert_eq!(
        titles(&filter_by_text(&catalog, "ROMANCE")),
        vec!["Moonlight Sonata", "Starlit Promises"]
    );
}

#[test]
fn text_query_matches_title_author_or_genre() {
    let catalog = Catalog::sample();
    assert_eq!(titles(&filter_by_text(&catalog, "orchard")), vec!["Glass Orchard"]);
    assert_eq!(titles(&filter_by_text(&catalog, "z. noor")), vec!["Paper Wings"]);
    assert_eq!(titles(&filter_by_text(&catalog, "drama")), vec!["The Second Chapter"]);
    // "a" appears everywhere: order must stay the catalog order.
    assert_eq!(filter_by_text(&catalog, "a").len(), 6);
}

#[test]
fn text_query_does_not_search_excerpts() {
    let catalog = Catalog::sample();
    assert!(filter_by_text(&catalog, "secret letter").is_empty());
}

#[test]
fn genre_filter_matches_exactly() {
    let catalog = Catalog::sample();
    assert_eq!(
        titles(&filter_by_genre(&catalog, "Romance")),
        vec!["Moonlight Sonata", "Starlit Promises"]
    );
    assert!(filter_by_genre(&catalog, "Roman").is_empty());
}

#[test]
fn story_filter_dispatches_to_the_right_matcher() {
    let catalog = Catalog::sample();
    assert_eq!(
        titles(&StoryFilter::Genre("Fantasy".to_string()).apply(&catalog)),
        vec!["Paper Wings"]
    );
    assert_eq!(
        titles(&StoryFilter::Text("dawn".to_string()).apply(&catalog)),
        vec!["Cafe at Dawn"]
    );
}

#[test]
fn cards_carry_thumb_likes_and_save_label() {
    let catalog = Catalog::sample();
    let mut likes = LikeCounter::seeded(&catalog);
    likes.increment("s1");

    let stories = filter_by_genre(&catalog, "Romance");
    let view = render_stories(&stories, &saved(&["s4"]), &likes);

    assert_eq!(view.cards.len(), 2);
    let first = &view.cards[0];
    assert_eq!(first.story_id, "s1");
    assert_eq!(first.thumb, "MS");
    assert_eq!(first.likes, 49);
    assert_eq!(first.save_label, SaveLabel::Save);
    assert_eq!(view.cards[1].save_label, SaveLabel::Saved);
    assert_eq!(view.cards[1].save_label.as_str(), "Saved");
}

#[test]
fn no_matches_yield_explicit_empty_state() {
    let catalog = Catalog::sample();
    let likes = LikeCounter::seeded(&catalog);

    let stories = filter_by_text(&catalog, "zzz-no-such-story");
    let view = render_stories(&stories, &ReadingList::new(), &likes);
    assert!(view.cards.is_empty());
    assert_eq!(view.empty_message, Some(NO_RESULTS_MESSAGE));
}

#[test]
fn reading_list_view_uses_catalog_order_and_skips_stale_ids() {
    let catalog = Catalog::sample();
    let likes = LikeCounter::seeded(&catalog);

    let view = render_reading_list(&catalog, &saved(&["s5", "deleted", "s2"]), &likes);
    let ids: Vec<&str> = view.cards.iter().map(|card| card.story_id.as_str()).collect();
    assert_eq!(ids, vec!["s2", "s5"]);
    assert!(view.cards.iter().all(|card| card.save_label == SaveLabel::Saved));
    assert_eq!(view.empty_message, None);
}

#[test]
fn empty_reading_list_shows_message() {
    let catalog = Catalog::sample();
    let likes = LikeCounter::seeded(&catalog);

    let view = render_reading_list(&catalog, &ReadingList::new(), &likes);
    assert_eq!(view.empty_message, Some(EMPTY_READING_LIST_MESSAGE));
}
