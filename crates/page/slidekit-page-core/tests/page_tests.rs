use serde::Deserialize;
use slidekit_page_core::{
    Page, PageConfig, Section, Typewriter, TypewriterConfig, TypewriterState,
};

#[derive(Debug, Deserialize)]
struct CompanyPage {
    nav_height: f32,
    sections: Vec<Section>,
    phrases: Vec<String>,
}

fn company() -> CompanyPage {
    slidekit_test_fixtures::pages::load("company").expect("page fixture")
}

#[test]
fn scroll_spy_tracks_sections_with_navbar_offset() {
    let fx = company();
    let mut page = Page::new(PageConfig::default(), fx.sections);

    let frame = page.on_scroll(0.0, Some(fx.nav_height), Some(900.0));
    assert_eq!(frame.active_section.as_deref(), Some("home"));
    assert!(frame.chrome.home_active);
    assert!(!frame.chrome.navbar_scrolled);

    let frame = page.on_scroll(720.0 - fx.nav_height, Some(fx.nav_height), Some(70.0));
    assert_eq!(frame.active_section.as_deref(), Some("about"));
    assert!(frame.chrome.navbar_scrolled);
    assert!(frame.chrome.scroll_top_visible);
    assert!(!frame.chrome.home_active);

    let frame = page.on_scroll(5000.0, None, None);
    assert_eq!(frame.active_section.as_deref(), Some("contact"));
}

#[test]
fn nav_link_scrolls_to_section_and_closes_menu() {
    let fx = company();
    let mut page = Page::new(PageConfig::default(), fx.sections);
    page.toggle_menu();
    assert!(page.menu().is_open());

    assert!(page.follow_link("#services", 0.0, Some(fx.nav_height)));
    assert!(!page.menu().is_open());
    assert!(page.is_scrolling());

    // Spy holds its answer while the scripted scroll runs.
    let before = page.on_scroll(0.0, Some(fx.nav_height), None).active_section;
    let mut last = 0.0;
    while let Some(y) = page.tick(16) {
        assert!(y >= last);
        last = y;
        let during = page.on_scroll(y, Some(fx.nav_height), None).active_section;
        if page.is_scrolling() {
            assert_eq!(during, before);
        }
    }
    assert_eq!(last, 1480.0 - fx.nav_height);
    let after = page.on_scroll(last, Some(fx.nav_height), None);
    assert_eq!(after.active_section.as_deref(), Some("services"));
}

#[test]
fn external_links_only_close_the_menu() {
    let mut page = Page::new(PageConfig::default(), company().sections);
    page.toggle_menu();
    assert!(!page.follow_link("https://example.com/careers", 0.0, None));
    assert!(!page.follow_link("#missing", 0.0, None));
    assert!(!page.menu().is_open());
    assert!(!page.is_scrolling());
}

#[test]
fn detail_link_centers_its_target() {
    let mut page = Page::new(PageConfig::default(), company().sections);
    page.toggle_menu();
    assert!(page.scroll_into_center(0.0, 2000.0, 300.0, 900.0));
    assert!(page.menu().is_open());
    assert!(!page.scroll_into_center(0.0, 100.0, 300.0, 900.0));

    let mut last = None;
    while let Some(y) = page.tick(50) {
        last = Some(y);
    }
    assert_eq!(last, Some(1700.0));
}

#[test]
fn scroll_to_top_refuses_overlap() {
    let mut page = Page::new(PageConfig::default(), company().sections);
    assert!(page.scroll_to_top(2400.0));
    assert!(!page.scroll_to_top(1200.0));
    let mut last = None;
    while let Some(y) = page.tick(100) {
        last = Some(y);
    }
    assert_eq!(last, Some(0.0));
}

#[test]
fn typewriter_cycles_through_phrases() {
    let phrases = vec!["ab".to_string(), "c".to_string()];
    let mut tw = Typewriter::new(phrases, TypewriterConfig::default()).unwrap();
    tw.start();

    assert_eq!(tw.update(100).text, "a");
    assert_eq!(tw.update(100).text, "ab");
    assert!(!tw.frame().blinking);

    // One more tick notices the end of the phrase and starts the hold.
    tw.update(100);
    assert_eq!(tw.state(), TypewriterState::Holding);
    assert!(tw.frame().blinking);

    tw.update(1500);
    assert_eq!(tw.state(), TypewriterState::Deleting);
    assert!(!tw.frame().blinking);

    assert_eq!(tw.update(50).text, "a");
    assert_eq!(tw.update(50).text, "");
    tw.update(50);
    assert_eq!(tw.state(), TypewriterState::Resting);

    let frame = tw.update(500 + 100).clone();
    assert_eq!(frame.phrase_index, 1);
    assert_eq!(frame.text, "c");
}

#[test]
fn typewriter_wraps_to_first_phrase() {
    let fx = company();
    let count = fx.phrases.len();
    let mut tw = Typewriter::new(fx.phrases.clone(), TypewriterConfig::default()).unwrap();
    tw.on_visibility(0.5);

    let mut seen = vec![false; count];
    // Large steps exercise multi-step catch-up within one update.
    for _ in 0..400 {
        let frame = tw.update(250);
        seen[frame.phrase_index] = true;
        assert!(fx.phrases[frame.phrase_index].starts_with(&frame.text));
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn reveal_uses_page_threshold() {
    let page = Page::new(PageConfig::default(), Vec::new());
    let mut card = page.reveal_tracker(false);
    assert!(!card.observe(0.04));
    assert!(card.observe(0.06));
    assert!(card.is_shown());
}
