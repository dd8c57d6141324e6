use serde::Deserialize;
use slidekit_carousel_core::{
    Carousel, CarouselCommand, CarouselConfig, Inputs, RecordingSurface, SlideExtent,
};

#[derive(Debug, Deserialize)]
struct Deck {
    slides: usize,
    #[serde(default)]
    config: CarouselConfig,
    extent: SlideExtent,
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct Step {
    dt_ms: u32,
    #[serde(default)]
    commands: Vec<CarouselCommand>,
    expect: Expect,
}

#[derive(Debug, Deserialize)]
struct Expect {
    current_index: usize,
    active: usize,
    transitioning: bool,
}

fn run_deck(name: &str) {
    let deck: Deck = slidekit_test_fixtures::decks::load(name).expect("deck fixture");
    let mut carousel = Carousel::new(
        deck.slides,
        deck.config,
        RecordingSurface::new(deck.extent),
    )
    .expect("deck config is valid");

    for (i, step) in deck.steps.into_iter().enumerate() {
        carousel.update(
            step.dt_ms,
            Inputs {
                commands: step.commands,
            },
        );
        assert_eq!(
            carousel.current_index(),
            step.expect.current_index,
            "{name} step {i}: current_index"
        );
        assert_eq!(
            carousel.active_original_index(),
            step.expect.active,
            "{name} step {i}: active"
        );
        assert_eq!(
            carousel.is_transitioning(),
            step.expect.transitioning,
            "{name} step {i}: transitioning"
        );
        let active_dots = carousel.dots().iter().filter(|d| d.active).count();
        assert_eq!(active_dots, 1, "{name} step {i}: exactly one active dot");
    }
}

#[test]
fn five_wide_loops_both_ways() {
    run_deck("five-wide");
}

#[test]
fn four_cards_jump_and_reject() {
    run_deck("four-cards-jump");
}

#[test]
fn single_slide_teleports_in_place() {
    run_deck("single-slide");
}

#[test]
fn every_deck_fixture_runs() {
    for key in slidekit_test_fixtures::decks::keys() {
        run_deck(&key);
    }
}
