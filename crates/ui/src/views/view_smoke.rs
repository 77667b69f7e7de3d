use std::sync::Arc;

use quiz_core::{Animal, Answer, Question, QuestionBank};
use services::Shuffler;

use super::test_harness::{setup_quiz_harness, setup_result_harness, test_share_settings};
use crate::vm::{QuizScreenVm, QuizVm};

#[test]
fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_quiz_harness(QuestionBank::reference());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("favorite way to spend a weekend"), "missing prompt in {html}");
    assert!(html.contains("Question 1 of 5"), "missing progress in {html}");
    for option in [
        "Reading a book in a cozy corner",
        "Going for a long hike",
        "Playing with friends at the park",
        "Exploring a new city",
        "Staying home and watching a movie",
    ] {
        assert!(html.contains(option), "missing {option} in {html}");
    }
}

#[test]
fn quiz_view_smoke_uses_injected_bank() {
    let bank = QuestionBank::new(vec![
        Question::new(
            "Sunrise or sunset?",
            vec![Answer::new("Sunrise", Animal::Horse), Answer::new("Sunset", Animal::Cat)],
        )
        .unwrap(),
    ])
    .unwrap();
    let mut harness = setup_quiz_harness(bank);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Sunrise or sunset?"), "missing prompt in {html}");
    assert!(html.contains("Question 1 of 1"), "missing progress in {html}");
}

#[test]
fn result_card_smoke_renders_result_and_actions() {
    let mut vm = QuizVm::new(Arc::new(QuestionBank::reference()), test_share_settings());
    for category in [Animal::Cat, Animal::Cat, Animal::Dog, Animal::Cat, Animal::Fox] {
        vm.answer(category).unwrap();
    }
    let QuizScreenVm::Result(result) = vm.screen(&mut Shuffler::seeded(1)).unwrap() else {
        panic!("expected result screen");
    };

    let mut harness = setup_result_harness(result);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("You are a cat!"), "missing headline in {html}");
    assert!(html.contains("/cat.png"), "missing image in {html}");
    assert!(html.contains("Retake Quiz"), "missing retake in {html}");
    assert!(html.contains("Share"), "missing share in {html}");
    assert!(
        html.contains("https://warpcast.com/~/compose?text="),
        "missing share link in {html}"
    );
}
