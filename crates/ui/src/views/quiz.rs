use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use quiz_core::Animal;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::result::ResultCard;
use crate::vm::{QuestionVm, QuizScreenVm};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal({
        let ctx = ctx.clone();
        move || ctx.new_quiz()
    });
    let shuffler = use_hook(move || Rc::new(RefCell::new(ctx.new_shuffler())));
    let mut error = use_signal(|| None::<ViewError>);

    // Options are reshuffled on every render, not once per question.
    let screen = {
        let mut shuffler = shuffler.borrow_mut();
        vm.read().screen(&mut shuffler)
    };

    rsx! {
        div { class: "page quiz-page",
            if let Some(err) = error() {
                p { class: "view-error", "{err.message()}" }
            }
            match screen {
                Ok(QuizScreenVm::Question(question)) => rsx! {
                    QuestionCard {
                        question,
                        on_answer: move |category: Animal| {
                            match vm.write().answer(category) {
                                Ok(_) => error.set(None),
                                Err(err) => error.set(Some(err)),
                            }
                        },
                    }
                },
                Ok(QuizScreenVm::Result(result)) => rsx! {
                    ResultCard {
                        result,
                        on_retake: move |()| {
                            vm.write().reset();
                            error.set(None);
                        },
                    }
                },
                Err(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            vm.write().reset();
                            error.set(None);
                        },
                        "Start over"
                    }
                },
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, on_answer: EventHandler<Animal>) -> Element {
    let buttons = question.options.iter().enumerate().map(|(idx, option)| {
        let category = option.category;
        rsx! {
            button {
                key: "{idx}",
                class: "btn btn-secondary answer",
                r#type: "button",
                onclick: move |_| on_answer.call(category),
                "{option.text}"
            }
        }
    });

    rsx! {
        div { class: "question",
            p { class: "question-progress", "{question.progress_label}" }
            h2 { class: "question-prompt", "{question.prompt}" }
            div { class: "answers", {buttons} }
        }
    }
}
