use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::{Animal, QuestionBank, ShareIntent, ShareSettings, SiteUrl};

use crate::context::{UiApp, build_app_context};
use crate::views::{QuizView, ResultCard};
use crate::vm::ResultVm;

pub const TEST_SITE_URL: &str = "https://quiz.example.com";

#[derive(Clone)]
pub struct TestApp {
    bank: Arc<QuestionBank<Animal>>,
    seed: Option<u64>,
}

impl TestApp {
    pub fn new(bank: QuestionBank<Animal>) -> Self {
        Self {
            bank: Arc::new(bank),
            seed: Some(17),
        }
    }
}

pub fn test_share_settings() -> ShareSettings {
    ShareSettings::new(
        SiteUrl::parse(TEST_SITE_URL).expect("valid site url"),
        ShareIntent::parse("https://warpcast.com/~/compose").expect("valid share base"),
    )
}

impl UiApp for TestApp {
    fn question_bank(&self) -> Arc<QuestionBank<Animal>> {
        Arc::clone(&self.bank)
    }

    fn share_settings(&self) -> ShareSettings {
        test_share_settings()
    }

    fn shuffle_seed(&self) -> Option<u64> {
        self.seed
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

#[derive(Props, Clone, PartialEq)]
struct ResultHarnessProps {
    result: ResultVm,
}

#[component]
fn ResultHarness(props: ResultHarnessProps) -> Element {
    rsx! {
        ResultCard { result: props.result.clone(), on_retake: move |()| {} }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness(bank: QuestionBank<Animal>) -> ViewHarness {
    let app = Arc::new(TestApp::new(bank));
    ViewHarness {
        dom: VirtualDom::new_with_props(QuizHarness, QuizHarnessProps { app }),
    }
}

pub fn setup_result_harness(result: ResultVm) -> ViewHarness {
    ViewHarness {
        dom: VirtualDom::new_with_props(ResultHarness, ResultHarnessProps { result }),
    }
}
