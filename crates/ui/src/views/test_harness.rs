use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    AppServices, Clock, LoadError, LoadFailure, ProgressService, QuizService, TrainingData,
};
use storage::repository::Storage;
use training_core::QuizSession;
use training_core::model::{Catalog, CatalogError, QuizBank};
use training_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::diagnostic::RedirectTestHandles;
use crate::views::quiz::QuizTestHandles;
use crate::views::{CatalogView, CategoryView, DataGate, HomeView, ProgressView, QuizView};
use crate::vm::QuizIntent;

pub const CATALOG_JSON: &str = r#"{
    "siteTitle": "Product Training",
    "catalog": { "name": "Spring Catalog" },
    "categories": [
        { "id": "skincare", "name": "Skincare", "tagline": "Glow daily", "range": "4-9" },
        { "id": "fragrance", "name": "Fragrance", "tagline": "Scents", "range": "10-12" }
    ],
    "subcategories": {
        "skincare": [ { "id": "cleansers", "name": "Cleansers", "pages": "4" } ]
    },
    "products": [
        { "id": "sk-1", "category": "skincare", "subcat": "cleansers", "name": "Gel Cleanser",
          "price_usd": "$12.99", "size": "150 ml", "highlights": ["gentle"],
          "notes": "Daily use", "sku": "1000123", "source_page": 4 }
    ]
}"#;

pub const QUIZZES_JSON: &str = r#"{ "quizzes": [
    { "category": "skincare", "prompt": "Which cleanser suits daily use?",
      "choices": ["None", "Gel Cleanser"], "correctIndex": 1,
      "explanation": "It is gentle.", "productRefs": ["sk-1"] },
    { "category": "skincare", "skill": "sales", "prompt": "Open with?",
      "choices": ["A question", "A price"], "correctIndex": 0 },
    { "category": "skincare", "prompt": "Size?",
      "choices": ["50 ml", "100 ml", "150 ml"], "correctIndex": 2 }
] }"#;

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn data(&self) -> Result<Arc<TrainingData>, LoadFailure> {
        self.services.data()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Category(&'static str),
    Quiz(&'static str),
    Progress,
    Catalog,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: QuizTestHandles,
    redirects: RedirectTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.quiz_handles.clone());
    use_context_provider(|| props.redirects.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let page = match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Category(cat) => rsx! { CategoryView { cat: cat.to_string() } },
        ViewKind::Quiz(cat) => rsx! { QuizView { cat: cat.to_string() } },
        ViewKind::Progress => rsx! { ProgressView {} },
        ViewKind::Catalog => rsx! { CatalogView {} },
    };
    rsx! {
        DataGate { {page} }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
    pub quiz_handles: QuizTestHandles,
    pub redirects: RedirectTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Dispatch a quiz intent as a button press would, then settle the dom.
    pub async fn quiz(&mut self, intent: QuizIntent) {
        let dispatch = self.quiz_handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn quiz_session(&self) -> Option<QuizSession> {
        let session = self.quiz_handles.session();
        self.dom.in_runtime(|| session.peek().as_ref().cloned())
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn training_data() -> TrainingData {
    TrainingData {
        catalog: serde_json::from_str::<Catalog>(CATALOG_JSON).expect("catalog fixture"),
        quizzes: serde_json::from_str::<QuizBank>(QUIZZES_JSON).expect("quizzes fixture"),
    }
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_data(view, Storage::in_memory(), Ok(training_data()))
}

/// Harness over caller-provided storage, e.g. a repository that always fails.
pub fn setup_view_harness_with_storage(view: ViewKind, storage: Storage) -> ViewHarness {
    setup_view_harness_with_data(view, storage, Ok(training_data()))
}

/// Harness whose boot-time load failed because the catalog was empty.
pub fn setup_failed_view_harness(view: ViewKind) -> ViewHarness {
    let err = LoadError::Invalid {
        resource: "catalog.json",
        source: CatalogError::NoCategories.into(),
    };
    setup_view_harness_with_data(view, Storage::in_memory(), Err(err))
}

fn setup_view_harness_with_data(
    view: ViewKind,
    storage: Storage,
    data: Result<TrainingData, LoadError>,
) -> ViewHarness {
    let services = AppServices::from_parts(Clock::fixed(fixed_now()), &storage, data);
    let app = Arc::new(TestApp {
        services: services.clone(),
    });
    let quiz_handles = QuizTestHandles::default();
    let redirects = RedirectTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
            redirects: redirects.clone(),
        },
    );
    ViewHarness {
        dom,
        services,
        quiz_handles,
        redirects,
    }
}
