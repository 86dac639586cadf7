use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::{CATALOG_PATH, QUIZZES_PATH};

use crate::context::AppContext;
use crate::routes::Route;

/// Renders its children only when the boot-time data load succeeded.
///
/// This is the single place the diagnostic panel is mounted.
#[component]
pub fn DataGate(children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    match ctx.data() {
        Ok(_) => rsx! { {children} },
        Err(failure) => rsx! {
            DiagnosticPanel { message: failure.message }
        },
    }
}

#[component]
pub fn DiagnosticPanel(message: String) -> Element {
    rsx! {
        div { id: "dataLoadError", class: "card diagnostic",
            h2 { "Data failed to load" }
            p { "This app loads categories, products, and quizzes from:" }
            ul {
                li { code { "{CATALOG_PATH}" } }
                li { code { "{QUIZZES_PATH}" } }
            }
            p {
                "Fix: confirm those files exist at the exact path (case-sensitive) "
                "under the configured data location, then restart."
            }
            p { class: "muted",
                "Technical details: "
                code { "{message}" }
            }
        }
    }
}

/// Sends the learner home when a page is opened without a usable `cat`.
#[component]
pub fn RedirectHome() -> Element {
    let navigator = use_navigator();
    #[cfg(test)]
    let redirects = try_consume_context::<RedirectTestHandles>();
    use_effect(move || {
        let _ = navigator.replace(Route::Home {});
        #[cfg(test)]
        {
            if let Some(redirects) = redirects.as_ref() {
                redirects.record();
            }
        }
    });
    rsx! {}
}

/// Counts redirects so tests can observe them; the test router has a single route.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct RedirectTestHandles {
    count: std::rc::Rc<std::cell::Cell<usize>>,
}

#[cfg(test)]
impl RedirectTestHandles {
    fn record(&self) {
        self.count.set(self.count.get() + 1);
    }

    pub(crate) fn count(&self) -> usize {
        self.count.get()
    }
}
