use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResetState {
    Idle,
    Resetting,
    Error(ViewError),
}

/// Confirmation dialog that wipes all stored progress.
#[component]
pub fn ResetDialog(on_cancel: EventHandler<()>, on_reset: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let mut reset_state = use_signal(|| ResetState::Idle);

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Reset all progress and scores?" }
                p { class: "modal-body",
                    "This clears every category's score and attempt count."
                }
                if let ResetState::Error(err) = reset_state() {
                    p { class: "modal-error", "{err.message()}" }
                }
                div { class: "modal-actions",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        id: "confirmReset",
                        class: "btn danger",
                        r#type: "button",
                        disabled: reset_state() == ResetState::Resetting,
                        onclick: move |_| {
                            let progress = progress.clone();
                            spawn(async move {
                                reset_state.set(ResetState::Resetting);
                                match progress.reset().await {
                                    Ok(()) => {
                                        reset_state.set(ResetState::Idle);
                                        on_reset.call(());
                                    }
                                    Err(_) => reset_state.set(ResetState::Error(ViewError::Unknown)),
                                }
                            });
                        },
                        "Reset"
                    }
                }
            }
        }
    }
}
