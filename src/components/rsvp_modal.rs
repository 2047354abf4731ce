//! RSVP modal - attendance confirmation form.
//!
//! The form state lives in a core `RsvpForm`; this component renders it and
//! drives the submission through the shared `RsvpClient`. Success clears
//! the draft and closes the overlay; a dispatch failure keeps the draft
//! intact and shows a retry-able error.

use dioxus::prelude::*;
use redthread_core::{GuestCount, RsvpForm, SubmitPhase};

use crate::context::use_rsvp_client;

#[component]
pub fn RsvpModal(
    /// Whether the overlay is visible
    show: bool,
    /// Callback when the overlay should close
    on_close: EventHandler<()>,
) -> Element {
    let mut form = use_signal(RsvpForm::new);
    let client = use_rsvp_client();

    // Closing discards the draft; reopening starts from an empty one
    use_effect(move || {
        if !show {
            form.write().reset();
        }
    });

    let submit = move |_| {
        let Some(payload) = form.write().begin_submit() else {
            return;
        };

        spawn(async move {
            // Clone out of the signal so no borrow lives across the await
            let rsvp_client = client.read().clone();
            let outcome = rsvp_client.dispatch(&payload).await;
            let dispatched = outcome.is_ok();
            form.write().resolve_submit(outcome);
            if dispatched {
                on_close.call(());
            }
        });
    };

    let handle_close = move |_| {
        form.write().reset();
        on_close.call(());
    };

    if !show {
        return rsx! {};
    }

    let draft = form.read().draft().clone();
    let phase = form.read().phase();
    let pending = phase == SubmitPhase::Pending;
    let can_submit = form.read().can_submit();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: handle_close,

            div {
                class: "modal rsvp-modal",
                onclick: move |e| e.stop_propagation(),

                header { class: "rsvp-header",
                    button {
                        class: "modal-close-btn",
                        onclick: handle_close,
                        "\u{00D7}"
                    }
                    h3 { class: "script-title rsvp-title", "Xác nhận tham dự" }
                    p { class: "rsvp-subtitle",
                        "Vui lòng cho chúng mình biết bạn có thể đến không nhé"
                    }
                }

                div { class: "rsvp-body",
                    if phase == SubmitPhase::Failed {
                        div { class: "form-error",
                            p { "Có lỗi xảy ra khi gửi xác nhận." }
                            p { class: "form-error-hint",
                                "Vui lòng thử lại sau hoặc liên hệ trực tiếp với chúng mình."
                            }
                        }
                    }

                    // Name (required)
                    div { class: "form-field",
                        label { class: "input-label",
                            "Họ và tên "
                            span { class: "required-mark", "*" }
                        }
                        input {
                            class: "input-field",
                            r#type: "text",
                            value: "{draft.name}",
                            placeholder: "Nhập tên của bạn",
                            oninput: move |e| form.write().set_name(e.value()),
                            autofocus: true,
                        }
                    }

                    // Attending
                    div { class: "form-field",
                        label { class: "input-label",
                            "Bạn có thể tham dự không? "
                            span { class: "required-mark", "*" }
                        }
                        div { class: "attending-choices",
                            button {
                                class: if draft.attending { "choice-button selected" } else { "choice-button" },
                                onclick: move |_| form.write().set_attending(true),
                                "✓ Có, mình sẽ đến"
                            }
                            button {
                                class: if !draft.attending { "choice-button selected" } else { "choice-button" },
                                onclick: move |_| form.write().set_attending(false),
                                "✗ Không thể đến"
                            }
                        }
                    }

                    // Guest count
                    div { class: "form-field",
                        label { class: "input-label",
                            "Số lượng khách "
                            span { class: "required-mark", "*" }
                        }
                        select {
                            class: "input-field",
                            value: "{draft.guests.as_str()}",
                            onchange: move |e| {
                                form.write().set_guests(GuestCount::from_str_lossy(&e.value()));
                            },
                            for count in GuestCount::ALL {
                                option { value: "{count.as_str()}", "{count.label()}" }
                            }
                        }
                    }

                    // Message (optional)
                    div { class: "form-field",
                        label { class: "input-label", "Lời chúc (Tùy chọn)" }
                        textarea {
                            class: "input-field message-input",
                            placeholder: "Gửi lời chúc tới chúng mình...",
                            value: "{draft.message}",
                            rows: "4",
                            oninput: move |e| form.write().set_message(e.value()),
                        }
                    }

                    button {
                        class: "btn-primary rsvp-submit",
                        onclick: submit,
                        disabled: pending || !can_submit,
                        if pending {
                            "Đang gửi xác nhận..."
                        } else {
                            "Gửi xác nhận"
                        }
                    }
                }

                // Decorative dotted footer
                div { class: "dot-row",
                    for i in 0..7 {
                        div { class: if i == 3 { "dot accent" } else { "dot" } }
                    }
                }
            }
        }
    }
}
