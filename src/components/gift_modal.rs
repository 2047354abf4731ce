//! Gift modal - red-envelope bank cards with copy and transfer QR.
//!
//! Copying an account number writes the literal digits to the clipboard and
//! flips a 2 second "copied" feedback keyed by which account was copied.
//! A new copy takes the feedback slot over and supersedes the earlier reset
//! timer. Clipboard denial is a silent no-op: the feedback still shows, the
//! failure is only logged.

use std::time::Duration;

use dioxus::prelude::*;
use redthread_core::{BankAccount, CopyFeedback, Side};

use crate::context::use_content;

/// How long the "copied" feedback stays up.
const COPY_FEEDBACK_TTL: Duration = Duration::from_secs(2);

/// One red-envelope bank card.
#[component]
fn BankCard(
    account: BankAccount,
    title: String,
    side: Side,
    copied: bool,
    on_copy: EventHandler<Side>,
) -> Element {
    let qr_url = account.qr_image_url();

    rsx! {
        div { class: "bank-card",
            div { class: "bank-card-head",
                h4 { class: "script-title bank-card-title", "{title}" }
                div { class: "bank-card-rule" }
            }

            div { class: "bank-card-sheet",
                div { class: "bank-field bank-field-bank",
                    p { class: "bank-field-label", "Ngân hàng" }
                    p { class: "bank-field-value", "{account.bank}" }
                }

                div { class: "bank-field",
                    p { class: "bank-field-label", "Chủ tài khoản" }
                    p { class: "bank-field-value", "{account.account_name}" }
                }

                div { class: "bank-field",
                    p { class: "bank-field-label", "Số tài khoản" }
                    div { class: "bank-number-row",
                        p { class: "bank-number", "{account.account_number}" }
                        button {
                            class: "copy-button",
                            aria_label: "Sao chép số tài khoản {title}",
                            onclick: move |_| on_copy.call(side),
                            if copied {
                                span { class: "copy-check", "✓" }
                            } else {
                                span { class: "copy-glyph", "⧉" }
                            }
                        }
                    }
                }

                div { class: "bank-qr",
                    img {
                        src: "{qr_url}",
                        alt: "QR chuyển khoản {title}",
                    }
                }
            }
        }
    }
}

#[component]
pub fn GiftModal(
    /// Whether the overlay is visible
    show: bool,
    /// Callback when the overlay should close
    on_close: EventHandler<()>,
) -> Element {
    let content = use_content();
    let mut feedback = use_signal(CopyFeedback::new);

    let copy_account = move |side: Side| {
        let account_number = content.read().gifts.get(side).account_number.clone();

        spawn(async move {
            match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    if let Err(e) = clipboard.set_text(&account_number) {
                        tracing::warn!("Clipboard write failed: {}", e);
                    }
                }
                Err(e) => {
                    tracing::warn!("Clipboard not available: {}", e);
                }
            }

            // Feedback shows either way; a denial stays a silent no-op.
            // The token keeps a superseded timer from clearing newer state.
            let token = feedback.write().set(side);
            tokio::time::sleep(COPY_FEEDBACK_TTL).await;
            feedback.write().expire(token);
        });
    };

    let handle_close = move |_| {
        feedback.write().clear();
        on_close.call(());
    };

    if !show {
        return rsx! {};
    }

    let copied_side = feedback.read().get().copied();
    let gifts = content.read().gifts.clone();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: handle_close,

            div {
                class: "modal gift-modal",
                onclick: move |e| e.stop_propagation(),

                header { class: "gift-header",
                    button {
                        class: "modal-close-btn",
                        onclick: handle_close,
                        "\u{00D7}"
                    }
                    h3 { class: "script-title gift-title", "Gửi mừng cưới" }
                    p { class: "gift-subtitle",
                        "Tình cảm của bạn là món quà quý giá nhất với chúng mình"
                    }
                    div { class: "dot-row",
                        for i in 0..5 {
                            div { class: if i == 2 { "dot accent" } else { "dot" } }
                        }
                    }
                }

                div { class: "gift-body",
                    div { class: "bank-grid",
                        BankCard {
                            account: gifts.groom.clone(),
                            title: "Chú rể",
                            side: Side::Groom,
                            copied: copied_side == Some(Side::Groom),
                            on_copy: copy_account,
                        }
                        BankCard {
                            account: gifts.bride.clone(),
                            title: "Cô dâu",
                            side: Side::Bride,
                            copied: copied_side == Some(Side::Bride),
                            on_copy: copy_account,
                        }
                    }

                    div { class: "gift-note",
                        p {
                            "Sự hiện diện của bạn là món quà ý nghĩa nhất. Nếu bạn muốn "
                            "gửi tặng thêm, đây là thông tin tài khoản của chúng mình. "
                            "Xin chân thành cảm ơn! ❤️"
                        }
                    }
                }
            }
        }
    }
}
