//! Music control - floating toggle for the background track.
//!
//! The control drives the core `AudioControl` machine. Starting playback is
//! asynchronous: the webview's audio element may reject `play()` under its
//! autoplay policy, in which case the machine soft-fails back to stopped
//! and nothing is surfaced to the guest. The tooltip is an auto-expiring
//! flag; hovering pins it, a toggle flashes it for two seconds.

use std::time::Duration;

use dioxus::document;
use dioxus::prelude::*;
use redthread_core::{AudioControl, ExpiringState, PlaybackCommand};

/// DOM id of the hidden audio element.
const AUDIO_ELEMENT_ID: &str = "bg-music";

/// Playback volume for the background track.
const MUSIC_VOLUME: f64 = 0.6;

/// How long the tooltip stays up after a toggle.
const TOOLTIP_TTL: Duration = Duration::from_secs(2);

/// Ask the audio element to start playing.
///
/// Resolves to whether playback actually began; an autoplay rejection or a
/// missing element both come back false.
async fn start_playback() -> bool {
    let script = format!(
        r#"
        const audio = document.getElementById("{AUDIO_ELEMENT_ID}");
        if (audio === null) return false;
        audio.volume = {MUSIC_VOLUME};
        try {{
            await audio.play();
            return true;
        }} catch (err) {{
            return false;
        }}
        "#
    );

    match document::eval(&script).await {
        Ok(value) => value.as_bool().unwrap_or(false),
        Err(e) => {
            tracing::debug!("playback eval failed: {:?}", e);
            false
        }
    }
}

/// Pause the audio element. Pausing cannot be rejected.
async fn stop_playback() {
    let script = format!(
        r#"
        const audio = document.getElementById("{AUDIO_ELEMENT_ID}");
        if (audio !== null) audio.pause();
        "#
    );
    if let Err(e) = document::eval(&script).await {
        tracing::debug!("pause eval failed: {:?}", e);
    }
}

#[component]
pub fn MusicControl(music_src: String) -> Element {
    let mut audio = use_signal(AudioControl::default);
    let mut tooltip = use_signal(ExpiringState::<()>::new);

    let on_toggle = move |_| {
        let command = audio.write().toggle();
        match command {
            Some(PlaybackCommand::Start) => {
                spawn(async move {
                    if start_playback().await {
                        audio.write().play_resolved();
                    } else {
                        tracing::info!("playback not permitted by environment");
                        audio.write().play_rejected();
                    }
                });
            }
            Some(PlaybackCommand::Stop) => {
                spawn(async move {
                    stop_playback().await;
                });
            }
            // A start is already in flight
            None => return,
        }

        // Flash the tooltip; a re-toggle restarts the timer
        let token = tooltip.write().set(());
        spawn(async move {
            tokio::time::sleep(TOOLTIP_TTL).await;
            tooltip.write().expire(token);
        });
    };

    let playing = audio.read().is_playing();
    let engaged = audio.read().is_engaged();
    let tooltip_text = if engaged { "Tắt nhạc" } else { "Bật nhạc" };

    rsx! {
        // Hidden looping audio element the control drives
        audio {
            id: "{AUDIO_ELEMENT_ID}",
            src: "{music_src}",
            r#loop: true,
            preload: "auto",
        }

        div { class: "music-control",
            button {
                class: if playing { "music-button playing" } else { "music-button" },
                onclick: on_toggle,
                onmouseenter: move |_| {
                    tooltip.write().set(());
                },
                onmouseleave: move |_| {
                    tooltip.write().clear();
                },

                // Breathing rings while playing
                if playing {
                    div { class: "music-ring ring-near" }
                    div { class: "music-ring ring-far" }
                }

                div { class: "music-icon",
                    if playing {
                        svg {
                            class: "music-note",
                            width: "24",
                            height: "24",
                            view_box: "0 0 24 24",
                            fill: "currentColor",
                            path { d: "M12 3v10.55c-.59-.34-1.27-.55-2-.55-2.21 0-4 1.79-4 4s1.79 4 4 4 4-1.79 4-4V7h4V3h-6z" }
                        }
                    } else {
                        svg {
                            width: "24",
                            height: "24",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                            path { d: "M11 5L6 9H2v6h4l5 4V5z" }
                            line { x1: "23", y1: "9", x2: "17", y2: "15" }
                            line { x1: "17", y1: "9", x2: "23", y2: "15" }
                        }
                    }
                }
            }

            if tooltip.read().is_set() {
                div { class: "music-tooltip", "{tooltip_text}" }
            }
        }
    }
}
