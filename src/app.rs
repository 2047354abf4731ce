use dioxus::prelude::*;
use redthread_core::{OverlayKind, Overlays, RsvpClient, WeddingContent};

use crate::components::{
    CoupleSection, FloatingNav, Footer, GallerySection, GiftModal, HeroSection, MusicControl,
    RsvpModal, VenueSection,
};
use crate::get_settings;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the content/client context, then lays the
/// sections out in page order. The two overlays are independent flags owned
/// here; the floating nav opens them through callbacks and each modal closes
/// itself.
#[component]
pub fn App() -> Element {
    let settings = get_settings();
    let loaded_content = settings.content;
    let rsvp_endpoint = settings.rsvp_endpoint;

    let content: Signal<WeddingContent> = use_signal(move || loaded_content.clone());
    let client: Signal<RsvpClient> = use_signal(move || RsvpClient::new(rsvp_endpoint.clone()));
    let mut overlays: Signal<Overlays> = use_signal(Overlays::default);

    use_context_provider(|| content);
    use_context_provider(|| client);

    let data = content.read();

    rsx! {
        style { {GLOBAL_STYLES} }

        div { class: "page",
            HeroSection {
                hero_image: data.hero_image.clone(),
                groom_name: data.groom.display_name.clone(),
                bride_name: data.bride.display_name.clone(),
            }

            CoupleSection {
                groom: data.groom.clone(),
                bride: data.bride.clone(),
            }

            VenueSection { venues: data.venues.clone() }

            GallerySection { photos: data.gallery.clone() }

            Footer {
                groom_name: data.groom.display_name.clone(),
                bride_name: data.bride.display_name.clone(),
                date: data.venues.groom.date.clone(),
            }

            RsvpModal {
                show: overlays.read().is_open(OverlayKind::Rsvp),
                on_close: move |_| overlays.write().close(OverlayKind::Rsvp),
            }

            GiftModal {
                show: overlays.read().is_open(OverlayKind::Gift),
                on_close: move |_| overlays.write().close(OverlayKind::Gift),
            }

            FloatingNav {
                on_rsvp: move |_| overlays.write().open(OverlayKind::Rsvp),
                on_gift: move |_| overlays.write().open(OverlayKind::Gift),
            }

            MusicControl { music_src: data.music_src.clone() }
        }
    }
}
