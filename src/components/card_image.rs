//! Card Image Loader
//!
//! Resolves a card's image reference and shows it, reading local files
//! asynchronously and inlining them as data URIs. A missing or unreadable
//! image shows a placeholder; it never affects the rest of the gallery.

use std::path::Path;

use dioxus::prelude::*;
use drachenhort_core::ImageSource;

use crate::context::get_config;

/// MIME type for an image file, by extension.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    }
}

fn data_uri(path: &Path, bytes: &[u8]) -> String {
    use base64::Engine;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime_for(path), encoded)
}

#[component]
pub fn CardImage(image: String, alt: String) -> Element {
    let mut src = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    use_effect(use_reactive!(|image| {
        spawn(async move {
            loading.set(true);
            let resolved = match get_config().resolve_image(&image) {
                ImageSource::Url(url) => Some(url),
                ImageSource::File(path) => match tokio::fs::read(&path).await {
                    Ok(bytes) => Some(data_uri(&path, &bytes)),
                    Err(e) => {
                        tracing::debug!("Card image {:?} unavailable: {}", path, e);
                        None
                    }
                },
            };
            src.set(resolved);
            loading.set(false);
        });
    }));

    rsx! {
        div { class: "card-image",
            if loading() {
                div { class: "card-image__loading", div { class: "spinner" } }
            } else if let Some(url) = src() {
                img { class: "card-image__img", src: "{url}", alt: "{alt}" }
            } else {
                div { class: "card-image__placeholder", "?" }
            }
        }
    }
}
