use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// Placeholder swapped in when a cover URL fails to load. Rendering
/// concern only; an unreachable image never blocks form submission.
pub(crate) const COVER_FALLBACK: &str = "https://via.placeholder.com/200x300?text=Livre";

/// Book cover image that degrades to [`COVER_FALLBACK`] on load error.
/// The guard against re-setting the same src avoids an error loop when
/// the placeholder itself is unreachable.
#[component]
pub fn CoverImage(
    #[prop(into)] src: String,
    #[prop(into, optional)] alt: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let merged_class = tw_merge!("h-[200px] w-full rounded-t-xl object-cover", class);

    let on_error = move |ev: web_sys::ErrorEvent| {
        if let Some(target) = ev.target() {
            if let Some(img) = target.dyn_ref::<web_sys::HtmlImageElement>() {
                if img.src() != COVER_FALLBACK {
                    img.set_src(COVER_FALLBACK);
                }
            }
        }
    };

    view! {
        <img
            data-name="CoverImage"
            class=merged_class
            src=src
            alt=alt
            loading="lazy"
            on:error=on_error
        />
    }
}
