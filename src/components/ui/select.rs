use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// Native `<select>` wrapped with the kit's styling and a string signal.
/// Options are plain `<option>` children provided by the caller.
#[component]
pub fn Select(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] id: String,
    #[prop(into, default = "Options".into())] aria_label: String,
    #[prop(into)] bind_value: RwSignal<String>,
    children: Children,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "border-input flex h-9 w-full rounded-md border bg-transparent px-3 py-1 text-sm shadow-xs outline-none transition-[color,box-shadow] hover:cursor-pointer disabled:pointer-events-none disabled:opacity-50",
        "focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2",
        class
    );

    let on_change = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
                bind_value.set(select.value());
            }
        }
    };

    view! {
        <select
            data-name="Select"
            class=merged_class
            id=id
            aria-label=aria_label
            prop:value=move || bind_value.get()
            on:change=on_change
        >
            {children()}
        </select>
    }
}
