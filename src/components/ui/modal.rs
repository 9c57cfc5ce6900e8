use icons::X;
use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::*;

mod components {
    use super::*;
    clx! {ModalHeader, div, "flex flex-col gap-2 pr-8 text-left"}
    clx! {ModalTitle, h3, "text-lg leading-none font-semibold"}
    clx! {ModalBody, div, "flex flex-col gap-4"}
    clx! {ModalFooter, footer, "flex flex-row justify-end gap-2"}
}

#[allow(unused_imports)]
pub use components::*;

/// Signal-controlled modal. Fully driven by `open`: no portal, no DOM
/// script wiring. Backdrop click and the close button both clear `open`.
#[component]
pub fn Modal(
    #[prop(into)] open: RwSignal<bool>,
    #[prop(optional, into)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "bg-background relative z-50 flex w-full max-w-lg flex-col gap-4 rounded-2xl border p-6 shadow-lg max-h-[85vh] overflow-y-auto",
        class
    );

    view! {
        <Show when=move || open.get() fallback=|| ().into_view()>
            <div
                data-name="ModalBackdrop"
                class="fixed inset-0 z-40 flex items-center justify-center bg-black/50 p-4"
                on:click=move |_| open.set(false)
            >
                <div
                    data-name="ModalContent"
                    class=merged_class.clone()
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        type="button"
                        class="absolute top-4 right-4 rounded-sm p-1 hover:bg-accent focus:ring-2 focus:outline-none [&_svg:not([class*='size-'])]:size-4"
                        aria-label="Fermer"
                        on:click=move |_| open.set(false)
                    >
                        <X />
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
