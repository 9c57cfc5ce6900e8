use icons::X;
use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::*;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-lg border px-4 py-3 text-sm [&>svg+div]:translate-y-[-3px] [&>svg]:absolute [&>svg]:left-4 [&>svg]:top-4 [&>svg]:text-foreground [&>svg~*]:pl-7"}
    clx! {AlertTitle, h4, "mb-1 font-medium tracking-tight leading-none"}
    clx! {AlertDescription, p, "text-sm [&_p]:leading-relaxed"}
}

#[allow(unused_imports)]
pub use components::*;

/// Banner with a close button, for remote-error and success messages.
/// The owning view clears `message` on dismiss.
#[component]
pub fn DismissibleAlert(
    #[prop(into)] message: RwSignal<Option<String>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let merged_class = tw_merge!("mb-4 flex items-start justify-between gap-2", class);

    view! {
        <Show when=move || message.get().is_some() fallback=|| ().into_view()>
            <Alert class=merged_class.clone()>
                <AlertDescription>
                    {move || message.get().unwrap_or_default()}
                </AlertDescription>
                <button
                    type="button"
                    class="shrink-0 rounded-sm p-1 hover:bg-accent [&_svg:not([class*='size-'])]:size-4"
                    aria-label="Fermer"
                    on:click=move |_| message.set(None)
                >
                    <X />
                </button>
            </Alert>
        </Show>
    }
}
