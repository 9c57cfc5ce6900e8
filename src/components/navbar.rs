use leptos::prelude::*;

/// Static navigation bar. Purely declarative: a brand link and one link
/// per route, no state.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="bg-primary text-primary-foreground">
            <div class="mx-auto flex w-full max-w-[1080px] flex-wrap items-center gap-4 px-4 py-3">
                <a href="/liste-livres" class="text-base font-semibold">
                    "Gestion des Livres"
                </a>
                <div class="flex flex-wrap items-center gap-3 text-sm">
                    <a class="opacity-90 hover:opacity-100 hover:underline" href="/ajouter-livre">
                        "Ajouter un Livre"
                    </a>
                    <a class="opacity-90 hover:opacity-100 hover:underline" href="/">
                        "Formulaire de Livre"
                    </a>
                    <a class="opacity-90 hover:opacity-100 hover:underline" href="/rechercher">
                        "Rechercher un Livre"
                    </a>
                    <a class="opacity-90 hover:opacity-100 hover:underline" href="/liste-livres">
                        "Liste des Livres"
                    </a>
                </div>
            </div>
        </nav>
    }
}
