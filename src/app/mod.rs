use crate::components::navbar::Navbar;
use crate::pages::{AjouterLivrePage, FormulairePage, ListeLivresPage, RechercherPage};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new()));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <Navbar />
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Page introuvable"</div> }>
                <Route path=path!("liste-livres") view=ListeLivresPage />
                <Route path=path!("rechercher") view=RechercherPage />
                <Route path=path!("ajouter-livre") view=AjouterLivrePage />
                <Route path=path!("") view=FormulairePage />
            </Routes>
        </Router>
    }
}
