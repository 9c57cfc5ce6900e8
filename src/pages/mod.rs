use crate::components::ui::{
    Badge, BadgeOutline, Button, ButtonVariant, Card, CardContent, CardDescription, CardGrid,
    CardGridItem, CardHeader, CardTitle, CoverImage, DismissibleAlert, Input, Label, Modal,
    ModalBody, ModalFooter, ModalHeader, ModalTitle, Select, Spinner,
};
use crate::models::{Livre, LivreDraft, LivreId};
use crate::state::AppContext;
use crate::util::{filter_and_sort, filter_livres, Debouncer, SortKey};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::str::FromStr;

/// Search input settles for this long before the filter recomputes.
const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Read-only detail modal shared by the listing and search views.
#[component]
fn LivreDetailModal(
    #[prop(into)] open: RwSignal<bool>,
    #[prop(into)] selected: RwSignal<Option<Livre>>,
) -> impl IntoView {
    view! {
        <Modal open=open>
            <ModalHeader>
                <ModalTitle>"Détails du livre"</ModalTitle>
            </ModalHeader>
            <ModalBody>
                {move || {
                    selected.get().map(|livre| {
                        let length_label = livre.length_label();
                        view! {
                            <div class="grid gap-4 sm:grid-cols-[180px_1fr]">
                                <CoverImage
                                    src=livre.photo.clone()
                                    alt=livre.titre.clone()
                                    class="h-auto max-h-[260px] rounded-md"
                                />
                                <div class="flex flex-col gap-3">
                                    <h4 class="text-base font-semibold">{livre.titre.clone()}</h4>
                                    <dl class="grid grid-cols-[auto_1fr] gap-x-4 gap-y-2 text-sm">
                                        <dt class="text-muted-foreground">"Auteur"</dt>
                                        <dd>{livre.auteur.clone()}</dd>

                                        <dt class="text-muted-foreground">"Nombre de pages"</dt>
                                        <dd class="flex items-center gap-2">
                                            {livre.nb_pages}
                                            <Badge>{length_label}</Badge>
                                        </dd>

                                        <dt class="text-muted-foreground">"Identifiant"</dt>
                                        <dd>
                                            <code class="rounded bg-muted px-1 py-0.5 text-xs">
                                                {livre.id.to_string()}
                                            </code>
                                        </dd>
                                    </dl>
                                </div>
                            </div>
                        }
                    })
                }}
            </ModalBody>
            <ModalFooter>
                <Button variant=ButtonVariant::Secondary on:click=move |_| open.set(false)>
                    "Fermer"
                </Button>
            </ModalFooter>
        </Modal>
    }
}

/// Creation form shared by both form routes.
///
/// `preview_toggle = true` is the featured variant: an explicit
/// "Voir l'aperçu" button, enabled once titre and photo are filled.
/// `preview_toggle = false` shows the preview automatically as soon as
/// the draft is complete.
#[component]
fn LivreForm(
    #[prop(into)] heading: &'static str,
    #[prop(into)] submit_label: &'static str,
    #[prop(into)] submitting_label: &'static str,
    preview_toggle: bool,
) -> impl IntoView {
    let titre: RwSignal<String> = RwSignal::new(String::new());
    let auteur: RwSignal<String> = RwSignal::new(String::new());
    let nb_pages: RwSignal<String> = RwSignal::new(String::new());
    let photo: RwSignal<String> = RwSignal::new(String::new());

    let message: RwSignal<Option<String>> = RwSignal::new(None);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);
    let preview_open: RwSignal<bool> = RwSignal::new(false);

    let app_state = expect_context::<AppContext>();
    let api = app_state.0.api_client;

    // Typing clears any previously shown outcome, like the original form.
    let clear_messages = Callback::new(move |_: ()| {
        message.set(None);
        error.set(None);
    });

    let draft = move || LivreDraft {
        titre: titre.get(),
        auteur: auteur.get(),
        nb_pages: nb_pages.get(),
        photo: photo.get(),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if loading.get_untracked() {
            return;
        }

        message.set(None);
        error.set(None);

        // Validation failures never reach the network.
        let nouveau = match draft().validate() {
            Ok(n) => n,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };

        let api_client = api.get_untracked();
        loading.set(true);

        spawn_local(async move {
            match api_client.create_livre(&nouveau).await {
                Ok(_created) => {
                    message.try_set(Some("Livre ajouté avec succès !".to_string()));
                    titre.try_set(String::new());
                    auteur.try_set(String::new());
                    nb_pages.try_set(String::new());
                    photo.try_set(String::new());
                    preview_open.try_set(false);
                }
                Err(e) => {
                    leptos::logging::error!("create livre failed: {}", e);
                    error.try_set(Some(e.to_string()));
                }
            }
            loading.try_set(false);
        });
    };

    let can_preview = move || !titre.get().trim().is_empty() && !photo.get().trim().is_empty();

    let preview_visible = move || {
        if preview_toggle {
            preview_open.get() && can_preview()
        } else {
            draft().is_complete()
        }
    };

    let fields_class = if preview_toggle {
        "grid gap-4 sm:grid-cols-2"
    } else {
        "flex flex-col gap-4"
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle class="text-xl">{heading}</CardTitle>
            </CardHeader>

            <CardContent>
                <DismissibleAlert message=message />
                <DismissibleAlert message=error class="border-destructive/30 text-destructive" />

                <form class="flex flex-col gap-4" on:submit=on_submit novalidate=true>
                    <div class=fields_class>
                        <div class="flex flex-col gap-2">
                            <Label html_for="titre">"Titre *"</Label>
                            <Input
                                id="titre"
                                name="titre"
                                placeholder="Entrez le titre du livre"
                                bind_value=titre
                                on_edit=clear_messages
                                required=true
                            />
                        </div>

                        <div class="flex flex-col gap-2">
                            <Label html_for="auteur">"Auteur *"</Label>
                            <Input
                                id="auteur"
                                name="auteur"
                                placeholder="Nom de l'auteur"
                                bind_value=auteur
                                on_edit=clear_messages
                                required=true
                            />
                        </div>

                        <div class="flex flex-col gap-2">
                            <Label html_for="nbpages">"Nombre de pages *"</Label>
                            <Input
                                id="nbpages"
                                name="nbpages"
                                r#type="number"
                                min="1"
                                placeholder="Entrez le nombre de pages"
                                bind_value=nb_pages
                                on_edit=clear_messages
                                required=true
                            />
                        </div>

                        <div class="flex flex-col gap-2">
                            <Label html_for="photo">"URL de l'image *"</Label>
                            <Input
                                id="photo"
                                name="photo"
                                r#type="url"
                                placeholder="https://exemple.com/image.jpg"
                                bind_value=photo
                                on_edit=clear_messages
                                required=true
                            />
                        </div>
                    </div>

                    <div class="flex gap-2">
                        <Button class="flex-1" attr:disabled=move || loading.get()>
                            <span class="inline-flex items-center gap-2">
                                <Show when=move || loading.get() fallback=|| ().into_view()>
                                    <Spinner />
                                </Show>
                                {move || if loading.get() { submitting_label } else { submit_label }}
                            </span>
                        </Button>

                        {preview_toggle
                            .then(|| {
                                view! {
                                    <Button
                                        variant=ButtonVariant::Outline
                                        attr:disabled=move || !can_preview()
                                        // Inside a <form> this button would submit by default.
                                        on:click=move |ev: web_sys::MouseEvent| {
                                            ev.prevent_default();
                                            preview_open.update(|p| *p = !*p);
                                        }
                                    >
                                        {move || {
                                            if preview_open.get() {
                                                "Masquer l'aperçu"
                                            } else {
                                                "Voir l'aperçu"
                                            }
                                        }}
                                    </Button>
                                }
                            })}
                    </div>
                </form>
            </CardContent>
        </Card>

        <Show when=preview_visible fallback=|| ().into_view()>
            <Card class="mt-4">
                <CardHeader>
                    <CardTitle>"Aperçu du Livre"</CardTitle>
                </CardHeader>
                <CardContent>
                    {move || {
                        let d = draft();
                        view! {
                            <div class="grid gap-4 sm:grid-cols-[200px_1fr]">
                                <CoverImage
                                    src=d.photo.clone()
                                    alt="photo du livre"
                                    class="h-auto max-h-[260px] rounded-md"
                                />
                                <dl class="grid grid-cols-[auto_1fr] gap-x-4 gap-y-2 text-sm">
                                    <dt class="text-muted-foreground">"Titre :"</dt>
                                    <dd>{d.titre.clone()}</dd>

                                    <dt class="text-muted-foreground">"Auteur :"</dt>
                                    <dd>{d.auteur.clone()}</dd>

                                    <dt class="text-muted-foreground">"Pages :"</dt>
                                    <dd>{d.nb_pages.clone()}</dd>
                                </dl>
                            </div>
                        }
                    }}
                </CardContent>
            </Card>
        </Show>
    }
}

/// Minimal form variant, mounted at the root route.
#[component]
pub fn FormulairePage() -> impl IntoView {
    view! {
        <div class="mx-auto w-full max-w-2xl px-4 py-8">
            <LivreForm
                heading="Formulaire de Livre"
                submit_label="Soumettre"
                submitting_label="Envoi en cours..."
                preview_toggle=false
            />
        </div>
    }
}

/// Featured form variant with the explicit preview toggle.
#[component]
pub fn AjouterLivrePage() -> impl IntoView {
    view! {
        <div class="mx-auto w-full max-w-3xl px-4 py-8">
            <LivreForm
                heading="Ajouter un Livre"
                submit_label="Ajouter Livre"
                submitting_label="Ajout en cours..."
                preview_toggle=true
            />
        </div>
    }
}

#[component]
pub fn ListeLivresPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let api = app_state.0.api_client;

    let livres: RwSignal<Vec<Livre>> = RwSignal::new(vec![]);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let search: RwSignal<String> = RwSignal::new(String::new());
    let sort_by: RwSignal<String> = RwSignal::new(SortKey::Titre.to_string());
    let deleting: RwSignal<Option<LivreId>> = RwSignal::new(None);
    let selected: RwSignal<Option<Livre>> = RwSignal::new(None);
    let details_open: RwSignal<bool> = RwSignal::new(false);

    let load_livres = move || {
        let api_client = api.get_untracked();
        loading.set(true);

        spawn_local(async move {
            match api_client.list_livres().await {
                Ok(list) => {
                    livres.try_set(list);
                    error.try_set(None);
                }
                Err(e) => {
                    leptos::logging::error!("list livres failed: {}", e);
                    livres.try_set(vec![]);
                    error.try_set(Some(format!("Erreur lors du chargement des livres : {}", e)));
                }
            }
            loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        load_livres();
    });

    // Pure derivation, recomputed from the current term/key/collection on
    // every render. Nothing derived is stored.
    let visible = move || {
        let sort = SortKey::from_str(&sort_by.get()).unwrap_or_default();
        filter_and_sort(&livres.get(), &search.get(), sort)
    };

    view! {
        <div class="mx-auto w-full max-w-[1080px] px-4 py-8">
            <div class="mb-4 flex items-center justify-between">
                <h1 class="flex items-center gap-2 text-xl font-semibold">
                    "Bibliothèque"
                    <Badge>{move || visible().len()}</Badge>
                </h1>
                <Button
                    variant=ButtonVariant::Outline
                    attr:disabled=move || loading.get()
                    on:click=move |_| load_livres()
                >
                    "Rafraîchir"
                </Button>
            </div>

            <DismissibleAlert message=error class="border-destructive/30 text-destructive" />

            <Card class="mb-4">
                <CardContent class="flex flex-col gap-3 sm:flex-row">
                    <Input
                        class="sm:flex-1"
                        placeholder="Rechercher par titre ou auteur..."
                        bind_value=search
                    />
                    <Select class="sm:w-64" aria_label="Trier les livres" bind_value=sort_by>
                        <option value="titre">"Trier par titre"</option>
                        <option value="auteur">"Trier par auteur"</option>
                        <option value="pages">"Trier par nombre de pages"</option>
                    </Select>
                </CardContent>
            </Card>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="flex flex-col items-center gap-2 py-12">
                            <Spinner class="size-6" />
                            <p class="text-sm text-muted-foreground">
                                "Chargement de la bibliothèque..."
                            </p>
                        </div>
                    }
                }
            >
                <Show
                    when=move || !visible().is_empty()
                    fallback=move || {
                        view! {
                            <div class="py-12 text-center text-sm text-muted-foreground">
                                {move || {
                                    if search.get().trim().is_empty() {
                                        "Aucun livre disponible."
                                    } else {
                                        "Aucun livre ne correspond à votre recherche."
                                    }
                                }}
                            </div>
                        }
                    }
                >
                    <CardGrid>
                        {move || {
                            let in_flight = deleting.get();
                            visible()
                                .into_iter()
                                .map(|livre| {
                                    let is_deleting = in_flight.as_ref() == Some(&livre.id);
                                    let livre_details = livre.clone();
                                    let livre_delete = livre.clone();

                                    let on_details = move |_| {
                                        selected.set(Some(livre_details.clone()));
                                        details_open.set(true);
                                    };

                                    let on_delete = move |_| {
                                        let livre = livre_delete.clone();
                                        let confirmed = window()
                                            .confirm_with_message(
                                                &format!(
                                                    "Êtes-vous sûr de vouloir supprimer \"{}\" ?",
                                                    livre.titre,
                                                ),
                                            )
                                            .unwrap_or(false);
                                        if !confirmed {
                                            return;
                                        }

                                        let api_client = api.get_untracked();
                                        deleting.set(Some(livre.id.clone()));

                                        spawn_local(async move {
                                            match api_client.delete_livre(&livre.id).await {
                                                Ok(()) => {
                                                    livres
                                                        .try_update(|list| {
                                                            list.retain(|l| l.id != livre.id)
                                                        });
                                                    error.try_set(None);
                                                }
                                                Err(e) => {
                                                    leptos::logging::error!(
                                                        "delete livre {} failed: {}", livre.id, e
                                                    );
                                                    error.try_set(Some(e.to_string()));
                                                }
                                            }
                                            deleting.try_set(None);
                                        });
                                    };

                                    view! {
                                        <CardGridItem>
                                            <Card class="w-full gap-0 overflow-hidden py-0 pb-6">
                                                <div class="relative">
                                                    <CoverImage
                                                        src=livre.photo.clone()
                                                        alt=livre.titre.clone()
                                                    />
                                                    <Badge class="absolute top-2 right-2">
                                                        {format!("{} pages", livre.nb_pages)}
                                                    </Badge>
                                                </div>
                                                <CardContent class="flex flex-1 flex-col gap-1 pt-4">
                                                    <CardTitle class="truncate text-base">
                                                        {livre.titre.clone()}
                                                    </CardTitle>
                                                    <CardDescription>
                                                        {livre.auteur.clone()}
                                                    </CardDescription>
                                                    <div class="mt-auto flex gap-2 pt-3">
                                                        <Button
                                                            variant=ButtonVariant::Outline
                                                            class="flex-1"
                                                            on:click=on_details
                                                        >
                                                            "Détails"
                                                        </Button>
                                                        <Button
                                                            variant=ButtonVariant::Destructive
                                                            attr:disabled=is_deleting
                                                            on:click=on_delete
                                                        >
                                                            {is_deleting
                                                                .then(|| view! { <Spinner /> })}
                                                            "Supprimer"
                                                        </Button>
                                                    </div>
                                                </CardContent>
                                            </Card>
                                        </CardGridItem>
                                    }
                                })
                                .collect_view()
                        }}
                    </CardGrid>
                </Show>
            </Show>

            <LivreDetailModal open=details_open selected=selected />
        </div>
    }
}

#[component]
pub fn RechercherPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let api = app_state.0.api_client;

    let livres: RwSignal<Vec<Livre>> = RwSignal::new(vec![]);
    let filtered: RwSignal<Vec<Livre>> = RwSignal::new(vec![]);
    let search: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let selected: RwSignal<Option<Livre>> = RwSignal::new(None);
    let details_open: RwSignal<bool> = RwSignal::new(false);

    // One fetch on mount; term changes never refetch.
    Effect::new(move |_| {
        let api_client = api.get_untracked();

        spawn_local(async move {
            match api_client.list_livres().await {
                Ok(list) => {
                    filtered.try_set(filter_livres(&list, &search.get_untracked()));
                    livres.try_set(list);
                    error.try_set(None);
                }
                Err(e) => {
                    leptos::logging::error!("list livres failed: {}", e);
                    error.try_set(Some(format!("Erreur lors du chargement des livres : {}", e)));
                }
            }
            loading.try_set(false);
        });
    });

    // Each keystroke restarts the timer; only a term that has settled for
    // the full window recomputes the filtered list. Teardown cancels the
    // pending timer so nothing fires into a disposed view.
    let debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);
    let debouncer_in_effect = debouncer.clone();
    Effect::new(move |_| {
        let term = search.get();
        debouncer_in_effect.schedule(move || {
            filtered.try_set(filter_livres(&livres.get_untracked(), &term));
        });
    });
    on_cleanup(move || debouncer.cancel());

    view! {
        <div class="mx-auto w-full max-w-[1080px] px-4 py-8">
            <h1 class="mb-4 text-xl font-semibold">"Rechercher un Livre"</h1>

            <DismissibleAlert message=error class="border-destructive/30 text-destructive" />

            <div class="mb-6 flex flex-col gap-2">
                <Label html_for="search">"Rechercher par titre ou auteur :"</Label>
                <Input
                    id="search"
                    placeholder="Entrez votre recherche..."
                    bind_value=search
                />
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="flex flex-col items-center gap-2 py-12">
                            <Spinner class="size-6" />
                            <p class="text-sm text-muted-foreground">"Chargement..."</p>
                        </div>
                    }
                }
            >
                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="py-12 text-center text-sm text-muted-foreground">
                                "Aucun livre ne correspond à votre recherche."
                            </div>
                        }
                    }
                >
                    <CardGrid>
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .map(|livre| {
                                    let livre_details = livre.clone();
                                    let on_details = move |_| {
                                        selected.set(Some(livre_details.clone()));
                                        details_open.set(true);
                                    };

                                    view! {
                                        <CardGridItem>
                                            <Card class="w-full gap-0 overflow-hidden py-0 pb-6">
                                                <CoverImage
                                                    src=livre.photo.clone()
                                                    alt=livre.titre.clone()
                                                />
                                                <CardContent class="flex flex-1 flex-col gap-1 pt-4">
                                                    <CardTitle class="truncate text-base">
                                                        {livre.titre.clone()}
                                                    </CardTitle>
                                                    <CardDescription>
                                                        {livre.auteur.clone()}
                                                    </CardDescription>
                                                    <div class="flex items-center gap-2 text-sm">
                                                        <BadgeOutline>
                                                            {format!("{} pages", livre.nb_pages)}
                                                        </BadgeOutline>
                                                    </div>
                                                    <div class="mt-auto pt-3">
                                                        <Button class="w-full" on:click=on_details>
                                                            "Voir Détails"
                                                        </Button>
                                                    </div>
                                                </CardContent>
                                            </Card>
                                        </CardGridItem>
                                    }
                                })
                                .collect_view()
                        }}
                    </CardGrid>
                </Show>
            </Show>

            <LivreDetailModal open=details_open selected=selected />
        </div>
    }
}
