use crate::models::Livre;
use std::sync::{Arc, Mutex};
use strum::{AsRefStr, Display, EnumString};
use wasm_bindgen::JsCast;

/// Sort keys offered by the listing view's select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum SortKey {
    #[default]
    Titre,
    Auteur,
    Pages,
}

/// Case-insensitive substring match against title OR author.
pub(crate) fn matches_search(livre: &Livre, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    livre.titre.to_lowercase().contains(&needle) || livre.auteur.to_lowercase().contains(&needle)
}

/// Filtered copy of the collection, original order preserved.
pub(crate) fn filter_livres(livres: &[Livre], term: &str) -> Vec<Livre> {
    livres
        .iter()
        .filter(|l| matches_search(l, term))
        .cloned()
        .collect()
}

/// Derived view for the listing page: filter, then sort. Pure and
/// recomputed from scratch on every render; no cached derived state.
pub(crate) fn filter_and_sort(livres: &[Livre], term: &str, sort: SortKey) -> Vec<Livre> {
    let mut out = filter_livres(livres, term);
    match sort {
        SortKey::Titre => out.sort_by(|a, b| a.titre.to_lowercase().cmp(&b.titre.to_lowercase())),
        SortKey::Auteur => {
            out.sort_by(|a, b| a.auteur.to_lowercase().cmp(&b.auteur.to_lowercase()))
        }
        SortKey::Pages => out.sort_by(|a, b| a.nb_pages.cmp(&b.nb_pages)),
    }
    out
}

/// Fixed-delay coalescing timer over `window.setTimeout`.
///
/// Each `schedule` call replaces any pending timer, so a burst of calls
/// within the delay window runs the callback once, with the last
/// arguments. Views cancel on teardown to avoid a stale update firing
/// after unmount.
#[derive(Clone)]
pub(crate) struct Debouncer {
    delay_ms: i32,
    pending: Arc<Mutex<Option<i32>>>,
}

impl Debouncer {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        let Some(win) = web_sys::window() else {
            return;
        };

        if let Ok(mut slot) = self.pending.lock() {
            if let Some(tid) = slot.take() {
                win.clear_timeout_with_handle(tid);
            }
        }

        let pending = Arc::clone(&self.pending);
        let cb = wasm_bindgen::closure::Closure::once_into_js(move || {
            if let Ok(mut slot) = pending.lock() {
                *slot = None;
            }
            f();
        });

        let tid = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                self.delay_ms,
            )
            .unwrap_or(0);

        if let Ok(mut slot) = self.pending.lock() {
            *slot = Some(tid);
        }
    }

    pub fn cancel(&self) {
        let tid = self.pending.lock().ok().and_then(|mut slot| slot.take());
        if let Some(tid) = tid {
            if let Some(win) = web_sys::window() {
                win.clear_timeout_with_handle(tid);
            }
        }
    }

    #[allow(dead_code)]
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LivreId;
    use std::str::FromStr;

    fn livre(id: i64, titre: &str, auteur: &str, nb_pages: u32) -> Livre {
        Livre {
            id: LivreId::Num(id),
            titre: titre.to_string(),
            auteur: auteur.to_string(),
            nb_pages,
            photo: "https://ex.fr/c.jpg".to_string(),
        }
    }

    #[test]
    fn filter_is_case_insensitive_over_title_or_author() {
        let livres = vec![livre(1, "Alpha", "Someone", 10), livre(2, "beta", "Atlas", 20)];
        let hits = filter_livres(&livres, "a");
        assert_eq!(hits.len(), 2);

        let hits = filter_livres(&livres, "ATLAS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].titre, "beta");
    }

    #[test]
    fn empty_or_whitespace_term_keeps_everything() {
        let livres = vec![livre(1, "Alpha", "A", 10), livre(2, "Beta", "B", 20)];
        assert_eq!(filter_livres(&livres, "").len(), 2);
        assert_eq!(filter_livres(&livres, "   ").len(), 2);
    }

    #[test]
    fn filter_preserves_collection_order() {
        let livres = vec![
            livre(1, "Zadig", "Voltaire", 10),
            livre(2, "Candide", "Voltaire", 20),
        ];
        let hits = filter_livres(&livres, "voltaire");
        assert_eq!(hits[0].titre, "Zadig");
        assert_eq!(hits[1].titre, "Candide");
    }

    #[test]
    fn pages_sort_is_numeric_ascending() {
        let livres = vec![livre(1, "A", "x", 9), livre(2, "B", "y", 10), livre(3, "C", "z", 2)];
        let sorted = filter_and_sort(&livres, "", SortKey::Pages);
        let pages: Vec<u32> = sorted.iter().map(|l| l.nb_pages).collect();
        assert_eq!(pages, vec![2, 9, 10]);
    }

    #[test]
    fn title_and_author_sorts_ignore_case() {
        let livres = vec![livre(1, "beta", "zola", 1), livre(2, "Alpha", "Hugo", 2)];

        let by_title = filter_and_sort(&livres, "", SortKey::Titre);
        assert_eq!(by_title[0].titre, "Alpha");

        let by_author = filter_and_sort(&livres, "", SortKey::Auteur);
        assert_eq!(by_author[0].auteur, "Hugo");
    }

    #[test]
    fn sort_key_round_trips_through_strum() {
        assert_eq!(SortKey::Pages.to_string(), "pages");
        assert_eq!(SortKey::from_str("auteur"), Ok(SortKey::Auteur));
        assert_eq!(SortKey::from_str("titre"), Ok(SortKey::Titre));
        assert!(SortKey::from_str("autre").is_err());
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_debouncer_coalesces_to_one_pending_timer() {
        let d = Debouncer::new(300);
        assert!(!d.is_pending());

        d.schedule(|| {});
        let first = *d.pending.lock().unwrap();
        assert!(first.is_some());

        // Second schedule within the window replaces the first timer.
        d.schedule(|| {});
        let second = *d.pending.lock().unwrap();
        assert!(second.is_some());
        assert_ne!(first, second);

        d.cancel();
        assert!(!d.is_pending());
    }

    #[wasm_bindgen_test]
    fn test_debouncer_cancel_is_idempotent() {
        let d = Debouncer::new(300);
        d.cancel();
        d.schedule(|| {});
        d.cancel();
        d.cancel();
        assert!(!d.is_pending());
    }
}
