use serde::{Deserialize, Serialize};
use url::Url;

/// Identifier assigned by the remote store.
///
/// json-server emits numeric ids for seeded records and string ids for
/// records it creates, so we accept both and treat the value as opaque.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub(crate) enum LivreId {
    Num(i64),
    Text(String),
}

impl std::fmt::Display for LivreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LivreId::Num(n) => write!(f, "{}", n),
            LivreId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One catalog book as stored remotely.
///
/// The backend uses French, capitalized keys for title and author;
/// keep the Rust side snake_case and rename on the wire.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Livre {
    pub id: LivreId,

    #[serde(rename = "Titre")]
    pub titre: String,

    #[serde(rename = "Auteur")]
    pub auteur: String,

    #[serde(rename = "nbpages")]
    pub nb_pages: u32,

    pub photo: String,
}

impl Livre {
    /// Presentational page-count label shown in the detail modal.
    /// Exactly 500 pages is still "Court".
    pub fn length_label(&self) -> &'static str {
        if self.nb_pages > 500 {
            "Long"
        } else {
            "Court"
        }
    }
}

/// Create payload: same fields as [`Livre`] minus the id, which the
/// remote store assigns.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct NouveauLivre {
    #[serde(rename = "Titre")]
    pub titre: String,

    #[serde(rename = "Auteur")]
    pub auteur: String,

    #[serde(rename = "nbpages")]
    pub nb_pages: u32,

    pub photo: String,
}

/// Raw form text, exactly as typed. Validation turns this into a
/// [`NouveauLivre`] or a single user-facing message.
#[derive(Clone, Debug, Default)]
pub(crate) struct LivreDraft {
    pub titre: String,
    pub auteur: String,
    pub nb_pages: String,
    pub photo: String,
}

impl LivreDraft {
    /// All four fields hold something (used to gate the live preview).
    pub fn is_complete(&self) -> bool {
        !self.titre.trim().is_empty()
            && !self.auteur.trim().is_empty()
            && !self.nb_pages.trim().is_empty()
            && !self.photo.trim().is_empty()
    }

    /// Local validation; checks run in the same order as the original
    /// form so the first failing constraint wins.
    pub fn validate(&self) -> Result<NouveauLivre, String> {
        if !self.is_complete() {
            return Err("Tous les champs sont obligatoires".to_string());
        }

        let nb_pages = match self.nb_pages.trim().parse::<i64>() {
            Ok(n) if n > 0 => n as u32,
            _ => return Err("Le nombre de pages doit être supérieur à 0".to_string()),
        };

        // Url::parse only accepts absolute URLs, which is the constraint
        // we want (same behavior as the browser's `new URL(...)`).
        if Url::parse(self.photo.trim()).is_err() {
            return Err("L'URL de l'image n'est pas valide".to_string());
        }

        Ok(NouveauLivre {
            titre: self.titre.trim().to_string(),
            auteur: self.auteur.trim().to_string(),
            nb_pages,
            photo: self.photo.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(titre: &str, auteur: &str, nb_pages: &str, photo: &str) -> LivreDraft {
        LivreDraft {
            titre: titre.to_string(),
            auteur: auteur.to_string(),
            nb_pages: nb_pages.to_string(),
            photo: photo.to_string(),
        }
    }

    #[test]
    fn validate_accepts_complete_draft() {
        let d = draft("  Germinal ", "Zola", " 591 ", " https://ex.fr/g.jpg ");
        let livre = d.validate().expect("draft should validate");
        assert_eq!(livre.titre, "Germinal");
        assert_eq!(livre.auteur, "Zola");
        assert_eq!(livre.nb_pages, 591);
        assert_eq!(livre.photo, "https://ex.fr/g.jpg");
    }

    #[test]
    fn validate_rejects_missing_fields() {
        for d in [
            draft("", "Zola", "100", "https://ex.fr/a.jpg"),
            draft("Germinal", "   ", "100", "https://ex.fr/a.jpg"),
            draft("Germinal", "Zola", "", "https://ex.fr/a.jpg"),
            draft("Germinal", "Zola", "100", "  "),
        ] {
            assert_eq!(
                d.validate().unwrap_err(),
                "Tous les champs sont obligatoires"
            );
        }
    }

    #[test]
    fn validate_rejects_non_positive_or_garbage_page_count() {
        for pages in ["0", "-3", "abc", "12.5"] {
            let d = draft("Germinal", "Zola", pages, "https://ex.fr/a.jpg");
            assert_eq!(
                d.validate().unwrap_err(),
                "Le nombre de pages doit être supérieur à 0"
            );
        }
    }

    #[test]
    fn validate_rejects_relative_or_malformed_photo_url() {
        for photo in ["not a url", "/images/a.jpg", "exemple.com/a.jpg"] {
            let d = draft("Germinal", "Zola", "100", photo);
            assert_eq!(
                d.validate().unwrap_err(),
                "L'URL de l'image n'est pas valide"
            );
        }
    }

    #[test]
    fn length_label_boundary_is_500() {
        let mut livre = Livre {
            id: LivreId::Num(1),
            titre: "T".to_string(),
            auteur: "A".to_string(),
            nb_pages: 500,
            photo: "https://ex.fr/t.jpg".to_string(),
        };
        assert_eq!(livre.length_label(), "Court");
        livre.nb_pages = 501;
        assert_eq!(livre.length_label(), "Long");
    }

    #[test]
    fn livre_id_accepts_numbers_and_strings() {
        let num: LivreId = serde_json::from_str("7").expect("numeric id");
        assert_eq!(num, LivreId::Num(7));
        assert_eq!(num.to_string(), "7");

        let text: LivreId = serde_json::from_str("\"a1b2\"").expect("string id");
        assert_eq!(text, LivreId::Text("a1b2".to_string()));
        assert_eq!(text.to_string(), "a1b2");
    }

    #[test]
    fn livre_wire_format_uses_french_keys() {
        let json = r#"{"id": 3, "Titre": "Candide", "Auteur": "Voltaire", "nbpages": 144, "photo": "https://ex.fr/c.jpg"}"#;
        let livre: Livre = serde_json::from_str(json).expect("livre should parse");
        assert_eq!(livre.titre, "Candide");
        assert_eq!(livre.auteur, "Voltaire");
        assert_eq!(livre.nb_pages, 144);

        let v = serde_json::to_value(&livre).expect("should serialize");
        assert_eq!(v["Titre"], "Candide");
        assert_eq!(v["Auteur"], "Voltaire");
        assert_eq!(v["nbpages"], 144);
    }

    #[test]
    fn nouveau_livre_serializes_without_id() {
        let nouveau = NouveauLivre {
            titre: "Candide".to_string(),
            auteur: "Voltaire".to_string(),
            nb_pages: 144,
            photo: "https://ex.fr/c.jpg".to_string(),
        };
        let v = serde_json::to_value(&nouveau).expect("should serialize");
        assert!(v.get("id").is_none());
        assert_eq!(v["Titre"], "Candide");
    }
}
