//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’affichage de la calculatrice et la session du noyau,
//! et offrir les actions des touches (C, DEL, ±, Ans, =) sans logique d’affichage.
//!
//! Contrats :
//! - Aucun parsing ici : "=" délègue tout au noyau.
//! - Un échec s’affiche "Error" sans distinguer le genre d’erreur.
//! - La mémoire "Ans" vit dans la session du noyau, pas ici.

use tracing::debug;

use crate::noyau::{formater_resultat, Calculatrice};

/// Marqueur affiché quand l’évaluation échoue.
pub const MARQUE_ERREUR: &str = "Error";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- affichage (entrée ET résultat, comme une calculatrice de poche) ---
    pub entree: String,

    // --- noyau ---
    pub calculatrice: Calculatrice,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            calculatrice: Calculatrice::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Ajoute du texte à la fin de l’affichage.
    pub fn inserer(&mut self, texte: &str) {
        self.entree.push_str(texte);
        self.focus_entree = true;
    }

    /// C : effacer l’affichage.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère.
    pub fn backspace_entree(&mut self) {
        self.entree.pop();
        self.focus_entree = true;
    }

    /// ± : vide => "-" ; "-x" => "x" ; "x" => "-x".
    pub fn basculer_signe(&mut self) {
        let courant = self.entree.trim();
        self.entree = if courant.is_empty() {
            "-".to_string()
        } else if let Some(reste) = courant.strip_prefix('-') {
            reste.to_string()
        } else {
            format!("-{courant}")
        };
        self.focus_entree = true;
    }

    /// Ans : ajoute la dernière réponse (si elle existe).
    pub fn inserer_reponse(&mut self) {
        if let Some(v) = self.calculatrice.derniere_reponse() {
            self.inserer(&formater_resultat(v));
        }
    }

    /// = : évalue l’affichage via le noyau et le remplace par le résultat.
    pub fn evaluer_entree(&mut self) {
        match self.calculatrice.evaluer(&self.entree) {
            Ok(Some(v)) => self.entree = formater_resultat(v),
            Ok(None) => {}
            Err(e) => {
                debug!(erreur = %e, "affichage du marqueur d’erreur");
                self.entree = MARQUE_ERREUR.to_string();
            }
        }
        self.focus_entree = true;
    }
}
