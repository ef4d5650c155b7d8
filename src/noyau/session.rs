// src/noyau/session.rs
//
// Session de calcul : espace de noms + mémoire "Ans" (dernière réponse).
//
// Contrats:
// - derniere_reponse est None tant qu’aucune évaluation n’a réussi
// - chaque succès l’écrase, un échec ne la touche jamais
// - une saisie vide (ou blanche) ne fait rien : pas de résultat, pas d’erreur

use tracing::debug;

use super::erreur::Resultat;
use super::espace_noms::EspaceNoms;
use super::eval::evaluer;
use super::nombre::Nombre;
use super::pretraitement::pretraiter;

#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    espace: EspaceNoms,
    derniere_reponse: Option<Nombre>,
}

impl Calculatrice {
    pub fn new(espace: EspaceNoms) -> Self {
        Self {
            espace,
            derniere_reponse: None,
        }
    }

    /// Saisie brute -> pré-traitement -> évaluation.
    ///
    /// `Ok(None)` si la saisie est blanche (rien n’est évalué).
    pub fn evaluer(&mut self, saisie: &str) -> Resultat<Option<Nombre>> {
        if saisie.trim().is_empty() {
            return Ok(None);
        }

        let resultat = pretraiter(saisie).and_then(|canon| evaluer(&canon, &self.espace));

        match resultat {
            Ok(v) => {
                debug!(saisie, resultat = ?v, "évaluation réussie");
                self.derniere_reponse = Some(v);
                Ok(Some(v))
            }
            Err(e) => {
                debug!(saisie, erreur = %e, "évaluation refusée");
                Err(e)
            }
        }
    }

    pub fn derniere_reponse(&self) -> Option<Nombre> {
        self.derniere_reponse
    }

    pub fn set_derniere_reponse(&mut self, v: Nombre) {
        self.derniere_reponse = Some(v);
    }
}
