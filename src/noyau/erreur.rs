// src/noyau/erreur.rs
//
// Taxonomie des échecs du noyau.
// L’UI les écrase toutes en "Error", mais le noyau les distingue
// (les tests vérifient le genre exact).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// `!` sans nombre juste avant (ex: "!3", "(2+3)!").
    #[error("factorielle mal formée : aucun nombre avant '!'")]
    FactorielleMalformee,

    /// Identifiant hors de l’espace de noms.
    #[error("identifiant inconnu : '{0}'")]
    IdentifiantInconnu(String),

    /// Argument hors domaine (sqrt(-1), ln(0), 1/0…).
    #[error("erreur de domaine : {0}")]
    Domaine(String),

    /// factorial(n) avec n négatif ou non entier.
    #[error("factorielle invalide : l’argument doit être un entier positif ou nul")]
    FactorielleInvalide,

    /// Syntaxe arithmétique incorrecte.
    #[error("erreur de syntaxe : {0}")]
    Syntaxe(String),

    /// Résultat non fini (exp(1000), 10.0**400…).
    #[error("dépassement de capacité")]
    Depassement,
}

impl ErreurCalc {
    pub(crate) fn syntaxe(msg: impl Into<String>) -> Self {
        Self::Syntaxe(msg.into())
    }

    pub(crate) fn domaine(msg: impl Into<String>) -> Self {
        Self::Domaine(msg.into())
    }
}

pub type Resultat<T> = Result<T, ErreurCalc>;
