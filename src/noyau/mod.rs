//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - pretraitement.rs : "^" -> "**", "n!" -> "factorial(n)"
//! - jetons.rs        : tokenisation
//! - analyse.rs       : descente récursive -> Expr
//! - expr.rs          : AST
//! - espace_noms.rs   : table figée des constantes / fonctions autorisées
//! - nombre.rs        : entier exact | réel f64
//! - eval.rs          : pipeline complet (canonique -> valeur)
//! - format.rs        : valeur -> texte affiché
//! - session.rs       : mémoire "Ans"
//! - erreur.rs        : taxonomie des échecs

pub mod analyse;
pub mod erreur;
pub mod espace_noms;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod nombre;
pub mod pretraitement;
pub mod session;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurCalc;
pub use espace_noms::EspaceNoms;
pub use eval::evaluer;
pub use format::formater_resultat;
pub use nombre::Nombre;
pub use pretraitement::pretraiter;
pub use session::Calculatrice;
