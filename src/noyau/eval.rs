//! Noyau — évaluation (pipeline réel)
//!
//! texte canonique -> jetons -> AST (descente récursive) -> valeur
//!
//! Aucune primitive d’exécution générique : seuls les noms de l’espace de noms
//! passé en paramètre sont résolus, tout le reste est refusé.

use tracing::debug;

use super::analyse::analyser;
use super::erreur::{ErreurCalc, Resultat};
use super::espace_noms::{Entree, EspaceNoms};
use super::expr::Expr;
use super::jetons::{format_tokens, tokenize};
use super::nombre::{reel, Nombre};

/// API publique : évalue une expression CANONIQUE (déjà pré-traitée).
///
/// Échecs: Syntaxe, IdentifiantInconnu, Domaine, FactorielleInvalide, Depassement.
pub fn evaluer(canonique: &str, espace: &EspaceNoms) -> Resultat<Nombre> {
    let jetons = tokenize(canonique)?;
    debug!(jetons = %format_tokens(&jetons), "jetons");

    let expr = analyser(&jetons)?;
    debug!(arbre = %expr, "arbre");

    evaluer_expr(&expr, espace)
}

/// Évalue un AST contre l’espace de noms.
pub fn evaluer_expr(expr: &Expr, espace: &EspaceNoms) -> Resultat<Nombre> {
    use Expr::*;

    match expr {
        Num(n) => Ok(*n),

        Ident(nom) => match espace.resoudre(nom)? {
            Entree::Constante(x) => reel(x),
            Entree::Fonction { .. } => Err(ErreurCalc::syntaxe(format!(
                "'{nom}' est une fonction : il manque ses parenthèses"
            ))),
        },

        Appel(nom, args) => {
            // le nom d’abord : "foo(1/0)" est un identifiant inconnu, pas une division par zéro
            let (arite_min, arite_max, f) = match espace.resoudre(nom)? {
                Entree::Fonction {
                    arite_min,
                    arite_max,
                    f,
                } => (arite_min, arite_max, f),
                Entree::Constante(_) => {
                    return Err(ErreurCalc::syntaxe(format!(
                        "'{nom}' est une constante, pas une fonction"
                    )))
                }
            };

            if args.len() < arite_min || args.len() > arite_max {
                return Err(ErreurCalc::syntaxe(format!(
                    "{nom} : {} argument(s) reçu(s)",
                    args.len()
                )));
            }

            let valeurs = args
                .iter()
                .map(|a| evaluer_expr(a, espace))
                .collect::<Resultat<Vec<_>>>()?;
            f(&valeurs)
        }

        Neg(x) => evaluer_expr(x, espace)?.neg(),

        Add(a, b) => evaluer_expr(a, espace)?.add(evaluer_expr(b, espace)?),
        Sub(a, b) => evaluer_expr(a, espace)?.sub(evaluer_expr(b, espace)?),
        Mul(a, b) => evaluer_expr(a, espace)?.mul(evaluer_expr(b, espace)?),
        Div(a, b) => evaluer_expr(a, espace)?.div(evaluer_expr(b, espace)?),
        Mod(a, b) => evaluer_expr(a, espace)?.modulo(evaluer_expr(b, espace)?),
        Pow(a, b) => evaluer_expr(a, espace)?.puissance(evaluer_expr(b, espace)?),
    }
}
