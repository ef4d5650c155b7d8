// src/noyau/pretraitement.rs
//
// Pré-traitement : syntaxe de surface -> forme canonique.
// - "^"  => "**"
// - "n!" => "factorial(n)"  (n = dernier littéral numérique, chiffres et '.')
//
// Limite assumée : "(2+3)!" est refusé (FactorielleMalformee),
// seul le littéral collé juste avant '!' sert d’opérande.

use tracing::debug;

use super::erreur::{ErreurCalc, Resultat};

/// Symbole d’exposant alternatif.
const SYMBOLE_PUISSANCE: &str = "^";

/// Opérateur de puissance canonique.
const OPERATEUR_PUISSANCE: &str = "**";

/// Marque de factorielle postfixe.
const MARQUE_FACTORIELLE: char = '!';

/// Pipeline complet : puissance puis factorielle.
pub fn pretraiter(brut: &str) -> Resultat<String> {
    let canon = developper_factorielle(&normaliser_puissance(brut))?;
    debug!(brut, canon = %canon, "pré-traitement");
    Ok(canon)
}

/// Remplace chaque "^" par "**" (substitution purement textuelle).
pub fn normaliser_puissance(texte: &str) -> String {
    texte.replace(SYMBOLE_PUISSANCE, OPERATEUR_PUISSANCE)
}

/// Réécrit chaque "n!" en "factorial(n)".
pub fn developper_factorielle(texte: &str) -> Resultat<String> {
    let mut out = String::with_capacity(texte.len());
    let mut nombre = String::new();

    for c in texte.chars() {
        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
        } else if c == MARQUE_FACTORIELLE {
            if nombre.is_empty() {
                return Err(ErreurCalc::FactorielleMalformee);
            }
            out.push_str("factorial(");
            out.push_str(&nombre);
            out.push(')');
            nombre.clear();
        } else {
            out.push_str(&nombre);
            nombre.clear();
            out.push(c);
        }
    }
    out.push_str(&nombre);

    Ok(out)
}
