// src/noyau/jetons.rs

use super::erreur::{ErreurCalc, Resultat};
use super::format::formater_resultat;
use super::nombre::Nombre;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(Nombre),

    // Fonctions + constantes : c’est l’espace de noms qui tranche à l’évaluation.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    DoubleStar, // **

    LPar,
    RPar,
    Comma,
}

/// Tokenize une chaîne canonique en jetons.
/// Supporte:
/// - entiers (ex: 12) -> Num(Entier)
/// - décimaux (ex: 1.5, .5, 5.) et notation scientifique (ex: 1e5, 2.5E-3) -> Num(Reel)
/// - opérateurs + - * / % **
/// - parenthèses ( ) et virgule
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (sensibles à la casse)
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            ',' => Some(Tok::Comma),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '/' => Some(Tok::Slash),
            '%' => Some(Tok::Percent),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // '*' ou '**'
        if c == '*' {
            if i + 1 < chars.len() && chars[i + 1] == '*' {
                out.push(Tok::DoubleStar);
                i += 2;
            } else {
                out.push(Tok::Star);
                i += 1;
            }
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            out.push(Tok::Ident(chars[start..i].iter().collect()));
            continue;
        }

        // Nombres
        if c.is_ascii_digit() || c == '.' {
            let (tok, suivant) = lire_nombre(&chars, i)?;
            out.push(tok);
            i = suivant;
            continue;
        }

        return Err(ErreurCalc::syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Lit un littéral numérique à partir de `debut`.
/// Renvoie le jeton et l’indice du premier caractère non consommé.
fn lire_nombre(chars: &[char], debut: usize) -> Resultat<(Tok, usize)> {
    let mut i = debut;
    let mut reel = false;

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    let mut nb_chiffres = i - debut;

    if i < chars.len() && chars[i] == '.' {
        reel = true;
        i += 1;
        let start_frac = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        nb_chiffres += i - start_frac;
    }

    if nb_chiffres == 0 {
        return Err(ErreurCalc::syntaxe("nombre invalide: '.'"));
    }

    // exposant : seulement s’il est suivi d’au moins un chiffre
    // (sinon "2e" reste "2" puis l’identifiant "e").
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        let start_exp = j;
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
        if j > start_exp {
            reel = true;
            i = j;
        }
    }

    let texte: String = chars[debut..i].iter().collect();

    if !reel {
        if let Ok(n) = texte.parse::<i64>() {
            return Ok((Tok::Num(Nombre::Entier(n)), i));
        }
    }

    // entier trop grand pour i64 : on continue en réel
    let x = texte
        .parse::<f64>()
        .map_err(|_| ErreurCalc::syntaxe(format!("nombre invalide: '{texte}'")))?;
    if !x.is_finite() {
        return Err(ErreurCalc::Depassement);
    }
    Ok((Tok::Num(Nombre::Reel(x)), i))
}

/// Format utilitaire (journalisation) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => formater_resultat(*n),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),
            Tok::DoubleStar => "**".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Comma => ",".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
