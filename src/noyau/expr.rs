// src/noyau/expr.rs
//
// AST d’une expression canonique.
// - Num   : littéral (entier ou réel)
// - Ident : nom nu (constante attendue : pi, e)
// - Appel : nom(args…) (fonction attendue : sin, log…)
//
// IMPORTANT (SAFE):
// - L’AST ne contient que des noms. Leur sens vient exclusivement de l’espace de noms
//   passé à l’évaluation : rien d’autre n’est atteignable depuis le texte.

use std::fmt;

use super::format::formater_resultat;
use super::nombre::Nombre;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(Nombre),
    Ident(String),
    Appel(String, Vec<Expr>),

    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Mod(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl fmt::Display for Expr {
    /// Forme entièrement parenthésée (journalisation / tests de précédence).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Num(n) => write!(f, "{}", formater_resultat(*n)),
            Ident(nom) => write!(f, "{nom}"),
            Appel(nom, args) => {
                write!(f, "{nom}(")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{a}")?;
                }
                write!(f, ")")
            }
            Neg(x) => write!(f, "(-{x})"),
            Add(a, b) => write!(f, "({a} + {b})"),
            Sub(a, b) => write!(f, "({a} - {b})"),
            Mul(a, b) => write!(f, "({a} * {b})"),
            Div(a, b) => write!(f, "({a} / {b})"),
            Mod(a, b) => write!(f, "({a} % {b})"),
            Pow(a, b) => write!(f, "({a} ** {b})"),
        }
    }
}
