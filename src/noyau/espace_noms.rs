// src/noyau/espace_noms.rs
//
// Espace de noms figé : la SEULE surface de calcul atteignable depuis le texte.
//
// Contrats:
// - table statique, en lecture seule, construite à la compilation
// - un nom absent => IdentifiantInconnu (aucune autre résolution)
// - chaque fonction vérifie son domaine et renvoie une erreur typée

use std::fmt;

use super::erreur::{ErreurCalc, Resultat};
use super::nombre::{reel, Nombre};

/// Signature commune des fonctions de la table (arité déjà vérifiée).
pub type Fonction = fn(&[Nombre]) -> Resultat<Nombre>;

#[derive(Clone, Copy)]
pub enum Entree {
    Constante(f64),
    Fonction {
        arite_min: usize,
        arite_max: usize,
        f: Fonction,
    },
}

impl fmt::Debug for Entree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entree::Constante(x) => write!(f, "Constante({x})"),
            Entree::Fonction {
                arite_min,
                arite_max,
                ..
            } => write!(f, "Fonction({arite_min}..={arite_max})"),
        }
    }
}

impl Entree {
    const fn unaire(f: Fonction) -> Self {
        Entree::Fonction {
            arite_min: 1,
            arite_max: 1,
            f,
        }
    }
}

/// Plus grand n dont n! reste fini en f64.
const FACTORIELLE_MAX: i64 = 170;

static TABLE_STANDARD: &[(&str, Entree)] = &[
    // trigonométrie (radians)
    ("sin", Entree::unaire(sin)),
    ("cos", Entree::unaire(cos)),
    ("tan", Entree::unaire(tan)),
    ("asin", Entree::unaire(asin)),
    ("acos", Entree::unaire(acos)),
    ("atan", Entree::unaire(atan)),
    // racines
    ("sqrt", Entree::unaire(sqrt)),
    ("cbrt", Entree::unaire(cbrt)),
    (
        "root",
        Entree::Fonction {
            arite_min: 2,
            arite_max: 2,
            f: root,
        },
    ),
    // logarithmes / exponentielle
    ("ln", Entree::unaire(ln)),
    (
        "log",
        Entree::Fonction {
            arite_min: 1,
            arite_max: 2,
            f: log,
        },
    ),
    ("exp", Entree::unaire(exp)),
    // divers
    ("abs", Entree::unaire(abs)),
    ("factorial", Entree::unaire(factorial)),
    // constantes
    ("pi", Entree::Constante(std::f64::consts::PI)),
    ("e", Entree::Constante(std::f64::consts::E)),
];

/// Table immuable nom -> constante | fonction.
#[derive(Clone, Copy, Debug)]
pub struct EspaceNoms {
    entrees: &'static [(&'static str, Entree)],
}

impl Default for EspaceNoms {
    fn default() -> Self {
        Self::standard()
    }
}

impl EspaceNoms {
    /// Table scientifique standard (trig, racines, logs, abs, factorial, pi, e).
    pub const fn standard() -> Self {
        Self {
            entrees: TABLE_STANDARD,
        }
    }

    /// Résout un nom (sensible à la casse).
    pub fn resoudre(&self, nom: &str) -> Resultat<Entree> {
        self.entrees
            .iter()
            .find(|(n, _)| *n == nom)
            .map(|(_, e)| *e)
            .ok_or_else(|| ErreurCalc::IdentifiantInconnu(nom.to_string()))
    }

    #[cfg(test)]
    pub fn noms(&self) -> impl Iterator<Item = &'static str> {
        self.entrees.iter().map(|(n, _)| *n)
    }
}

/* ------------------------ Helpers ------------------------ */

fn un_argument(args: &[Nombre]) -> Resultat<f64> {
    match args {
        [x] => Ok(x.to_f64()),
        _ => Err(ErreurCalc::syntaxe("un argument attendu")),
    }
}

/* ------------------------ Trigonométrie ------------------------ */

fn sin(args: &[Nombre]) -> Resultat<Nombre> {
    reel(un_argument(args)?.sin())
}

fn cos(args: &[Nombre]) -> Resultat<Nombre> {
    reel(un_argument(args)?.cos())
}

fn tan(args: &[Nombre]) -> Resultat<Nombre> {
    reel(un_argument(args)?.tan())
}

fn asin(args: &[Nombre]) -> Resultat<Nombre> {
    let x = un_argument(args)?;
    if !(-1.0..=1.0).contains(&x) {
        return Err(ErreurCalc::domaine("asin hors de [-1, 1]"));
    }
    reel(x.asin())
}

fn acos(args: &[Nombre]) -> Resultat<Nombre> {
    let x = un_argument(args)?;
    if !(-1.0..=1.0).contains(&x) {
        return Err(ErreurCalc::domaine("acos hors de [-1, 1]"));
    }
    reel(x.acos())
}

fn atan(args: &[Nombre]) -> Resultat<Nombre> {
    reel(un_argument(args)?.atan())
}

/* ------------------------ Racines ------------------------ */

fn sqrt(args: &[Nombre]) -> Resultat<Nombre> {
    let x = un_argument(args)?;
    if x < 0.0 {
        return Err(ErreurCalc::domaine("sqrt d’un nombre négatif"));
    }
    reel(x.sqrt())
}

/// Racine cubique réelle, signe conservé : cbrt(-8) = -2.
fn cbrt(args: &[Nombre]) -> Resultat<Nombre> {
    reel(un_argument(args)?.cbrt())
}

/// root(x, n) = x ** (1/n) ; x < 0 seulement pour n entier impair.
fn root(args: &[Nombre]) -> Resultat<Nombre> {
    let [x, n] = args else {
        return Err(ErreurCalc::syntaxe("root(x, n) attend deux arguments"));
    };

    if n.est_zero() {
        return Err(ErreurCalc::domaine("racine d’indice zéro"));
    }

    let (x, n_f) = (x.to_f64(), n.to_f64());
    if x >= 0.0 {
        return reel(x.powf(1.0 / n_f));
    }

    match n.en_i64() {
        Some(k) if k % 2 != 0 => reel(-(-x).powf(1.0 / n_f)),
        _ => Err(ErreurCalc::domaine("racine paire d’un nombre négatif")),
    }
}

/* ------------------------ Logarithmes ------------------------ */

fn ln(args: &[Nombre]) -> Resultat<Nombre> {
    let x = un_argument(args)?;
    if x <= 0.0 {
        return Err(ErreurCalc::domaine("ln d’un nombre négatif ou nul"));
    }
    reel(x.ln())
}

/// log(x) en base 10, log(x, b) en base b.
fn log(args: &[Nombre]) -> Resultat<Nombre> {
    let (x, base) = match args {
        [x] => (x.to_f64(), 10.0),
        [x, b] => (x.to_f64(), b.to_f64()),
        _ => return Err(ErreurCalc::syntaxe("log(x[, base]) attend 1 ou 2 arguments")),
    };

    if x <= 0.0 {
        return Err(ErreurCalc::domaine("log d’un nombre négatif ou nul"));
    }
    if base <= 0.0 || base == 1.0 {
        return Err(ErreurCalc::domaine("base de logarithme invalide"));
    }

    // bases usuelles : fonctions dédiées (log(1000) = 3 pile)
    let v = if base == 10.0 {
        x.log10()
    } else if base == 2.0 {
        x.log2()
    } else {
        x.ln() / base.ln()
    };
    reel(v)
}

fn exp(args: &[Nombre]) -> Resultat<Nombre> {
    reel(un_argument(args)?.exp())
}

/* ------------------------ Divers ------------------------ */

fn abs(args: &[Nombre]) -> Resultat<Nombre> {
    match args {
        [Nombre::Entier(n)] => match n.checked_abs() {
            Some(v) => Ok(Nombre::Entier(v)),
            None => reel((*n as f64).abs()),
        },
        [Nombre::Reel(x)] => reel(x.abs()),
        _ => Err(ErreurCalc::syntaxe("un argument attendu")),
    }
}

/// n! pour n entier >= 0 (5.0 accepté). Exact jusqu’à 20!, réel ensuite.
fn factorial(args: &[Nombre]) -> Resultat<Nombre> {
    let [x] = args else {
        return Err(ErreurCalc::syntaxe("un argument attendu"));
    };

    if !x.est_entier() || x.to_f64() < 0.0 {
        return Err(ErreurCalc::FactorielleInvalide);
    }
    // entier >= 0 hors i64 (1e300, 10**19) : trop grand, pas invalide
    let n = match x.en_i64() {
        Some(n) if n <= FACTORIELLE_MAX => n,
        _ => return Err(ErreurCalc::Depassement),
    };

    let mut acc = Nombre::Entier(1);
    for k in 2..=n {
        acc = acc.mul(Nombre::Entier(k))?;
    }
    Ok(acc)
}
