// src/noyau/nombre.rs
//
// Valeur numérique du noyau : entier exact (i64) ou réel IEEE (f64).
//
// Règles:
// - Les littéraux sans '.' ni exposant sont des entiers.
// - + - * % et ** (exposant entier >= 0) restent entiers tant que ça tient en i64,
//   sinon on bascule en réel (pas de précision arbitraire).
// - '/' donne toujours un réel.
// - Un réel non fini n’est jamais renvoyé : NaN => Domaine, ±inf => Depassement.

use num_traits::{checked_pow, ToPrimitive, Zero};

use super::erreur::{ErreurCalc, Resultat};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nombre {
    Entier(i64),
    Reel(f64),
}

impl Nombre {
    pub fn to_f64(self) -> f64 {
        match self {
            Nombre::Entier(n) => n.to_f64().unwrap_or(f64::NAN),
            Nombre::Reel(x) => x,
        }
    }

    /// Vrai si la valeur est entière (tolère 5.0).
    pub fn est_entier(self) -> bool {
        match self {
            Nombre::Entier(_) => true,
            Nombre::Reel(x) => x.is_finite() && x.fract() == 0.0,
        }
    }

    /// Version entière exacte si possible (5.0 -> 5, 2.5 -> None).
    pub fn en_i64(self) -> Option<i64> {
        match self {
            Nombre::Entier(n) => Some(n),
            Nombre::Reel(x) if self.est_entier() => x.to_i64(),
            Nombre::Reel(_) => None,
        }
    }

    pub fn est_zero(self) -> bool {
        match self {
            Nombre::Entier(n) => n.is_zero(),
            Nombre::Reel(x) => x.is_zero(),
        }
    }

    /* ------------------------ Opérations ------------------------ */

    pub fn neg(self) -> Resultat<Nombre> {
        match self {
            Nombre::Entier(n) => match n.checked_neg() {
                Some(v) => Ok(Nombre::Entier(v)),
                None => reel(-self.to_f64()),
            },
            Nombre::Reel(x) => reel(-x),
        }
    }

    pub fn add(self, autre: Nombre) -> Resultat<Nombre> {
        if let (Nombre::Entier(a), Nombre::Entier(b)) = (self, autre) {
            if let Some(v) = a.checked_add(b) {
                return Ok(Nombre::Entier(v));
            }
        }
        reel(self.to_f64() + autre.to_f64())
    }

    pub fn sub(self, autre: Nombre) -> Resultat<Nombre> {
        if let (Nombre::Entier(a), Nombre::Entier(b)) = (self, autre) {
            if let Some(v) = a.checked_sub(b) {
                return Ok(Nombre::Entier(v));
            }
        }
        reel(self.to_f64() - autre.to_f64())
    }

    pub fn mul(self, autre: Nombre) -> Resultat<Nombre> {
        if let (Nombre::Entier(a), Nombre::Entier(b)) = (self, autre) {
            if let Some(v) = a.checked_mul(b) {
                return Ok(Nombre::Entier(v));
            }
        }
        reel(self.to_f64() * autre.to_f64())
    }

    /// Division réelle (toujours un réel, même 6/2).
    pub fn div(self, autre: Nombre) -> Resultat<Nombre> {
        if autre.est_zero() {
            return Err(ErreurCalc::domaine("division par zéro"));
        }
        reel(self.to_f64() / autre.to_f64())
    }

    /// Modulo "plancher" : le reste prend le signe du diviseur (-7 % 3 = 2).
    pub fn modulo(self, autre: Nombre) -> Resultat<Nombre> {
        if autre.est_zero() {
            return Err(ErreurCalc::domaine("modulo par zéro"));
        }

        if let (Nombre::Entier(a), Nombre::Entier(b)) = (self, autre) {
            if let Some(r) = a.checked_rem(b) {
                let r = if r != 0 && (r < 0) != (b < 0) { r + b } else { r };
                return Ok(Nombre::Entier(r));
            }
        }

        let (a, b) = (self.to_f64(), autre.to_f64());
        let r = a % b;
        let r = if r != 0.0 && (r < 0.0) != (b < 0.0) { r + b } else { r };
        reel(r)
    }

    /// Puissance `self ** exposant`.
    pub fn puissance(self, exposant: Nombre) -> Resultat<Nombre> {
        if self.est_zero() && exposant.to_f64() < 0.0 {
            return Err(ErreurCalc::domaine("zéro élevé à une puissance négative"));
        }

        if let (Nombre::Entier(a), Nombre::Entier(n)) = (self, exposant) {
            if let Ok(n) = usize::try_from(n) {
                if let Some(v) = checked_pow(a, n) {
                    return Ok(Nombre::Entier(v));
                }
            }
        }

        let (a, b) = (self.to_f64(), exposant.to_f64());
        if a < 0.0 && b.fract() != 0.0 {
            // pas de nombres complexes
            return Err(ErreurCalc::domaine("base négative et exposant non entier"));
        }
        reel(a.powf(b))
    }
}

/// Emballe un f64 en refusant NaN / ±inf.
pub fn reel(x: f64) -> Resultat<Nombre> {
    if x.is_nan() {
        return Err(ErreurCalc::domaine("résultat non défini"));
    }
    if x.is_infinite() {
        return Err(ErreurCalc::Depassement);
    }
    Ok(Nombre::Reel(x))
}
