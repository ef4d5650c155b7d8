// src/noyau/analyse.rs
//
// Jetons -> AST, par descente récursive.
//
// Grammaire (du plus faible au plus fort):
//   expr      := terme (('+' | '-') terme)*
//   terme     := unaire (('*' | '/' | '%') unaire)*
//   unaire    := ('+' | '-') unaire | puissance
//   puissance := primaire ('**' unaire)?
//   primaire  := NUM | IDENT | IDENT '(' args ')' | '(' expr ')'
//   args      := expr (',' expr)*
//
// Conséquences:
// - '**' est associatif à droite : 2**3**2 = 2**9
// - '**' lie plus fort qu’un moins à gauche : -2**2 = -(2**2)
// - un moins est permis dans l’exposant : 2**-1

use super::erreur::{ErreurCalc, Resultat};
use super::expr::Expr;
use super::jetons::Tok;

/// Garde-fou : imbrication maximale (parenthèses, moins unaires, exposants).
const PROFONDEUR_MAX: usize = 200;

/// Garde-fou : opérateurs binaires (+ - * / %) par expression.
/// L’arbre est gauche-profond : sa hauteur suit ce nombre.
const OPERATIONS_MAX: usize = 1_000;

/// Construit l’AST d’une suite complète de jetons.
pub fn analyser(jetons: &[Tok]) -> Resultat<Expr> {
    let mut a = Analyseur {
        jetons,
        pos: 0,
        profondeur: 0,
        operations: 0,
    };

    if jetons.is_empty() {
        return Err(ErreurCalc::syntaxe("expression vide"));
    }

    let e = a.expr()?;

    if let Some(t) = a.courant() {
        return Err(ErreurCalc::syntaxe(format!("jeton inattendu: {t:?}")));
    }
    Ok(e)
}

struct Analyseur<'a> {
    jetons: &'a [Tok],
    pos: usize,
    profondeur: usize,
    operations: usize,
}

impl Analyseur<'_> {
    fn courant(&self) -> Option<&Tok> {
        self.jetons.get(self.pos)
    }

    fn avancer(&mut self) -> Option<&Tok> {
        let jetons = self.jetons;
        let t = jetons.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    /// Consomme `attendu` s’il est là.
    fn accepter(&mut self, attendu: &Tok) -> bool {
        if self.courant() == Some(attendu) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn entrer(&mut self) -> Resultat<()> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(ErreurCalc::syntaxe("expression trop imbriquée"));
        }
        Ok(())
    }

    fn sortir(&mut self) {
        self.profondeur -= 1;
    }

    fn operation(&mut self) -> Resultat<()> {
        self.operations += 1;
        if self.operations > OPERATIONS_MAX {
            return Err(ErreurCalc::syntaxe("expression trop longue"));
        }
        Ok(())
    }

    fn expr(&mut self) -> Resultat<Expr> {
        let mut gauche = self.terme()?;
        loop {
            if self.accepter(&Tok::Plus) {
                self.operation()?;
                let droite = self.terme()?;
                gauche = Expr::Add(Box::new(gauche), Box::new(droite));
            } else if self.accepter(&Tok::Minus) {
                self.operation()?;
                let droite = self.terme()?;
                gauche = Expr::Sub(Box::new(gauche), Box::new(droite));
            } else {
                return Ok(gauche);
            }
        }
    }

    fn terme(&mut self) -> Resultat<Expr> {
        let mut gauche = self.unaire()?;
        loop {
            if self.accepter(&Tok::Star) {
                self.operation()?;
                let droite = self.unaire()?;
                gauche = Expr::Mul(Box::new(gauche), Box::new(droite));
            } else if self.accepter(&Tok::Slash) {
                self.operation()?;
                let droite = self.unaire()?;
                gauche = Expr::Div(Box::new(gauche), Box::new(droite));
            } else if self.accepter(&Tok::Percent) {
                self.operation()?;
                let droite = self.unaire()?;
                gauche = Expr::Mod(Box::new(gauche), Box::new(droite));
            } else {
                return Ok(gauche);
            }
        }
    }

    fn unaire(&mut self) -> Resultat<Expr> {
        if self.accepter(&Tok::Minus) {
            self.entrer()?;
            let x = self.unaire();
            self.sortir();
            return Ok(Expr::Neg(Box::new(x?)));
        }
        if self.accepter(&Tok::Plus) {
            self.entrer()?;
            let x = self.unaire();
            self.sortir();
            return x;
        }
        self.puissance()
    }

    fn puissance(&mut self) -> Resultat<Expr> {
        let base = self.primaire()?;
        if self.accepter(&Tok::DoubleStar) {
            self.entrer()?;
            let exposant = self.unaire();
            self.sortir();
            return Ok(Expr::Pow(Box::new(base), Box::new(exposant?)));
        }
        Ok(base)
    }

    fn primaire(&mut self) -> Resultat<Expr> {
        match self.avancer().cloned() {
            Some(Tok::Num(n)) => Ok(Expr::Num(n)),

            Some(Tok::Ident(nom)) => {
                if !self.accepter(&Tok::LPar) {
                    return Ok(Expr::Ident(nom));
                }
                self.entrer()?;
                let args = self.arguments();
                self.sortir();
                Ok(Expr::Appel(nom, args?))
            }

            Some(Tok::LPar) => {
                self.entrer()?;
                let e = self.expr();
                self.sortir();
                let e = e?;
                if !self.accepter(&Tok::RPar) {
                    return Err(ErreurCalc::syntaxe("parenthèse non fermée"));
                }
                Ok(e)
            }

            Some(t) => Err(ErreurCalc::syntaxe(format!("jeton inattendu: {t:?}"))),
            None => Err(ErreurCalc::syntaxe("opérande manquant")),
        }
    }

    /// Arguments d’un appel, '(' déjà consommée.
    fn arguments(&mut self) -> Resultat<Vec<Expr>> {
        if self.accepter(&Tok::RPar) {
            return Err(ErreurCalc::syntaxe("appel sans argument"));
        }

        let mut args = vec![self.expr()?];
        while self.accepter(&Tok::Comma) {
            args.push(self.expr()?);
        }

        if !self.accepter(&Tok::RPar) {
            return Err(ErreurCalc::syntaxe("parenthèse non fermée"));
        }
        Ok(args)
    }
}
