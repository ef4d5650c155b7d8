//! Tests scientifiques (campagne) : propriétés observables du noyau.
//!
//! - factorielles 0..=20 exactes
//! - puissance "^" == "**"
//! - domaines (sqrt, ln) et bac à sable (noms inconnus)
//! - affichage entier des réels entiers
//! - mémoire "Ans" : suit les succès, ignore les échecs
//!
//! Choix documentés ici :
//! - "(2+3)!" est REFUSÉ (FactorielleMalformee) : seul le littéral juste avant '!' compte.
//! - cbrt est la racine cubique réelle : cbrt(-8) = -2 (pas d’erreur, pas de complexe).

use std::time::{Duration, Instant};

use super::{evaluer, formater_resultat, pretraiter, Calculatrice, ErreurCalc, EspaceNoms, Nombre};

fn calcule(brut: &str) -> Result<Nombre, ErreurCalc> {
    let canon = pretraiter(brut)?;
    evaluer(&canon, &EspaceNoms::standard())
}

fn affiche(brut: &str) -> String {
    let v = calcule(brut).unwrap_or_else(|e| panic!("expr={brut:?} err={e}"));
    formater_resultat(v)
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Factorielles ------------------------ */

#[test]
fn sci_factorielles_0_a_20() {
    let mut attendu: i64 = 1;
    for n in 0..=20_i64 {
        if n > 0 {
            attendu *= n;
        }
        assert_eq!(
            calcule(&format!("{n}!")),
            Ok(Nombre::Entier(attendu)),
            "n={n}"
        );
    }
}

#[test]
fn sci_factorielles_de_base() {
    assert_eq!(affiche("3!"), "6");
    assert_eq!(affiche("0!"), "1");
    assert_eq!(affiche("5.0!"), "120");
    assert_eq!(affiche("3!+4!"), "30");
    assert_eq!(affiche("2*3!"), "12");
}

#[test]
fn sci_factorielles_refusees() {
    assert_eq!(pretraiter("!3"), Err(ErreurCalc::FactorielleMalformee));
    assert_eq!(pretraiter("(!)"), Err(ErreurCalc::FactorielleMalformee));
    assert_eq!(calcule("2.5!"), Err(ErreurCalc::FactorielleInvalide));
    assert_eq!(calcule("factorial(-3)"), Err(ErreurCalc::FactorielleInvalide));
}

#[test]
fn sci_factorielles_geantes() {
    assert_eq!(calcule("factorial(1e300)"), Err(ErreurCalc::Depassement));
    assert_eq!(calcule("factorial(10**19)"), Err(ErreurCalc::Depassement));
    assert_eq!(calcule("171!"), Err(ErreurCalc::Depassement));
}

#[test]
fn sci_factorielle_de_parentheses_non_supportee() {
    // limite volontaire : pas de factorielle d’une sous-expression
    assert_eq!(calcule("(2+3)!"), Err(ErreurCalc::FactorielleMalformee));
    assert_eq!(calcule("pi!"), Err(ErreurCalc::FactorielleMalformee));
    // forme explicite toujours disponible
    assert_eq!(calcule("factorial(2+3)"), Ok(Nombre::Entier(120)));
}

/* ------------------------ Puissances ------------------------ */

#[test]
fn sci_puissance_canonique() {
    assert_eq!(calcule("2**10"), Ok(Nombre::Entier(1024)));
    assert_eq!(calcule("2^10"), Ok(Nombre::Entier(1024)));
    assert_eq!(calcule("2^3^2"), calcule("2**3**2"));
    assert_eq!(affiche("10^-2"), "0.01");
}

#[test]
fn sci_idempotence_pretraitement() {
    for s in [
        "2**10",
        "sqrt(16)+log(8, 2)",
        "factorial(4)/2",
        "-(1.5e3 - e) * pi",
        "",
    ] {
        let une = pretraiter(s).unwrap();
        assert_eq!(une, s);
        assert_eq!(pretraiter(&une).unwrap(), s);
    }
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn sci_racines() {
    assert_eq!(affiche("sqrt(16)"), "4");
    assert!(matches!(calcule("sqrt(-1)"), Err(ErreurCalc::Domaine(_))));

    // racine cubique réelle, signe conservé
    assert_eq!(affiche("cbrt(27)"), "3");
    assert_eq!(affiche("cbrt(-8)"), "-2");
    assert_eq!(affiche("root(-32, 5)"), "-2");
}

#[test]
fn sci_logarithmes() {
    assert_eq!(affiche("log(100)"), "2");
    assert_eq!(affiche("log(8, 2)"), "3");
    assert_eq!(affiche("ln(1)"), "0");
    assert!(matches!(calcule("ln(0)"), Err(ErreurCalc::Domaine(_))));
    assert!(matches!(calcule("log(-10)"), Err(ErreurCalc::Domaine(_))));
}

#[test]
fn sci_trig() {
    assert_eq!(affiche("sin(0)"), "0");
    assert_eq!(affiche("cos(0)"), "1");
    assert_eq!(affiche("atan(0)"), "0");
    let v = calcule("sin(pi/6)").unwrap().to_f64();
    assert!((v - 0.5).abs() < 1e-12);
    let v = calcule("4*atan(1)").unwrap().to_f64();
    assert!((v - std::f64::consts::PI).abs() < 1e-12);
}

#[test]
fn sci_bac_a_sable() {
    assert_eq!(
        calcule("foo(1)"),
        Err(ErreurCalc::IdentifiantInconnu("foo".into()))
    );
    assert_eq!(
        calcule("__import__(1)"),
        Err(ErreurCalc::IdentifiantInconnu("__import__".into()))
    );
    assert_eq!(
        calcule("Sin(1)"),
        Err(ErreurCalc::IdentifiantInconnu("Sin".into()))
    );
}

#[test]
fn sci_syntaxe() {
    for s in ["2+", "(1+2", "2 3", "*", "sqrt()", "1..2"] {
        assert!(
            matches!(calcule(s), Err(ErreurCalc::Syntaxe(_))),
            "attendu Syntaxe pour {s:?}"
        );
    }
}

/* ------------------------ Affichage ------------------------ */

#[test]
fn sci_affichage() {
    assert_eq!(affiche("6/2"), "3");
    assert_eq!(affiche("7/2"), "3.5");
    assert_eq!(affiche("1/4"), "0.25");
    assert_eq!(affiche("-7 % 3"), "2");
    assert_eq!(affiche("2**62"), "4611686018427387904");
}

/* ------------------------ Mémoire "Ans" ------------------------ */

#[test]
fn sci_derniere_reponse() {
    let mut calc = Calculatrice::default();
    assert_eq!(calc.derniere_reponse(), None);

    let v = calc.evaluer("sqrt(16)").unwrap();
    assert_eq!(calc.derniere_reponse(), v);

    // échecs : mémoire inchangée
    for s in ["sqrt(-1)", "!3", "foo(1)", "2+", "2.5!"] {
        assert!(calc.evaluer(s).is_err(), "attendu une erreur pour {s:?}");
        assert_eq!(calc.derniere_reponse(), Some(Nombre::Reel(4.0)));
    }

    // réutilisation textuelle (bouton Ans)
    let ans = formater_resultat(calc.derniere_reponse().unwrap());
    let v = calc.evaluer(&format!("{ans}*2")).unwrap();
    assert_eq!(v, Some(Nombre::Entier(8)));
    assert_eq!(calc.derniere_reponse(), Some(Nombre::Entier(8)));
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_somme_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = String::new();
    for k in 0..500 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("1/2");
        budget(t0, max);
    }

    assert_eq!(affiche(&expr), "250");
}

#[test]
fn sci_stress_imbrication_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // imbrication raisonnable : doit passer
    let mut expr = "16".to_string();
    for _ in 0..40 {
        expr = format!("abs({expr})");
        budget(t0, max);
    }
    assert_eq!(affiche(&expr), "16");

    // imbrication abusive : refusée proprement (pas de débordement de pile)
    let abus = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(calcule(&abus), Err(ErreurCalc::Syntaxe(_))));
    budget(t0, max);
}

#[test]
fn sci_stress_longue_somme_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2_000);

    let mut calc = Calculatrice::default();
    calc.set_derniere_reponse(Nombre::Entier(7));

    // expression plate très longue : refusée proprement, la session survit
    for n in [20_000, 200_000] {
        let somme = vec!["1"; n].join("+");
        assert!(matches!(calc.evaluer(&somme), Err(ErreurCalc::Syntaxe(_))), "n={n}");
        assert_eq!(calc.derniere_reponse(), Some(Nombre::Entier(7)));
        budget(t0, max);
    }

    let produit = vec!["1"; 20_000].join("*");
    assert!(matches!(calcule(&produit), Err(ErreurCalc::Syntaxe(_))));

    // longueur raisonnable : calculée
    assert_eq!(calc.evaluer(&vec!["1"; 1_000].join("+")), Ok(Some(Nombre::Entier(1_000))));
    budget(t0, max);
}
