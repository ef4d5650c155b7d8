// src/noyau/format.rs
//
// Affichage d’un résultat (aucun calcul ici).
// - entier                 -> chiffres
// - réel à valeur entière  -> sans partie décimale (6/2 -> "3", pas "3.0")
// - autre réel             -> conversion par défaut de f64

use super::nombre::Nombre;

pub fn formater_resultat(n: Nombre) -> String {
    match n {
        Nombre::Entier(v) => v.to_string(),
        Nombre::Reel(x) if n.est_entier() => {
            // évite "-0"
            if x == 0.0 {
                "0".to_string()
            } else {
                format!("{x:.0}")
            }
        }
        Nombre::Reel(x) => x.to_string(),
    }
}
