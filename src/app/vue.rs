// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus), Backspace géré par le champ
// - Pavé 6 colonnes : fonctions, constantes, chiffres, opérateurs, Ans, =

use eframe::egui;

use super::etat::AppCalc;

/// Touches du pavé, dans l’ordre d’affichage (6 par ligne).
const TOUCHES: &[(&str, Touche)] = &[
    ("C", Touche::Action(Action::Clear)),
    ("DEL", Touche::Action(Action::Backspace)),
    ("(", Touche::Texte("(")),
    (")", Touche::Texte(")")),
    ("π", Touche::Texte("pi")),
    ("e", Touche::Texte("e")),
    ("sin", Touche::Texte("sin(")),
    ("cos", Touche::Texte("cos(")),
    ("tan", Touche::Texte("tan(")),
    ("asin", Touche::Texte("asin(")),
    ("acos", Touche::Texte("acos(")),
    ("atan", Touche::Texte("atan(")),
    ("x^y", Touche::Texte("**")),
    ("x²", Touche::Texte("**2")),
    ("x³", Touche::Texte("**3")),
    ("sqrt", Touche::Texte("sqrt(")),
    ("cbrt", Touche::Texte("cbrt(")),
    ("root", Touche::Texte("root(")),
    ("7", Touche::Texte("7")),
    ("8", Touche::Texte("8")),
    ("9", Touche::Texte("9")),
    ("/", Touche::Texte("/")),
    ("%", Touche::Texte("%")),
    ("!", Touche::Texte("!")),
    ("4", Touche::Texte("4")),
    ("5", Touche::Texte("5")),
    ("6", Touche::Texte("6")),
    ("*", Touche::Texte("*")),
    ("ln", Touche::Texte("ln(")),
    ("log", Touche::Texte("log(")),
    ("1", Touche::Texte("1")),
    ("2", Touche::Texte("2")),
    ("3", Touche::Texte("3")),
    ("-", Touche::Texte("-")),
    ("10^x", Touche::Texte("10**")),
    ("e^x", Touche::Texte("exp(")),
    ("0", Touche::Texte("0")),
    (".", Touche::Texte(".")),
    ("±", Touche::Action(Action::Signe)),
    ("+", Touche::Texte("+")),
    ("Ans", Touche::Action(Action::Reponse)),
    ("=", Touche::Action(Action::Egal)),
];

const COLONNES: usize = 6;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(4.0, 4.0);

        self.ui_affichage(ui);

        ui.add_space(12.0);

        self.ui_pave(ui);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .font(egui::TextStyle::Heading)
                .id_source("affichage_calc"),
        );

        // Si on a cliqué un bouton, on redonne le focus au champ
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        // Un TextEdit singleline perd le focus sur Enter : on teste lost_focus.
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.evaluer_entree();
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calc_sci")
            .num_columns(COLONNES)
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                for (i, (label, touche)) in TOUCHES.iter().enumerate() {
                    self.bouton(ui, label, *touche);
                    if (i + 1) % COLONNES == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([64.0, 36.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Texte(t) => self.inserer(t),
            Touche::Action(Action::Clear) => self.clear_entree(),
            Touche::Action(Action::Backspace) => self.backspace_entree(),
            Touche::Action(Action::Signe) => self.basculer_signe(),
            Touche::Action(Action::Reponse) => self.inserer_reponse(),
            Touche::Action(Action::Egal) => self.evaluer_entree(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Texte(&'static str),
    Action(Action),
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Clear,
    Backspace,
    Signe,
    Reponse,
    Egal,
}
