// src/app.rs
//
// Calculatrix: module App (racine)
// ---------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (quand aucun champ texte n’a le focus, il n’y en a pas ici) :
// - 0–9 : chiffres ; '.' passe par les boutons
// - Enter : "=" ; Escape : C/AC

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::{AppCalc, Touche};

use eframe::egui;

const TOUCHES_CHIFFRES: [(egui::Key, u8); 10] = [
    (egui::Key::Num0, 0),
    (egui::Key::Num1, 1),
    (egui::Key::Num2, 2),
    (egui::Key::Num3, 3),
    (egui::Key::Num4, 4),
    (egui::Key::Num5, 5),
    (egui::Key::Num6, 6),
    (egui::Key::Num7, 7),
    (egui::Key::Num8, 8),
    (egui::Key::Num9, 9),
];

impl AppCalc {
    /// Touches clavier de cette frame, dans un ordre stable.
    fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
        ctx.input(|i| {
            let mut out = Vec::new();
            for (key, d) in TOUCHES_CHIFFRES {
                if i.key_pressed(key) {
                    out.push(Touche::Chiffre(d));
                }
            }
            if i.key_pressed(egui::Key::Enter) {
                out.push(Touche::Egal);
            }
            if i.key_pressed(egui::Key::Escape) {
                out.push(Touche::Clear);
            }
            out
        })
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for t in Self::touches_clavier(ctx) {
            self.appuyer(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
