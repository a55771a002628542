// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran + pavé standard (4×5) ou scientifique (ligne de fonctions en plus)
// - L’opération en attente est surlignée ; “AC”/“C” suit le moteur
// - Aucune logique : chaque bouton produit une Touche
//
// Note :
// - Pas de Button::selected : on surligne via fill() (stable entre versions egui)

use eframe::egui;

use super::etat::{AppCalc, Touche};
use crate::config::Disposition;
use crate::noyau::{Constante, FonctionSci, Operation, Saisie};

const TAILLE_STD: [f32; 2] = [64.0, 48.0];
const TAILLE_SCI: [f32; 2] = [52.0, 34.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_bandeau(ui);
        ui.add_space(4.0);
        self.ui_ecran(ui);
        ui.add_space(8.0);

        // On collecte la touche pendant le dessin, on l’applique après.
        let mut appui: Option<Touche> = None;
        match self.disposition {
            Disposition::Standard => self.ui_pave_standard(ui, &mut appui),
            Disposition::Scientifique => self.ui_pave_scientifique(ui, &mut appui),
        }

        if let Some(t) = appui {
            self.appuyer(t);
        }
    }

    fn ui_bandeau(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let libelle = match self.disposition {
                Disposition::Standard => "Scientifique",
                Disposition::Scientifique => "Standard",
            };
            if ui.button(libelle).clicked() {
                self.appuyer(Touche::Disposition);
            }

            ui.separator();

            let m = &self.moteur;
            ui.monospace(if m.radians() { "Rad" } else { "Deg" });
            if m.seconde_fonction() {
                ui.monospace("2nd");
            }
            if m.memoire() != 0.0 {
                ui.monospace("M");
            }
            if m.profondeur_parentheses() > 0 {
                ui.monospace(format!("({})", m.profondeur_parentheses()));
            }
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut texte = egui::RichText::new(self.moteur.affichage())
                        .monospace()
                        .size(40.0);
                    if self.moteur.en_erreur() {
                        texte = texte.color(ui.visuals().error_fg_color);
                    } else if self.moteur.saisie() == Saisie::EnSaisie {
                        // nombre en cours de frappe : plus contrasté qu’un résultat
                        texte = texte.color(ui.visuals().strong_text_color());
                    }
                    ui.label(texte);
                });
            });
    }

    fn ui_pave_standard(&self, ui: &mut egui::Ui, appui: &mut Option<Touche>) {
        let t = TAILLE_STD;
        egui::Grid::new("pave_standard")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, t, self.libelle_clear(), Touche::Clear, appui);
                self.bouton(ui, t, "±", Touche::Negation, appui);
                self.bouton(ui, t, "%", Touche::Pourcent, appui);
                self.bouton_op(ui, t, Operation::Divide, appui);
                ui.end_row();

                self.ligne_chiffres(ui, t, [7, 8, 9], appui);
                self.bouton_op(ui, t, Operation::Multiply, appui);
                ui.end_row();

                self.ligne_chiffres(ui, t, [4, 5, 6], appui);
                self.bouton_op(ui, t, Operation::Subtract, appui);
                ui.end_row();

                self.ligne_chiffres(ui, t, [1, 2, 3], appui);
                self.bouton_op(ui, t, Operation::Add, appui);
                ui.end_row();

                self.bouton(ui, t, "0", Touche::Chiffre(0), appui);
                ui.label("");
                self.bouton(ui, t, ".", Touche::Decimal, appui);
                self.bouton(ui, t, "=", Touche::Egal, appui);
                ui.end_row();
            });
    }

    fn ui_pave_scientifique(&self, ui: &mut egui::Ui, appui: &mut Option<Touche>) {
        let t = TAILLE_SCI;
        egui::Grid::new("pave_scientifique")
            .num_columns(10)
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                // ( ) mc m+ m- mr AC ± % ÷
                self.bouton(ui, t, "(", Touche::OuvrirParenthese, appui);
                self.bouton(ui, t, ")", Touche::FermerParenthese, appui);
                self.bouton(ui, t, "mc", Touche::MemoireClear, appui);
                self.bouton(ui, t, "m+", Touche::MemoireAdd, appui);
                self.bouton(ui, t, "m-", Touche::MemoireSub, appui);
                self.bouton(ui, t, "mr", Touche::MemoireRecall, appui);
                self.bouton(ui, t, self.libelle_clear(), Touche::Clear, appui);
                self.bouton(ui, t, "±", Touche::Negation, appui);
                self.bouton(ui, t, "%", Touche::Pourcent, appui);
                self.bouton_op(ui, t, Operation::Divide, appui);
                ui.end_row();

                // 2nd x² x³ xʸ eˣ 10ˣ 7 8 9 ×
                let seconde = if self.moteur.seconde_fonction() {
                    egui::Button::new("2nd").fill(ui.visuals().selection.bg_fill)
                } else {
                    egui::Button::new("2nd")
                };
                if ui.add_sized(t, seconde).clicked() {
                    *appui = Some(Touche::Seconde);
                }
                self.bouton_fn(ui, t, FonctionSci::Square, appui);
                self.bouton_fn(ui, t, FonctionSci::Cube, appui);
                self.bouton_op(ui, t, Operation::Power, appui);
                self.bouton_fn(ui, t, FonctionSci::Exp, appui);
                self.bouton_fn(ui, t, FonctionSci::Exp10, appui);
                self.ligne_chiffres(ui, t, [7, 8, 9], appui);
                self.bouton_op(ui, t, Operation::Multiply, appui);
                ui.end_row();

                // 1/x √x ³√x ʸ√x ln log₁₀ 4 5 6 −
                self.bouton_fn(ui, t, FonctionSci::Reciprocal, appui);
                self.bouton_fn(ui, t, FonctionSci::Sqrt, appui);
                self.bouton_fn(ui, t, FonctionSci::Cbrt, appui);
                self.bouton_op(ui, t, Operation::YRoot, appui);
                self.bouton_fn(ui, t, FonctionSci::Ln, appui);
                self.bouton_fn(ui, t, FonctionSci::Log10, appui);
                self.ligne_chiffres(ui, t, [4, 5, 6], appui);
                self.bouton_op(ui, t, Operation::Subtract, appui);
                ui.end_row();

                // x! sin cos tan e EE 1 2 3 +
                self.bouton_fn(ui, t, FonctionSci::Factorial, appui);
                self.bouton_fn(ui, t, FonctionSci::Sin, appui);
                self.bouton_fn(ui, t, FonctionSci::Cos, appui);
                self.bouton_fn(ui, t, FonctionSci::Tan, appui);
                self.bouton_const(ui, t, Constante::E, appui);
                self.bouton_op(ui, t, Operation::Ee, appui);
                self.ligne_chiffres(ui, t, [1, 2, 3], appui);
                self.bouton_op(ui, t, Operation::Add, appui);
                ui.end_row();

                // Rad/Deg sinh cosh tanh π Rand 0 _ . =
                let angle = if self.moteur.radians() { "Deg" } else { "Rad" };
                self.bouton(ui, t, angle, Touche::RadDeg, appui);
                self.bouton_fn(ui, t, FonctionSci::Sinh, appui);
                self.bouton_fn(ui, t, FonctionSci::Cosh, appui);
                self.bouton_fn(ui, t, FonctionSci::Tanh, appui);
                self.bouton_const(ui, t, Constante::Pi, appui);
                self.bouton_const(ui, t, Constante::Rand, appui);
                self.bouton(ui, t, "0", Touche::Chiffre(0), appui);
                ui.label("");
                self.bouton(ui, t, ".", Touche::Decimal, appui);
                self.bouton(ui, t, "=", Touche::Egal, appui);
                ui.end_row();
            });
    }

    fn ligne_chiffres(
        &self,
        ui: &mut egui::Ui,
        taille: [f32; 2],
        chiffres: [u8; 3],
        appui: &mut Option<Touche>,
    ) {
        for d in chiffres {
            self.bouton(ui, taille, &d.to_string(), Touche::Chiffre(d), appui);
        }
    }

    fn bouton(
        &self,
        ui: &mut egui::Ui,
        taille: [f32; 2],
        label: &str,
        touche: Touche,
        appui: &mut Option<Touche>,
    ) {
        if ui.add_sized(taille, egui::Button::new(label)).clicked() {
            *appui = Some(touche);
        }
    }

    /// Opération binaire : surlignée tant qu’elle est en attente.
    fn bouton_op(
        &self,
        ui: &mut egui::Ui,
        taille: [f32; 2],
        op: Operation,
        appui: &mut Option<Touche>,
    ) {
        let mut b = egui::Button::new(op.symbole());
        if self.moteur.operation_active() == Some(op) {
            b = b.fill(ui.visuals().selection.bg_fill);
        }
        if ui.add_sized(taille, b).clicked() {
            *appui = Some(Touche::Operation(op));
        }
    }

    /// Fonction : le libellé suit 2nd (sin -> sin⁻¹, …).
    fn bouton_fn(
        &self,
        ui: &mut egui::Ui,
        taille: [f32; 2],
        f: FonctionSci,
        appui: &mut Option<Touche>,
    ) {
        let libelle = self.fonction_effective(f).libelle();
        self.bouton(ui, taille, libelle, Touche::Fonction(f), appui);
    }

    fn bouton_const(
        &self,
        ui: &mut egui::Ui,
        taille: [f32; 2],
        c: Constante,
        appui: &mut Option<Touche>,
    ) {
        self.bouton(ui, taille, c.libelle(), Touche::Constante(c), appui);
    }
}
