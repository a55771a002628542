//! src/app/etat.rs
//!
//! État UI (sans vue, sans arithmétique).
//!
//! Rôle : posséder le moteur, savoir quel pavé afficher, et router chaque touche
//! vers la bonne méthode du moteur (avec le bon argument).
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `MoteurCalc`.
//! - La touche “2nd” ne change que les libellés ; la fonction envoyée au moteur
//!   est résolue ici au moment de l’appui.

use tracing::debug;

use crate::config::{ConfigCalc, Disposition};
use crate::noyau::{Constante, FonctionSci, MoteurCalc, Operation};

/// Une touche du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Decimal,
    Operation(Operation),
    Egal,
    Clear,
    Negation,
    Pourcent,
    /// Fonction “de base” ; la variante 2nd est choisie selon l’état.
    Fonction(FonctionSci),
    Constante(Constante),
    OuvrirParenthese,
    FermerParenthese,
    MemoireClear,
    MemoireAdd,
    MemoireSub,
    MemoireRecall,
    Seconde,
    RadDeg,
    /// Bascule standard <-> scientifique (vue seulement).
    Disposition,
}

#[derive(Debug)]
pub struct AppCalc {
    pub moteur: MoteurCalc,
    pub disposition: Disposition,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::depuis_config(&ConfigCalc::default())
    }
}

impl AppCalc {
    pub fn depuis_config(config: &ConfigCalc) -> Self {
        let mut moteur = MoteurCalc::new()
            .avec_radians(config.radians())
            .avec_enchainement(config.enchainement);

        moteur.abonner(|a| {
            debug!(
                affichage = %a.affichage,
                all_clear = a.all_clear,
                parentheses = a.profondeur_parentheses,
                "écran"
            );
        });

        Self {
            moteur,
            disposition: config.disposition,
        }
    }

    /// Fonction réellement envoyée pour cette touche (tient compte de 2nd).
    pub fn fonction_effective(&self, f: FonctionSci) -> FonctionSci {
        if self.moteur.seconde_fonction() {
            f.seconde()
        } else {
            f
        }
    }

    /// Libellé “AC” / “C”.
    pub fn libelle_clear(&self) -> &'static str {
        if self.moteur.all_clear() {
            "AC"
        } else {
            "C"
        }
    }

    pub fn appuyer(&mut self, t: Touche) {
        let m = &mut self.moteur;
        match t {
            Touche::Chiffre(d) => m.input_chiffre(d),
            Touche::Decimal => m.input_decimal(),
            Touche::Operation(op) => m.input_operation(op),
            Touche::Egal => m.input_egal(),
            Touche::Clear => m.input_clear(),
            Touche::Negation => m.input_negation(),
            Touche::Pourcent => m.input_pourcent(),
            Touche::Fonction(f) => {
                let f = self.fonction_effective(f);
                self.moteur.input_fonction(f);
            }
            Touche::Constante(c) => m.input_constante(c),
            Touche::OuvrirParenthese => m.ouvrir_parenthese(),
            Touche::FermerParenthese => m.fermer_parenthese(),
            Touche::MemoireClear => m.memoire_clear(),
            Touche::MemoireAdd => m.memoire_add(),
            Touche::MemoireSub => m.memoire_sub(),
            Touche::MemoireRecall => m.memoire_recall(),
            Touche::Seconde => m.toggle_seconde(),
            Touche::RadDeg => m.toggle_rad_deg(),
            Touche::Disposition => {
                self.disposition = match self.disposition {
                    Disposition::Standard => Disposition::Scientifique,
                    Disposition::Scientifique => Disposition::Standard,
                };
            }
        }
    }
}
