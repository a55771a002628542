//! src/noyau/moteur.rs
//!
//! Moteur de la calculatrice (évaluation immédiate, gauche -> droite).
//!
//! Rôle : recevoir les touches une par une et tenir l’écran à jour.
//! Pas de priorité des opérateurs : `2 + 3 × 4 =` donne 20.
//!
//! Contrats :
//! - Chaque touche est une fonction TOTALE de l’état : jamais de panique, jamais de `Result`.
//!   Une touche illégale est un no-op (ou passe par un effacement implicite).
//! - L’écran contient soit un littéral lisible en f64, soit exactement "Error".
//! - Erreur <=> `Saisie::Erreur`, et l’erreur verrouille AC (le prochain effacement est total).
//! - Opération “en attente” et opération “active” (surlignée) sont le même champ.
//! - Profondeur des parenthèses = taille de la pile (dérivée, jamais stockée).

use std::fmt;

use serde::Deserialize;
use tracing::{debug, trace};

use super::erreur::ErreurCalcul;
use super::fonctions::{Constante, FonctionSci};
use super::format::{format_nombre, JETON_ERREUR};
use super::operation::{appliquer, Operation};

/// Nombre max de chiffres tapés pour un opérande (signe et point exclus).
pub const MAX_CHIFFRES_SAISIE: usize = 9;

/// Où en est la saisie de l’opérande courant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Saisie {
    /// Écran “posé” (démarrage, après un opérateur, après parenthèse ouvrante).
    #[default]
    Repos,
    /// L’utilisateur compose un littéral (chiffres / point / signe).
    EnSaisie,
    /// Résultat tout juste produit (=, %, fonction, constante, MR, parenthèse fermante).
    JusteEvalue,
    /// "Error" à l’écran : seules C/AC ou une nouvelle saisie en sortent.
    Erreur,
}

/// Quand une nouvelle opération enchaîne-t-elle l’opération en attente ?
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enchainement {
    /// En saisie OU juste après un résultat (mode scientifique).
    #[default]
    Large,
    /// Seulement en saisie.
    Strict,
}

/// Ce que la vue lit après chaque touche.
#[derive(Clone, Debug, PartialEq)]
pub struct Apercu {
    pub affichage: String,
    pub all_clear: bool,
    pub operation_active: Option<Operation>,
    pub seconde_fonction: bool,
    pub radians: bool,
    pub profondeur_parentheses: usize,
    pub memoire: f64,
}

type Observateur = Box<dyn FnMut(&Apercu)>;

/// Contexte extérieur sauvé à l’ouverture d’une parenthèse.
#[derive(Clone, Copy, Debug)]
struct Contexte {
    accumulateur: f64,
    operation: Option<Operation>,
}

pub struct MoteurCalc {
    affichage: String,
    saisie: Saisie,
    all_clear: bool,

    seconde_fonction: bool,
    radians: bool,
    memoire: f64,

    accumulateur: f64,
    operation: Option<Operation>,

    // pour “= = =”
    dernier_operande: f64,
    derniere_operation: Option<Operation>,

    parentheses: Vec<Contexte>,
    enchainement: Enchainement,

    observateurs: Vec<Observateur>,
}

impl Default for MoteurCalc {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            saisie: Saisie::Repos,
            all_clear: true,
            seconde_fonction: false,
            radians: false,
            memoire: 0.0,
            accumulateur: 0.0,
            operation: None,
            dernier_operande: 0.0,
            derniere_operation: None,
            parentheses: Vec::new(),
            enchainement: Enchainement::default(),
            observateurs: Vec::new(),
        }
    }
}

impl fmt::Debug for MoteurCalc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoteurCalc")
            .field("affichage", &self.affichage)
            .field("saisie", &self.saisie)
            .field("all_clear", &self.all_clear)
            .field("accumulateur", &self.accumulateur)
            .field("operation", &self.operation)
            .field("parentheses", &self.parentheses.len())
            .finish_non_exhaustive()
    }
}

impl MoteurCalc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_radians(mut self, radians: bool) -> Self {
        self.radians = radians;
        self
    }

    pub fn avec_enchainement(mut self, enchainement: Enchainement) -> Self {
        self.enchainement = enchainement;
        self
    }

    /// Enregistre un observateur, appelé après chaque touche avec l’aperçu à jour.
    pub fn abonner(&mut self, observateur: impl FnMut(&Apercu) + 'static) {
        self.observateurs.push(Box::new(observateur));
    }

    /* ------------------------ Lecture (vue) ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn all_clear(&self) -> bool {
        self.all_clear
    }

    pub fn operation_active(&self) -> Option<Operation> {
        self.operation
    }

    pub fn seconde_fonction(&self) -> bool {
        self.seconde_fonction
    }

    pub fn radians(&self) -> bool {
        self.radians
    }

    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    pub fn profondeur_parentheses(&self) -> usize {
        self.parentheses.len()
    }

    pub fn saisie(&self) -> Saisie {
        self.saisie
    }

    #[cfg(test)]
    pub fn en_saisie(&self) -> bool {
        self.saisie == Saisie::EnSaisie
    }

    #[cfg(test)]
    pub fn juste_evalue(&self) -> bool {
        self.saisie == Saisie::JusteEvalue
    }

    pub fn en_erreur(&self) -> bool {
        self.saisie == Saisie::Erreur
    }

    /// Valeur numérique de l’écran ("Error" se lit 0).
    pub fn valeur_affichee(&self) -> f64 {
        self.affichage.parse().unwrap_or(0.0)
    }

    pub fn apercu(&self) -> Apercu {
        Apercu {
            affichage: self.affichage.clone(),
            all_clear: self.all_clear,
            operation_active: self.operation,
            seconde_fonction: self.seconde_fonction,
            radians: self.radians,
            profondeur_parentheses: self.parentheses.len(),
            memoire: self.memoire,
        }
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre 0–9 (autre valeur : ignorée).
    pub fn input_chiffre(&mut self, d: u8) {
        if d > 9 {
            debug!(d, "chiffre hors 0–9 ignoré");
            return;
        }
        self.sortir_erreur();

        if self.saisie == Saisie::EnSaisie {
            match self.affichage.as_str() {
                "0" => self.affichage = d.to_string(),
                "-0" => self.affichage = format!("-{d}"),
                _ => {
                    // au plafond : le chiffre est simplement perdu
                    if compter_chiffres(&self.affichage) < MAX_CHIFFRES_SAISIE {
                        self.affichage.push(char::from(b'0' + d));
                    }
                }
            }
        } else {
            self.affichage = d.to_string();
            self.saisie = Saisie::EnSaisie;
        }
        self.all_clear = false;

        trace!(affichage = %self.affichage, "chiffre");
        self.notifier();
    }

    pub fn input_decimal(&mut self) {
        self.sortir_erreur();

        if self.saisie != Saisie::EnSaisie {
            self.affichage = "0.".to_string();
            self.saisie = Saisie::EnSaisie;
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
        self.all_clear = false;

        self.notifier();
    }

    /// Opérateur binaire. Enchaîne l’opération en attente si besoin (pas de priorité).
    pub fn input_operation(&mut self, op: Operation) {
        self.sortir_erreur();

        match self.operation.filter(|_| self.doit_enchainer()) {
            Some(precedente) => {
                let operande = self.valeur_affichee();
                if !self.effectuer(precedente, operande) {
                    // L’écran reste sur "Error" mais le nouvel opérateur est posé.
                    self.operation = Some(op);
                    self.notifier();
                    return;
                }
            }
            // Opérateur pressé deux fois : on remplace, sans recalculer.
            None => self.accumulateur = self.valeur_affichee(),
        }

        self.operation = Some(op);
        self.saisie = Saisie::Repos;

        debug!(op = op.symbole(), acc = self.accumulateur, "opération");
        self.notifier();
    }

    pub fn input_egal(&mut self) {
        if self.saisie == Saisie::Erreur {
            self.clear_interne();
            self.notifier();
            return;
        }

        if let Some(op) = self.operation.take() {
            let operande = self.valeur_affichee();
            self.derniere_operation = Some(op);
            self.dernier_operande = operande;
            if !self.effectuer(op, operande) {
                self.notifier();
                return;
            }
        } else if let Some(op) = self.derniere_operation {
            // “= =” : on rejoue la dernière opération sur l’écran courant
            self.accumulateur = self.valeur_affichee();
            if !self.effectuer(op, self.dernier_operande) {
                self.notifier();
                return;
            }
        }

        self.operation = None;
        self.saisie = Saisie::JusteEvalue;

        debug!(affichage = %self.affichage, "égal");
        self.notifier();
    }

    /// C puis AC : le premier appui efface l’entrée, le second (déjà AC) remet tout à zéro.
    pub fn input_clear(&mut self) {
        self.clear_interne();
        self.notifier();
    }

    /// ± : bascule texte en saisie, recalcul formaté sinon.
    pub fn input_negation(&mut self) {
        match self.saisie {
            Saisie::Erreur => return,
            Saisie::EnSaisie => {
                if let Some(reste) = self.affichage.strip_prefix('-') {
                    self.affichage = reste.to_string();
                } else {
                    self.affichage.insert(0, '-');
                }
            }
            Saisie::Repos | Saisie::JusteEvalue => {
                if self.affichage == "0" {
                    self.affichage = "-0".to_string();
                    self.saisie = Saisie::EnSaisie;
                    self.all_clear = false;
                } else {
                    self.affichage = format_nombre(-self.valeur_affichee());
                }
            }
        }

        self.notifier();
    }

    /// % : relatif à l’accumulateur après + / −, absolu sinon.
    pub fn input_pourcent(&mut self) {
        if self.saisie == Saisie::Erreur {
            return;
        }

        let courant = self.valeur_affichee();
        let v = match self.operation {
            Some(op) if op.est_additive() => self.accumulateur * courant / 100.0,
            _ => courant / 100.0,
        };
        self.poser_resultat(v);

        self.notifier();
    }

    /* ------------------------ Mémoire ------------------------ */

    pub fn memoire_clear(&mut self) {
        self.memoire = 0.0;
        self.notifier();
    }

    pub fn memoire_add(&mut self) {
        self.memoire += self.valeur_affichee();
        self.notifier();
    }

    pub fn memoire_sub(&mut self) {
        self.memoire -= self.valeur_affichee();
        self.notifier();
    }

    pub fn memoire_recall(&mut self) {
        self.poser_resultat(self.memoire);
        self.notifier();
    }

    /* ------------------------ Parenthèses ------------------------ */

    pub fn ouvrir_parenthese(&mut self) {
        self.sortir_erreur();

        self.parentheses.push(Contexte {
            accumulateur: self.accumulateur,
            operation: self.operation,
        });
        self.accumulateur = 0.0;
        self.operation = None;
        self.saisie = Saisie::Repos;

        debug!(profondeur = self.parentheses.len(), "parenthèse ouverte");
        self.notifier();
    }

    pub fn fermer_parenthese(&mut self) {
        if self.parentheses.is_empty() || self.saisie == Saisie::Erreur {
            return;
        }

        if let Some(op) = self.operation.take() {
            let operande = self.valeur_affichee();
            if !self.effectuer(op, operande) {
                self.notifier();
                return;
            }
        }

        let sous_resultat = self.valeur_affichee();
        if let Some(exterieur) = self.parentheses.pop() {
            self.accumulateur = exterieur.accumulateur;
            self.operation = exterieur.operation;
        }
        if self.poser_resultat(sous_resultat) {
            self.all_clear = false;
        }

        debug!(profondeur = self.parentheses.len(), sous_resultat, "parenthèse fermée");
        self.notifier();
    }

    /* ------------------------ Scientifique ------------------------ */

    pub fn input_fonction(&mut self, f: FonctionSci) {
        if self.saisie == Saisie::Erreur {
            return;
        }

        match f.evaluer(self.valeur_affichee(), self.radians) {
            Ok(v) => {
                if self.poser_resultat(v) {
                    self.all_clear = false;
                }
            }
            Err(cause) => self.entrer_erreur(cause),
        }

        self.notifier();
    }

    /// π, e, Rand : remplacent l’écran (même depuis "Error").
    pub fn input_constante(&mut self, c: Constante) {
        if self.poser_resultat(c.valeur()) {
            self.all_clear = false;
        }
        self.notifier();
    }

    pub fn toggle_seconde(&mut self) {
        self.seconde_fonction = !self.seconde_fonction;
        self.notifier();
    }

    pub fn toggle_rad_deg(&mut self) {
        self.radians = !self.radians;
        self.notifier();
    }

    /* ------------------------ Interne ------------------------ */

    fn doit_enchainer(&self) -> bool {
        match self.enchainement {
            Enchainement::Large => {
                matches!(self.saisie, Saisie::EnSaisie | Saisie::JusteEvalue)
            }
            Enchainement::Strict => self.saisie == Saisie::EnSaisie,
        }
    }

    /// Effacement implicite avant une nouvelle saisie.
    fn sortir_erreur(&mut self) {
        if self.saisie == Saisie::Erreur {
            self.clear_interne();
        }
    }

    fn clear_interne(&mut self) {
        if self.all_clear {
            self.accumulateur = 0.0;
            self.operation = None;
            self.derniere_operation = None;
            self.dernier_operande = 0.0;
            self.parentheses.clear();
        }
        self.affichage = "0".to_string();
        self.saisie = Saisie::Repos;
        self.all_clear = true;
    }

    /// acc (op) opérande -> accumulateur + écran. `false` si on est passé en erreur.
    fn effectuer(&mut self, op: Operation, operande: f64) -> bool {
        match appliquer(op, self.accumulateur, operande) {
            Ok(r) => {
                self.accumulateur = r;
                self.affichage = format_nombre(r);
                true
            }
            Err(cause) => {
                // Seuls ÷ 0 et ʸ√ 0 abandonnent l’opération en attente.
                if matches!(cause, ErreurCalcul::DivisionParZero | ErreurCalcul::RacineZero) {
                    self.operation = None;
                }
                self.entrer_erreur(cause);
                false
            }
        }
    }

    /// Pose un résultat à l’écran (état “juste évalué”). `false` si non fini.
    fn poser_resultat(&mut self, v: f64) -> bool {
        if !v.is_finite() {
            self.entrer_erreur(ErreurCalcul::NonFini);
            return false;
        }
        self.affichage = format_nombre(v);
        self.saisie = Saisie::JusteEvalue;
        true
    }

    fn entrer_erreur(&mut self, cause: ErreurCalcul) {
        debug!(%cause, "erreur arithmétique");
        self.affichage = JETON_ERREUR.to_string();
        self.saisie = Saisie::Erreur;
        self.all_clear = true;
    }

    fn notifier(&mut self) {
        if self.observateurs.is_empty() {
            return;
        }
        let apercu = self.apercu();
        for obs in self.observateurs.iter_mut() {
            obs(&apercu);
        }
    }
}

/// Chiffres d’un littéral, sans signe ni point.
fn compter_chiffres(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}
