//! Noyau de la calculatrice (sans vue)
//!
//! Organisation interne :
//! - erreur.rs     : cause typée de l’erreur arithmétique
//! - format.rs     : f64 -> texte d’écran (9 chiffres significatifs)
//! - operation.rs  : opérations binaires (+ − × ÷ xʸ ʸ√x EE)
//! - fonctions.rs  : fonctions unaires scientifiques + constantes
//! - moteur.rs     : machine à états (touches -> écran)

pub mod erreur;
pub mod fonctions;
pub mod format;
pub mod moteur;
pub mod operation;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use fonctions::{Constante, FonctionSci};
pub use moteur::{Enchainement, MoteurCalc, Saisie};
pub use operation::Operation;
