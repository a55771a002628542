// src/noyau/operation.rs
//
// Opérations binaires (en attente du second opérande).

use super::erreur::{verifier_fini, ErreurCalcul};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    YRoot,
    /// Saisie d’exposant : acc × 10^opérande.
    Ee,
}

impl Operation {
    /// Libellé de la touche.
    pub fn symbole(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Power => "xʸ",
            Operation::YRoot => "ʸ√x",
            Operation::Ee => "EE",
        }
    }

    /// Le pourcentage devient relatif à l’accumulateur pour + et −.
    pub fn est_additive(self) -> bool {
        matches!(self, Operation::Add | Operation::Subtract)
    }
}

/// acc (op) opérande.
///
/// Division par zéro et racine d’indice zéro sont refusées avant calcul ;
/// tout résultat NaN / ±∞ est refusé après.
pub fn appliquer(op: Operation, acc: f64, operande: f64) -> Result<f64, ErreurCalcul> {
    let r = match op {
        Operation::Add => acc + operande,
        Operation::Subtract => acc - operande,
        Operation::Multiply => acc * operande,
        Operation::Divide => {
            if operande == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            acc / operande
        }
        Operation::Power => acc.powf(operande),
        Operation::YRoot => {
            if operande == 0.0 {
                return Err(ErreurCalcul::RacineZero);
            }
            acc.powf(1.0 / operande)
        }
        Operation::Ee => acc * 10f64.powf(operande),
    };
    verifier_fini(r)
}
