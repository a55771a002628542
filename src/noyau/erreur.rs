// src/noyau/erreur.rs
//
// Erreur arithmétique (une seule famille côté utilisateur : l’écran affiche "Error").
// La cause typée sert aux journaux et aux tests ; le moteur la convertit en état verrouillé.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("racine d’indice zéro")]
    RacineZero,

    #[error("inverse de zéro")]
    InverseDeZero,

    #[error("résultat non fini (NaN ou ±∞)")]
    NonFini,
}

/// Refuse NaN / ±∞ : tout résultat non fini devient une erreur.
pub fn verifier_fini(v: f64) -> Result<f64, ErreurCalcul> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalcul::NonFini)
    }
}
