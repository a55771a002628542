// src/noyau/fonctions.rs
//
// Fonctions scientifiques unaires + constantes
// --------------------------------------------
// - Ensemble FERMÉ (enum) : pas de “fonction inconnue” possible.
// - Trig directe : degrés -> radians sauf mode radians.
// - Trig inverse : radians -> degrés sauf mode radians.
// - Hyperboliques : jamais de conversion d’angle.

use std::f64::consts::{E, PI};

use super::erreur::{verifier_fini, ErreurCalcul};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FonctionSci {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Square,
    Cube,
    Sqrt,
    Cbrt,
    Reciprocal,
    Factorial,
    Exp,
    Exp10,
    Exp2,
    Ln,
    Log10,
    Log2,
}

impl FonctionSci {
    pub fn libelle(self) -> &'static str {
        use FonctionSci::*;
        match self {
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Asin => "sin⁻¹",
            Acos => "cos⁻¹",
            Atan => "tan⁻¹",
            Sinh => "sinh",
            Cosh => "cosh",
            Tanh => "tanh",
            Asinh => "sinh⁻¹",
            Acosh => "cosh⁻¹",
            Atanh => "tanh⁻¹",
            Square => "x²",
            Cube => "x³",
            Sqrt => "√x",
            Cbrt => "³√x",
            Reciprocal => "1/x",
            Factorial => "x!",
            Exp => "eˣ",
            Exp10 => "10ˣ",
            Exp2 => "2ˣ",
            Ln => "ln",
            Log10 => "log₁₀",
            Log2 => "log₂",
        }
    }

    /// Variante “2nd” de la touche (sin -> sin⁻¹, 10ˣ -> 2ˣ, …).
    /// Les touches sans seconde fonction restent identiques.
    pub fn seconde(self) -> Self {
        use FonctionSci::*;
        match self {
            Sin => Asin,
            Cos => Acos,
            Tan => Atan,
            Sinh => Asinh,
            Cosh => Acosh,
            Tanh => Atanh,
            Exp10 => Exp2,
            Log10 => Log2,
            autre => autre,
        }
    }

    /// Évalue f(x). `radians` ne concerne que la trig circulaire.
    pub fn evaluer(self, x: f64, radians: bool) -> Result<f64, ErreurCalcul> {
        use FonctionSci::*;

        let vers_rad = |a: f64| if radians { a } else { a * PI / 180.0 };
        let depuis_rad = |a: f64| if radians { a } else { a * 180.0 / PI };

        let r = match self {
            Sin => vers_rad(x).sin(),
            Cos => vers_rad(x).cos(),
            Tan => vers_rad(x).tan(),
            Asin => depuis_rad(x.asin()),
            Acos => depuis_rad(x.acos()),
            Atan => depuis_rad(x.atan()),
            Sinh => x.sinh(),
            Cosh => x.cosh(),
            Tanh => x.tanh(),
            Asinh => x.asinh(),
            Acosh => x.acosh(),
            Atanh => x.atanh(),
            Square => x * x,
            Cube => x * x * x,
            Sqrt => x.sqrt(),
            // racine cubique qui garde le signe
            Cbrt => {
                if x >= 0.0 {
                    x.powf(1.0 / 3.0)
                } else {
                    -(-x).powf(1.0 / 3.0)
                }
            }
            Reciprocal => {
                if x == 0.0 {
                    return Err(ErreurCalcul::InverseDeZero);
                }
                1.0 / x
            }
            Factorial => factorielle(x),
            Exp => x.exp(),
            Exp10 => 10f64.powf(x),
            Exp2 => 2f64.powf(x),
            Ln => x.ln(),
            Log10 => x.log10(),
            Log2 => x.ln() / 2f64.ln(),
        };
        verifier_fini(r)
    }
}

/// n! en f64 : négatif ou non entier -> NaN ; n > 170 -> +∞ (déborde f64).
pub fn factorielle(n: f64) -> f64 {
    if n < 0.0 {
        return f64::NAN;
    }
    if n == 0.0 || n == 1.0 {
        return 1.0;
    }
    if n != n.floor() {
        return f64::NAN;
    }
    if n > 170.0 {
        return f64::INFINITY;
    }

    let mut acc = 1.0;
    for k in 2..=(n as u32) {
        acc *= k as f64;
    }
    acc
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constante {
    Pi,
    E,
    /// Tirage uniforme dans [0, 1).
    Rand,
}

impl Constante {
    pub fn libelle(self) -> &'static str {
        match self {
            Constante::Pi => "π",
            Constante::E => "e",
            Constante::Rand => "Rand",
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => PI,
            Constante::E => E,
            Constante::Rand => rand::random::<f64>(),
        }
    }
}
