//! src/config.rs
//!
//! Configuration (fichier TOML, tout optionnel).
//!
//! ```toml
//! angle = "radians"          # "degres" (défaut) | "radians"
//! disposition = "standard"   # "scientifique" (défaut) | "standard"
//! enchainement = "strict"    # "large" (défaut) | "strict"
//! ```
//!
//! Une clé absente garde sa valeur par défaut ; une valeur inconnue est une erreur.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::Enchainement;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Angle {
    #[default]
    Degres,
    Radians,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Pavé 4×5 classique.
    Standard,
    /// Pavé complet (trig, logs, mémoire, parenthèses).
    #[default]
    Scientifique,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigCalc {
    pub angle: Angle,
    pub disposition: Disposition,
    pub enchainement: Enchainement,
}

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de {}: {source}", .chemin.display())]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration TOML invalide: {0}")]
    Syntaxe(#[from] toml::de::Error),
}

impl ConfigCalc {
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurConfig> {
        Ok(toml::from_str(texte)?)
    }

    pub fn charger(chemin: &Path) -> Result<Self, ErreurConfig> {
        let texte = fs::read_to_string(chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        Self::depuis_toml(&texte)
    }

    pub fn radians(&self) -> bool {
        self.angle == Angle::Radians
    }
}
