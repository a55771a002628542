// src/main.rs
//
// Calculatrix: point d’entrée NATIF + WEB (WASM)
// -----------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
// - NATIF seulement            : ligne de commande (clap), config TOML, journaux (tracing)
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d’entrée seulement (natif + web)

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod config;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrix";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;

    use clap::Parser;
    use tracing::{info, warn};
    use tracing_subscriber::EnvFilter;

    use crate::config::{Angle, ConfigCalc, Disposition};

    /// Calculatrice standard / scientifique.
    #[derive(Debug, Parser)]
    #[command(version, about)]
    pub struct Args {
        /// Fichier de configuration TOML.
        #[arg(long, value_name = "FICHIER")]
        pub config: Option<PathBuf>,

        /// Démarrer en radians (sinon : valeur du fichier, puis degrés).
        #[arg(long)]
        pub radians: bool,

        /// Démarrer sur le pavé standard.
        #[arg(long)]
        pub standard: bool,
    }

    pub fn init_journaux() {
        let filtre = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("calculatrix=info"));
        tracing_subscriber::fmt().with_env_filter(filtre).init();
    }

    /// Fichier (s’il y en a un) puis drapeaux de la ligne de commande.
    /// Un fichier illisible ou invalide n’empêche pas de démarrer.
    pub fn config_effective(args: &Args) -> ConfigCalc {
        let mut config = match &args.config {
            Some(chemin) => match ConfigCalc::charger(chemin) {
                Ok(c) => {
                    info!(chemin = %chemin.display(), "configuration chargée");
                    c
                }
                Err(e) => {
                    warn!(erreur = %e, "configuration ignorée, valeurs par défaut");
                    ConfigCalc::default()
                }
            },
            None => ConfigCalc::default(),
        };

        if args.radians {
            config.angle = Angle::Radians;
        }
        if args.standard {
            config.disposition = Disposition::Standard;
        }
        config
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    natif::init_journaux();
    let args = natif::Args::parse();
    let config = natif::config_effective(&args);
    tracing::debug!(?config, "démarrage");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([620.0, 460.0])
            .with_min_inner_size([320.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::depuis_config(&config)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// Pas de fichier de configuration côté web : valeurs par défaut.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
