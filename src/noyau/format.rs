// src/noyau/format.rs
//
// Affichage d’un f64 (écran de la calculatrice)
// ---------------------------------------------
// - NaN / ±∞            -> "Error"
// - 0 (et -0)           -> "0"
// - entier dans ]-1e15, 1e15[ -> entier signé, sans point ni exposant
// - sinon               -> 9 chiffres significatifs, style printf "%.9g"
//
// Déterministe, indépendant de la locale (toujours '.' comme séparateur).

/// Jeton affiché quand le calcul échoue.
pub const JETON_ERREUR: &str = "Error";

/// Précision de l’affichage (chiffres significatifs).
pub const CHIFFRES_SIGNIFICATIFS: usize = 9;

/// Au-delà, un entier passe en notation générale (1e+15, …).
const BORNE_ENTIER: f64 = 1e15;

pub fn format_nombre(v: f64) -> String {
    if !v.is_finite() {
        return JETON_ERREUR.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    if v.fract() == 0.0 && v > -BORNE_ENTIER && v < BORNE_ENTIER {
        return format!("{}", v as i64);
    }

    let s = format_general(v, CHIFFRES_SIGNIFICATIFS);
    if s.contains('.') && !s.contains('e') {
        retirer_zeros(&s).to_string()
    } else {
        s
    }
}

/// Équivalent de "%.{p}g" (C) : notation fixe ou scientifique selon l’exposant
/// décimal APRÈS arrondi, zéros de queue retirés.
fn format_general(v: f64, p: usize) -> String {
    let p = p.max(1);

    // L’écriture scientifique arrondie donne l’exposant réel (9.999999999 -> 1e1).
    let sci = format!("{:.*e}", p - 1, v);
    let (mantisse, exposant) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };

    if exposant < -4 || exposant >= p as i32 {
        let signe = if exposant < 0 { '-' } else { '+' };
        format!(
            "{}e{signe}{:02}",
            retirer_zeros(mantisse),
            exposant.unsigned_abs()
        )
    } else {
        let decimales = (p as i32 - 1 - exposant) as usize;
        retirer_zeros(&format!("{v:.decimales$}")).to_string()
    }
}

/// "1.2300" -> "1.23" ; "4.000" -> "4" ; sans point : inchangé.
fn retirer_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
