//! Tests fuzz safe : robustesse + déterminisme + invariants du moteur.
//!
//! But : marteler la machine à états sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de séquence bornée
//! - budget temps global
//! - invariants vérifiés APRÈS CHAQUE touche
//!
//! Rand est exclu des touches tirées (il casserait le déterminisme).

use std::time::{Duration, Instant};

use super::format::JETON_ERREUR;
use super::moteur::{Saisie, MAX_CHIFFRES_SAISIE};
use super::{Constante, Enchainement, FonctionSci, MoteurCalc, Operation};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Touches ------------------------ */

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(u8),
    Decimal,
    Op(Operation),
    Egal,
    Clear,
    Negation,
    Pourcent,
    Fonction(FonctionSci),
    Constante(Constante),
    Ouvrir,
    Fermer,
    MemAdd,
    MemSub,
    MemRecall,
    MemClear,
    Seconde,
    RadDeg,
}

const OPS: [Operation; 7] = [
    Operation::Add,
    Operation::Subtract,
    Operation::Multiply,
    Operation::Divide,
    Operation::Power,
    Operation::YRoot,
    Operation::Ee,
];

const FONCTIONS: [FonctionSci; 24] = [
    FonctionSci::Sin,
    FonctionSci::Cos,
    FonctionSci::Tan,
    FonctionSci::Asin,
    FonctionSci::Acos,
    FonctionSci::Atan,
    FonctionSci::Sinh,
    FonctionSci::Cosh,
    FonctionSci::Tanh,
    FonctionSci::Asinh,
    FonctionSci::Acosh,
    FonctionSci::Atanh,
    FonctionSci::Square,
    FonctionSci::Cube,
    FonctionSci::Sqrt,
    FonctionSci::Cbrt,
    FonctionSci::Reciprocal,
    FonctionSci::Factorial,
    FonctionSci::Exp,
    FonctionSci::Exp10,
    FonctionSci::Exp2,
    FonctionSci::Ln,
    FonctionSci::Log10,
    FonctionSci::Log2,
];

fn gen_touche(rng: &mut Rng) -> Touche {
    // chiffres sur-représentés : sinon on teste surtout des zéros
    match rng.pick(20) {
        0..=6 => Touche::Chiffre(rng.pick(10) as u8),
        7 => Touche::Decimal,
        8 | 9 => Touche::Op(OPS[rng.pick(OPS.len() as u32) as usize]),
        10 => Touche::Egal,
        11 => Touche::Clear,
        12 => Touche::Negation,
        13 => Touche::Pourcent,
        14 => Touche::Fonction(FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize]),
        15 => {
            if rng.pick(2) == 0 {
                Touche::Constante(Constante::Pi)
            } else {
                Touche::Constante(Constante::E)
            }
        }
        16 => Touche::Ouvrir,
        17 => Touche::Fermer,
        18 => match rng.pick(4) {
            0 => Touche::MemAdd,
            1 => Touche::MemSub,
            2 => Touche::MemRecall,
            _ => Touche::MemClear,
        },
        _ => {
            if rng.pick(2) == 0 {
                Touche::Seconde
            } else {
                Touche::RadDeg
            }
        }
    }
}

fn appuyer(m: &mut MoteurCalc, t: Touche) {
    match t {
        Touche::Chiffre(d) => m.input_chiffre(d),
        Touche::Decimal => m.input_decimal(),
        Touche::Op(op) => m.input_operation(op),
        Touche::Egal => m.input_egal(),
        Touche::Clear => m.input_clear(),
        Touche::Negation => m.input_negation(),
        Touche::Pourcent => m.input_pourcent(),
        Touche::Fonction(f) => m.input_fonction(f),
        Touche::Constante(c) => m.input_constante(c),
        Touche::Ouvrir => m.ouvrir_parenthese(),
        Touche::Fermer => m.fermer_parenthese(),
        Touche::MemAdd => m.memoire_add(),
        Touche::MemSub => m.memoire_sub(),
        Touche::MemRecall => m.memoire_recall(),
        Touche::MemClear => m.memoire_clear(),
        Touche::Seconde => m.toggle_seconde(),
        Touche::RadDeg => m.toggle_rad_deg(),
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants(m: &MoteurCalc, ouvertures: usize, trace: &[Touche]) {
    let ecran = m.affichage();

    // Erreur <=> jeton, et l’erreur verrouille AC
    assert_eq!(
        m.en_erreur(),
        ecran == JETON_ERREUR,
        "écran={ecran:?} saisie={:?} trace={trace:?}",
        m.saisie()
    );
    if m.en_erreur() {
        assert!(m.all_clear(), "erreur sans AC, trace={trace:?}");
    } else {
        // hors erreur : l’écran se relit toujours en f64 fini
        let v: f64 = ecran
            .parse()
            .unwrap_or_else(|_| panic!("écran illisible {ecran:?}, trace={trace:?}"));
        assert!(v.is_finite(), "écran non fini {ecran:?}");
    }

    // plafond de saisie
    if m.saisie() == Saisie::EnSaisie {
        let n = ecran.chars().filter(|c| c.is_ascii_digit()).count();
        assert!(n <= MAX_CHIFFRES_SAISIE, "{ecran:?} dépasse le plafond");
    }

    // la pile ne peut pas dépasser le nombre d’ouvertures
    assert!(m.profondeur_parentheses() <= ouvertures);

    // aperçu cohérent avec les accesseurs
    let a = m.apercu();
    assert_eq!(a.affichage, ecran);
    assert_eq!(a.profondeur_parentheses, m.profondeur_parentheses());
    assert_eq!(a.operation_active, m.operation_active());
}

fn rejouer(seed: u64, n: usize, enchainement: Enchainement) -> Vec<String> {
    let mut rng = Rng::new(seed);
    let mut m = MoteurCalc::new().avec_enchainement(enchainement);
    let mut trace = Vec::with_capacity(n);
    let mut ecrans = Vec::with_capacity(n);
    let mut ouvertures = 0usize;

    for _ in 0..n {
        let t = gen_touche(&mut rng);
        if matches!(t, Touche::Ouvrir) {
            ouvertures += 1;
        }
        trace.push(t);
        appuyer(&mut m, t);
        check_invariants(&m, ouvertures, &trace);
        ecrans.push(m.affichage().to_string());
    }
    ecrans
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_invariants_large() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    for seed in 1..=200u64 {
        rejouer(seed, 200, Enchainement::Large);
        budget(t0, max);
    }
}

#[test]
fn fuzz_invariants_strict() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    for seed in 1000..=1100u64 {
        rejouer(seed, 200, Enchainement::Strict);
        budget(t0, max);
    }
}

#[test]
fn fuzz_deterministe() {
    let a = rejouer(42, 500, Enchainement::Large);
    let b = rejouer(42, 500, Enchainement::Large);
    assert_eq!(a, b);
}

#[test]
fn fuzz_clear_double_revient_a_neuf() {
    // Quelle que soit l’histoire, C puis AC remet l’arithmétique à zéro.
    let mut rng = Rng::new(7);
    for _ in 0..100 {
        let mut m = MoteurCalc::new();
        for _ in 0..50 {
            appuyer(&mut m, gen_touche(&mut rng));
        }
        m.input_clear();
        m.input_clear();
        assert_eq!(m.affichage(), "0");
        assert!(m.all_clear());
        assert_eq!(m.operation_active(), None);
        assert_eq!(m.profondeur_parentheses(), 0);

        // plus rien en attente ni à rejouer
        m.input_chiffre(4);
        m.input_egal();
        assert_eq!(m.affichage(), "4");
    }
}
