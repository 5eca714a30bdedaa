// src/noyau/format.rs
//
// Formateur numérique "intelligent" : un flottant -> une chaîne courte.
// Échelle de décision (premier match gagne) :
//   1. quasi-zéro            -> "0"
//   2. quasi-entier          -> entier signé
//   3. fraction p/q, q ≤ 50  -> "p/q" réduit
//   4. radical, q ≤ 100      -> "a√b/c√d" simplifié (carrés parfaits extraits)
//   5. repli                 -> décimal à 4 chiffres
//
// Heuristique assumée : bornes volontairement petites (q ≤ 50 / q ≤ 100)
// pour ne pas "reconnaître" n'importe quel décimal. Ce n'est PAS une
// reconstruction rationnelle générale. Ne jamais échouer : toute entrée
// réelle produit une chaîne.

use num_rational::Rational64;
use num_traits::One;

use super::EPS;

/// Au-delà, la granularité f64 dépasse l'unité et le passage en i64 sature :
/// plus aucune reconnaissance exacte n'a de sens, repli décimal direct.
const BORNE_EXACTE: f64 = 9.0e15;

/// Radicande maximal soumis à l'extraction des carrés parfaits : garde la
/// division d'essai en temps borné court (≈ 10⁶ pas au pire).
const RADICANDE_MAX: f64 = 1e12;

/* ------------------------ Helpers rationnels ------------------------ */

fn format_rat(r: &Rational64) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// Décompose n ≥ 0 en n = s²·t, t sans facteur carré (essais par p croissant).
/// Suffisant pour nos petits entiers (radicandes issus de q ≤ 100).
fn simplifie_racine(n: i64) -> (i64, i64) {
    if n <= 1 {
        return (1, n);
    }

    let mut reste = n;
    let mut s = 1i64;

    let mut p = 2i64;
    while p * p <= reste {
        let p2 = p * p;
        while reste % p2 == 0 {
            reste /= p2;
            s *= p;
        }
        p = if p == 2 { 3 } else { p + 2 };
    }

    (s, reste)
}

/// a√b rendu "joli" : "a" si b = 1, "√b" si a = 1, "a√b" sinon.
fn format_radical(coeff: i64, radicande: i64) -> String {
    if radicande == 1 {
        format!("{coeff}")
    } else if coeff == 1 {
        format!("√{radicande}")
    } else {
        format!("{coeff}√{radicande}")
    }
}

/* ------------------------ Échelle de décision ------------------------ */

/// Formate un réel en chaîne courte lisible (voir l'échelle en tête de
/// fichier). Tolérance absolue EPS à chaque étage.
pub fn format_nombre(v: f64) -> String {
    if !v.is_finite() {
        // jamais atteint depuis le pipeline (entrées filtrées en amont),
        // mais le formateur ne doit JAMAIS échouer.
        return format!("{v}");
    }

    // trop grand pour toute reconnaissance exacte
    if v.abs() >= BORNE_EXACTE {
        return format!("{v:.4}");
    }

    // 1. quasi-zéro
    if v.abs() < EPS {
        return "0".to_string();
    }

    // 2. quasi-entier
    if (v - v.round()).abs() < EPS {
        return format!("{}", v.round() as i64);
    }

    // 3. fraction p/q (q borné à 50)
    for q in 2..=50i64 {
        let p = v * q as f64;
        if (p - p.round()).abs() < EPS {
            return format_rat(&Rational64::new(p.round() as i64, q));
        }
    }

    // 4. radical : v² = p/q (q borné à 100), carrés parfaits extraits
    //    du numérateur et du dénominateur indépendamment
    let sq = v * v;
    for q in 1..=100i64 {
        let p = sq * q as f64;
        if p >= RADICANDE_MAX {
            // radicande démesuré : rien de lisible à extraire (et p ne fait
            // que croître avec q)
            break;
        }
        let p_ent = p.round() as i64;
        if (p - p.round()).abs() < EPS && p_ent >= 1 {
            let r = Rational64::new(p_ent, q);
            let (cn, rn) = simplifie_racine(*r.numer());
            let (cd, rd) = simplifie_racine(*r.denom());

            let signe = if v < 0.0 { "-" } else { "" };
            let num = format_radical(cn, rn);
            let den = format_radical(cd, rd);

            if den == "1" {
                return format!("{signe}{num}");
            }
            return format!("{signe}{num}/{den}");
        }
    }

    // 5. repli décimal
    format!("{v:.4}")
}
