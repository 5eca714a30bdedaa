// src/noyau/propre.rs
//
// Valeurs/vecteurs propres d'une 3×3 réelle SYMÉTRIQUE, par rotations de
// Jacobi cycliques. Résout exactement le contrat dont le pipeline a besoin :
// - 3 valeurs propres réelles (toujours, matrice symétrique)
// - colonnes propres unitaires, mutuellement orthogonales : A·vᵢ = λᵢ·vᵢ
// - l'ordre de sortie du solveur est quelconque ; le tri (décroissant,
//   stable) est une étape séparée.
//
// Entrée non finie (NaN/∞) ou non-convergence -> Err (pas de retry, pas de
// résultat deviné : l'algèbre linéaire déterministe ne se "retente" pas).

use super::algebre::{identite, mul_mat, transposee, Mat3};

/// Nombre maximal de balayages cyclique (0,1)(0,2)(1,2).
/// Jacobi converge quadratiquement : une 3×3 tient largement sous 30.
const MAX_BALAYAGES: usize = 30;

/// Somme des carrés hors diagonale (critère d'arrêt).
fn hors_diagonale(m: &Mat3) -> f64 {
    m[0][1] * m[0][1] + m[0][2] * m[0][2] + m[1][2] * m[1][2]
}

/// Une rotation de Jacobi qui annule m[p][q] (p < q).
/// Met à jour m (Gᵀ·m·G) et l'accumulateur de vecteurs v (v·G).
fn rotation_jacobi(m: &mut Mat3, v: &mut Mat3, p: usize, q: usize) {
    let apq = m[p][q];
    if apq == 0.0 {
        return;
    }

    // angle optimal (formule classique, stable numériquement)
    let theta = (m[q][q] - m[p][p]) / (2.0 * apq);
    let t = if theta >= 0.0 {
        1.0 / (theta + (theta * theta + 1.0).sqrt())
    } else {
        -1.0 / (-theta + (theta * theta + 1.0).sqrt())
    };
    let c = 1.0 / (t * t + 1.0).sqrt();
    let s = t * c;

    let mut g = identite();
    g[p][p] = c;
    g[q][q] = c;
    g[p][q] = s;
    g[q][p] = -s;

    *m = mul_mat(&mul_mat(&transposee(&g), m), &g);
    // symétrie exacte ré-imposée (les erreurs d'arrondi s'accumulent sinon)
    m[p][q] = 0.0;
    m[q][p] = 0.0;

    *v = mul_mat(v, &g);
}

/// Décomposition propre d'une 3×3 symétrique.
/// Renvoie (valeurs, matrice dont les COLONNES sont les vecteurs propres),
/// dans l'ordre interne du solveur (non trié).
pub fn decompose_symetrique(a: &Mat3) -> Result<([f64; 3], Mat3), String> {
    for ligne in a.iter() {
        for x in ligne.iter() {
            if !x.is_finite() {
                return Err("coefficient non fini (NaN/∞)".into());
            }
        }
    }

    let mut m = *a;
    let mut v = identite();

    // seuil absolu rapporté à l'échelle de la matrice
    let echelle: f64 = a
        .iter()
        .flatten()
        .map(|x| x * x)
        .sum::<f64>()
        .sqrt()
        .max(1.0);
    let seuil = (1e-14 * echelle) * (1e-14 * echelle);

    let mut converge = false;
    for _ in 0..MAX_BALAYAGES {
        if hors_diagonale(&m) <= seuil {
            converge = true;
            break;
        }
        rotation_jacobi(&mut m, &mut v, 0, 1);
        rotation_jacobi(&mut m, &mut v, 0, 2);
        rotation_jacobi(&mut m, &mut v, 1, 2);
    }

    if !converge && hors_diagonale(&m) > seuil {
        return Err("décomposition propre : non-convergence (Jacobi)".into());
    }

    Ok(([m[0][0], m[1][1], m[2][2]], v))
}

/// Tri DÉCROISSANT des paires propres (valeurs + colonnes), stable :
/// des valeurs égales gardent leur ordre natif de solveur.
pub fn trie_decroissant(valeurs: [f64; 3], vecteurs: Mat3) -> ([f64; 3], Mat3) {
    let mut idx = [0usize, 1, 2];
    idx.sort_by(|&i, &j| {
        valeurs[j]
            .partial_cmp(&valeurs[i])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut vals = [0.0; 3];
    let mut vecs = [[0.0; 3]; 3];
    for (col, &i) in idx.iter().enumerate() {
        vals[col] = valeurs[i];
        for ligne in 0..3 {
            vecs[ligne][col] = vecteurs[ligne][i];
        }
    }
    (vals, vecs)
}
