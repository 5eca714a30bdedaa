// src/noyau/quadrique.rs
//
// Pipeline complet du classificateur :
//   coefficients -> matrice symétrique A + vecteur linéaire J
//               -> décomposition propre (propre.rs)
//               -> tri décroissant + orientation directe (det M = +1)
//               -> translation par complétion du carré
//               -> classification (rang / signature / axe parabolique)
//               -> forme standard (chaîne)
//
// Fonction pure : aucun état partagé, chaque appel produit un
// ResultatAnalyse frais. Les dégénérescences se décident toutes avec la
// tolérance absolue unique EPS (cf. noyau/mod.rs).

use super::algebre::{determinant, mul_vec, transposee, Mat3, Vec3};
use super::format::format_nombre;
use super::propre::{decompose_symetrique, trie_decroissant};
use super::EPS;

/// Les 10 coefficients réels de
/// `a11·x² + a22·y² + a33·z² + a12·xy + a23·yz + a13·xz + b1·x + b2·y + b3·z + c = 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coefficients {
    pub a11: f64,
    pub a22: f64,
    pub a33: f64,
    pub a12: f64,
    pub a23: f64,
    pub a13: f64,
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    pub c: f64,
}

impl Coefficients {
    fn tous(&self) -> [f64; 10] {
        [
            self.a11, self.a22, self.a33, self.a12, self.a23, self.a13, self.b1, self.b2,
            self.b3, self.c,
        ]
    }
}

/// Type de centre de la surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeCentre {
    Point,
    Droite,
    Aucun,
    // Membres conservés pour la complétude du modèle de données ;
    // la classification actuelle ne les produit jamais (cf. DESIGN.md).
    Plan,
    Inconnu,
}

impl TypeCentre {
    /// Libellé d'affichage (côté présentation).
    pub fn libelle(&self) -> &'static str {
        match self {
            TypeCentre::Point => "Point",
            TypeCentre::Droite => "Line",
            TypeCentre::Aucun => "None",
            TypeCentre::Plan => "Plane",
            TypeCentre::Inconnu => "Unknown",
        }
    }
}

/// Résultat d'une analyse : produit frais à chaque appel, durée de vie
/// = un changement d'entrée chez l'appelant.
#[derive(Clone, Debug)]
pub struct ResultatAnalyse {
    /// Valeurs propres de A, triées DÉCROISSANT.
    pub valeurs_propres: [f64; 3],
    /// Colonnes = axes principaux ; det = +1 (rotation propre, SO(3)).
    pub rotation: Mat3,
    /// Décalage de l'origine canonique, exprimé en coordonnées d'origine.
    pub translation: Vec3,
    /// Équation canonique, ex. "x'^2 + y'^2 + z'^2 - 1.00 = 0".
    pub forme_standard: String,
    pub type_centre: TypeCentre,
    /// Libellé du type de surface, ex. "Ellipsoid".
    pub type_surface: String,
}

impl ResultatAnalyse {
    /// Valeurs propres passées au formateur "intelligent".
    pub fn valeurs_jolies(&self) -> [String; 3] {
        self.valeurs_propres.map(format_nombre)
    }

    /// Matrice de rotation, entrée par entrée, via le formateur.
    pub fn rotation_jolie(&self) -> [[String; 3]; 3] {
        self.rotation.map(|ligne| ligne.map(format_nombre))
    }

    /// Vecteur de translation via le formateur.
    pub fn translation_jolie(&self) -> [String; 3] {
        self.translation.map(format_nombre)
    }

    /// Résumé multi-lignes pour la couche de présentation.
    pub fn resume(&self) -> String {
        let v = self.valeurs_jolies();
        format!(
            "Surface : {}\nCentre  : {}\nForme   : {}\nλ       : {}, {}, {}",
            self.type_surface,
            self.type_centre.libelle(),
            self.forme_standard,
            v[0],
            v[1],
            v[2],
        )
    }
}

/* ------------------------ Coefficients -> (A, J) ------------------------ */

/// Matrice symétrique de la forme quadratique : diagonale = a_ii, les
/// coefficients croisés sont répartis moitié/moitié pour que xᵀAx
/// reproduise exactement la partie quadratique.
pub(crate) fn matrice_quadratique(k: &Coefficients) -> Mat3 {
    [
        [k.a11, k.a12 / 2.0, k.a13 / 2.0],
        [k.a12 / 2.0, k.a22, k.a23 / 2.0],
        [k.a13 / 2.0, k.a23 / 2.0, k.a33],
    ]
}

/* ------------------------ Pipeline ------------------------ */

/// API publique : analyse les 10 coefficients et renvoie la classification
/// complète. Erreur uniquement sur entrée non finie ou non-convergence du
/// solveur propre (pas de retry : l'algèbre est déterministe).
pub fn analyse_quadrique(k: &Coefficients) -> Result<ResultatAnalyse, String> {
    if k.tous().iter().any(|x| !x.is_finite()) {
        return Err("coefficient non fini (NaN/∞)".into());
    }

    let a = matrice_quadratique(k);
    let j: Vec3 = [k.b1, k.b2, k.b3];

    // 1) paires propres (ordre du solveur quelconque), puis tri décroissant
    let (brutes, vecteurs) = decompose_symetrique(&a)?;
    let (valeurs, mut m) = trie_decroissant(brutes, vecteurs);

    // 2) orientation directe : det(M) = +1, en réfléchissant la troisième
    //    colonne (axe de plus petite valeur propre) si nécessaire
    if determinant(&m) < 0.0 {
        for ligne in m.iter_mut() {
            ligne[2] = -ligne[2];
        }
    }

    // 3) complétion du carré dans le repère tourné
    let jr = mul_vec(&transposee(&m), &j);
    let mut s: Vec3 = [0.0; 3];
    let mut cste = k.c;
    let mut axe_lineaire = [false; 3];

    for i in 0..3 {
        if valeurs[i].abs() > EPS {
            // axe non dégénéré : on élimine le terme linéaire
            s[i] = -jr[i] / (2.0 * valeurs[i]);
            cste -= jr[i] * jr[i] / (4.0 * valeurs[i]);
        } else if jr[i].abs() > EPS {
            // axe parabolique : absorbe la constante (une seule fois,
            // premier axe dégénéré dans l'ordre 0→1→2)
            s[i] = -cste / jr[i];
            cste = 0.0;
            axe_lineaire[i] = true;
        }
        // sinon : direction libre (axe de cylindre), s[i] reste 0
    }

    let translation = mul_vec(&m, &s);

    // 4) classification + rendu
    let (type_surface, type_centre) = classifie(&valeurs, &axe_lineaire, cste);
    let forme_standard = rend_forme_standard(&valeurs, &jr, &axe_lineaire, cste);

    Ok(ResultatAnalyse {
        valeurs_propres: valeurs,
        rotation: m,
        translation,
        forme_standard,
        type_centre,
        type_surface,
    })
}

/* ------------------------ Classification ------------------------ */

fn classifie(valeurs: &[f64; 3], axe_lineaire: &[bool; 3], cste: f64) -> (String, TypeCentre) {
    let rang = valeurs.iter().filter(|v| v.abs() > EPS).count();
    let pos = valeurs.iter().filter(|&&v| v > EPS).count();
    let neg = valeurs.iter().filter(|&&v| v < -EPS).count();
    let a_lineaire = axe_lineaire.iter().any(|&b| b);

    let surface = if a_lineaire {
        match rang {
            2 => {
                if pos == 2 || neg == 2 {
                    "Elliptic Paraboloid"
                } else {
                    "Hyperbolic Paraboloid"
                }
            }
            1 => "Parabolic Cylinder",
            // terme linéaire sans partie quadratique : rien de nommé ici
            _ => "General Quadric",
        }
    } else if rang == 3 {
        if cste.abs() < EPS {
            "Cone (Real or Imaginary)"
        } else {
            // on compte les valeurs propres du même signe que le second membre
            let rhs = -cste;
            match valeurs.iter().filter(|&&v| v * rhs > 0.0).count() {
                3 => "Ellipsoid",
                2 => "Hyperboloid of One Sheet",
                1 => "Hyperboloid of Two Sheets",
                _ => "Imaginary Ellipsoid", // aucun point réel
            }
        }
    } else if rang == 2 {
        if cste.abs() < EPS {
            if pos == 2 || neg == 2 {
                "Intersecting Planes (Imaginary)"
            } else {
                "Intersecting Planes (Real)"
            }
        } else if pos == 2 || neg == 2 {
            "Elliptic Cylinder"
        } else {
            "Hyperbolic Cylinder"
        }
    } else if rang == 1 {
        if cste.abs() >= EPS {
            "Parallel Planes"
        } else {
            "Coincident Planes"
        }
    } else {
        // entrée dégénérée / vide (ex. tous coefficients nuls)
        "General Quadric"
    };

    let centre = if a_lineaire {
        TypeCentre::Aucun
    } else if rang == 3 {
        TypeCentre::Point
    } else {
        TypeCentre::Droite
    };

    (surface.to_string(), centre)
}

/* ------------------------ Forme standard ------------------------ */

const VARIABLES: [&str; 3] = ["x'", "y'", "z'"];

/// Émet, de gauche à droite : les termes carrés (ordre des axes, pas ordre
/// de grandeur), puis les termes linéaires paraboliques, puis la constante.
/// Coefficient carré 1 élidé ; tout le reste arrondi à 2 décimales.
fn rend_forme_standard(
    valeurs: &[f64; 3],
    jr: &Vec3,
    axe_lineaire: &[bool; 3],
    cste: f64,
) -> String {
    // (négatif ?, corps sans signe)
    let mut termes: Vec<(bool, String)> = Vec::new();

    for i in 0..3 {
        if valeurs[i].abs() > EPS {
            let coef = valeurs[i].abs();
            let corps = if (coef - 1.0).abs() < EPS {
                format!("{}^2", VARIABLES[i])
            } else {
                format!("{coef:.2}{}^2", VARIABLES[i])
            };
            termes.push((valeurs[i] < 0.0, corps));
        }
    }

    for i in 0..3 {
        if axe_lineaire[i] {
            // coefficient linéaire jamais élidé
            termes.push((jr[i] < 0.0, format!("{:.2}{}", jr[i].abs(), VARIABLES[i])));
        }
    }

    if cste.abs() > EPS {
        termes.push((cste < 0.0, format!("{:.2}", cste.abs())));
    }

    if termes.is_empty() {
        return "0 = 0".to_string();
    }

    let mut sortie = String::new();
    for (rang, (negatif, corps)) in termes.iter().enumerate() {
        if rang == 0 {
            if *negatif {
                sortie.push('-');
            }
        } else if *negatif {
            sortie.push_str(" - ");
        } else {
            sortie.push_str(" + ");
        }
        sortie.push_str(corps);
    }
    sortie.push_str(" = 0");
    sortie
}
