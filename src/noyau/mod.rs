//! Noyau quadriques
//!
//! Organisation interne :
//! - algebre.rs   : petites opérations 3×3 (transposée, produit, déterminant)
//! - propre.rs    : valeurs/vecteurs propres d'une 3×3 symétrique (Jacobi)
//! - quadrique.rs : pipeline complet (matrice -> rotation -> translation
//!                  -> classification -> forme standard)
//! - format.rs    : affichage "joli" d'un flottant (entier, p/q, radical)

pub mod algebre;
pub mod format;
pub mod propre;
pub mod quadrique;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use format::format_nombre;
pub use quadrique::analyse_quadrique;

/// Tolérance absolue unique du noyau.
///
/// Une valeur propre ou un coefficient linéaire tourné dont la valeur absolue
/// passe sous ce seuil est traité comme exactement nul pour les branchements
/// (dégénérescences, rang, signature). Même seuil côté formateur.
pub const EPS: f64 = 1e-5;
