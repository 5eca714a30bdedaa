// src/lib.rs
//
// Classificateur de quadriques — noyau pur
// ----------------------------------------
// But:
// - 10 coefficients réels -> classification géométrique complète
//   (rotation propre, translation, forme standard, type de surface)
// - formateur numérique "intelligent" (entier / fraction / radical / décimal)
//
// IMPORTANT (structure projet):
// - tout le contenu algorithmique vit dans src/noyau/
// - la saisie des coefficients, le rendu 3-D de l'isosurface et le debounce
//   sont des collaborateurs EXTERNES : ils appellent `analyse_quadrique`
//   et `format_nombre`, rien de plus.

pub mod noyau;

pub use noyau::format::format_nombre;
pub use noyau::quadrique::{analyse_quadrique, Coefficients, ResultatAnalyse, TypeCentre};
