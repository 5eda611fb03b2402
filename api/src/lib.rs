// remote documents consumed by the showcase
//
// both are read-only: the token tree that drives every section, and the latest commit
// metadata shown in the footer
pub mod commit;
pub mod tokens;
