// view models for each section of the page
//
// every builder here is a pure function of its inputs: the webapp re-runs them whenever
// the tokens or the theme change, and rendering twice must give the same result
pub mod radius;
pub mod shadows;
pub mod spacing;
pub mod swatches;
pub mod typography;
