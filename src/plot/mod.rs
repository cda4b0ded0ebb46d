/// Figure model and PNG rendering.
///
/// `figure` turns aggregated results into a plain description of the two
/// panels (what is drawn, in which colour, with which marker); `render`
/// rasterizes that description with plotters.

pub mod figure;
pub mod render;
