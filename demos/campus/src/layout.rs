//! The built-in campus layout.

use anyhow::Result;

use gn_grid::{Grid, parse_layout};

/// 10 × 15 campus: a grid of building blocks with the start in the top-left
/// corner, the goal in the bottom-right, and a signal on the middle avenue.
pub const CAMPUS_CSV: &str = "\
S,0,0,0,0,0,0,0,0,0,0,0,0,0,0
0,1,1,0,1,0,1,0,1,0,1,0,1,0,0
0,0,0,0,0,0,0,0,0,0,0,0,1,0,0
1,1,0,1,1,1,0,1,1,1,0,1,1,1,0
0,0,0,0,0,0,T,0,0,0,0,0,0,0,0
0,1,1,1,1,1,0,1,1,1,0,1,1,1,0
0,0,0,0,0,0,0,0,0,0,0,0,0,0,0
0,1,1,1,0,1,1,1,0,1,1,1,0,1,0
0,0,0,0,0,0,0,0,0,0,0,0,0,0,0
0,0,0,0,0,0,0,0,0,0,0,0,0,0,G
";

pub fn campus() -> Result<Grid> {
    Ok(parse_layout(CAMPUS_CSV.as_bytes())?)
}
