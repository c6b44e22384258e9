//! Human-readable board rendering. A debug aid, not a parsed format.

use std::fmt;

use super::state::{BoardState, Stack};
use crate::core::{Square, FILES};

/// Pieces in a cell, top first.
fn cell_text(stack: &Stack) -> String {
    stack
        .iter()
        .rev()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ranks run from the highest at the top down to 1, files are lettered
/// underneath:
///
/// ```text
///  3 [   ] [   ] [   ]
///  2 [   ] [ w ] [   ]
///  1 [ b ] [   ] [   ]
///      A     B     C
/// ```
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let width = self
            .squares()
            .map(|square| cell_text(self.stack(square)).len())
            .max()
            .unwrap_or(0)
            .max(1);

        for row in (0..size as u8).rev() {
            let cells: Vec<String> = (0..size as u8)
                .map(|column| {
                    let text = cell_text(self.stack(Square::new(row, column)));
                    format!("[ {:>width$} ]", text, width = width)
                })
                .collect();
            writeln!(f, "{:>2} {}", row + 1, cells.join(" "))?;
        }

        let footer: Vec<String> = FILES[..size]
            .iter()
            .map(|&file| {
                let letter = (file as char).to_ascii_uppercase();
                format!("{:^width$}", letter, width = width + 4)
            })
            .collect();
        write!(f, "   {}", footer.join(" ").trim_end())
    }
}
