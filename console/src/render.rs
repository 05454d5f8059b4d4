use std::fmt::Write;
use tictactoe_common::games::tictactoe::{BOARD_SIDE, Board, Mark, Position};

const ROW_SEPARATOR: &str = "-----------";

/// Empty cells show their 1-9 number unless `show_cell_numbers` is off.
pub fn render_board(board: &Board, show_cell_numbers: bool) -> String {
    let mut out = String::from("\n");
    for row in 0..BOARD_SIDE {
        out.push(' ');
        for col in 0..BOARD_SIDE {
            let mark = board.get(row, col).unwrap_or(Mark::Empty);
            if mark == Mark::Empty && show_cell_numbers {
                let _ = write!(out, "{}", Position::new(row, col).cell_number());
            } else {
                out.push(mark.symbol());
            }
            if col + 1 < BOARD_SIDE {
                out.push_str(" | ");
            }
        }
        if row + 1 < BOARD_SIDE {
            out.push('\n');
            out.push_str(ROW_SEPARATOR);
            out.push('\n');
        }
    }
    out.push_str("\n\n");
    out
}
