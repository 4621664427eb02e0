// Display formatting utilities for a layout's occupancy grid

use crate::card::Card;
use crate::config::{DisplayConfig, GridConfig};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use std::io::{self, Write};

const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
];

/// Index (into `cards`) of the card covering each cell, row-major
pub fn cell_owners(cards: &[Card], grid: &GridConfig) -> Vec<Vec<Option<usize>>> {
    let mut owners = vec![vec![None; grid.max_cols as usize]; grid.max_rows as usize];
    for (index, card) in cards.iter().enumerate() {
        let Some(rect) = card.rect() else { continue };
        for row in rect.top..rect.bottom.min(grid.max_rows) {
            for col in rect.left..rect.right.min(grid.max_cols) {
                owners[row as usize][col as usize] = Some(index);
            }
        }
    }
    owners
}

/// Two-character label for a card: kind glyph plus its index
pub fn format_card_label(card: &Card, index: usize) -> String {
    format!("{}{}", card.kind.glyph(), index % 10)
}

/// Column header line
pub fn format_column_headers(cols: u32) -> String {
    let mut line = String::from("   ");
    for col in 0..cols {
        line.push_str(&format!(" {:2}", col));
    }
    line
}

/// Plain-text occupancy grid, one line per row
pub fn render_layout(cards: &[Card], grid: &GridConfig, display: &DisplayConfig) -> String {
    let owners = cell_owners(cards, grid);
    let mut lines = Vec::with_capacity(owners.len() + 1);
    if display.show_headers {
        lines.push(format_column_headers(grid.max_cols));
    }
    for (row, cells) in owners.iter().enumerate() {
        let mut line = if display.show_headers {
            format!("{:2}:", row)
        } else {
            String::new()
        };
        for owner in cells {
            match owner {
                Some(index) => line.push_str(&format!(" {}", format_card_label(&cards[*index], *index))),
                None => line.push_str("  ."),
            }
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Print the occupancy grid to stdout, coloured per card when enabled
pub fn print_layout(
    title: &str,
    cards: &[Card],
    grid: &GridConfig,
    display: &DisplayConfig,
) -> io::Result<()> {
    let mut stdout = io::stdout();
    if !display.use_colors {
        writeln!(stdout, "{}", title)?;
        writeln!(stdout, "{}", render_layout(cards, grid, display))?;
        return stdout.flush();
    }

    queue!(stdout, SetForegroundColor(Color::Cyan))?;
    queue!(
        stdout,
        Print(format!("{} - {}x{} grid\n", title, grid.max_cols, grid.max_rows))
    )?;
    queue!(stdout, ResetColor)?;

    let owners = cell_owners(cards, grid);
    if display.show_headers {
        queue!(stdout, Print(format_column_headers(grid.max_cols)), Print("\n"))?;
    }
    for (row, cells) in owners.iter().enumerate() {
        if display.show_headers {
            queue!(stdout, Print(format!("{:2}:", row)))?;
        }
        for owner in cells {
            match owner {
                Some(index) => {
                    queue!(stdout, Print(" "))?;
                    queue!(stdout, SetBackgroundColor(PALETTE[index % PALETTE.len()]))?;
                    queue!(stdout, SetForegroundColor(Color::Black))?;
                    queue!(stdout, Print(format_card_label(&cards[*index], *index)))?;
                    queue!(stdout, ResetColor)?;
                }
                None => queue!(stdout, Print("  ."))?,
            }
        }
        queue!(stdout, Print("\n"))?;
    }
    stdout.flush()
}
