//! Demo rows: a stock quote table.

use crossterm::style::Color;
use rand::Rng;

/// One quote row.
#[derive(Debug, Clone)]
pub struct Stock {
    pub code: u32,
    pub name: String,
    /// Percentage change since open.
    pub increase_rate: f64,
    /// Turnover, in units of 100 million.
    pub total: f64,
}

/// Generate `count` rows of random quotes.
pub fn generate(count: usize) -> Vec<Stock> {
    const SYLLABLES: &[&str] = &["an", "bo", "chen", "da", "fu", "guo", "hua", "jin", "xin", "yu"];
    let mut rng = rand::rng();
    (0..count)
        .map(|i| {
            let name = (0..2)
                .map(|_| SYLLABLES[rng.random_range(0..SYLLABLES.len())])
                .collect::<Vec<_>>()
                .join("");
            Stock {
                code: i as u32 + 1,
                name,
                increase_rate: (rng.random_range(-1000..=1000) as f64) / 100.0,
                total: (rng.random_range(1..=50_000) as f64) / 100.0,
            }
        })
        .collect()
}

/// A formatted cell and its color.
pub struct Cell {
    pub text: String,
    pub color: Option<Color>,
}

/// Format a row into display cells.
pub fn cells(stock: &Stock) -> [Cell; 4] {
    [
        Cell {
            text: format!("{:0>6}", stock.code),
            color: None,
        },
        Cell {
            text: format!("{:<10}", stock.name),
            color: None,
        },
        Cell {
            text: format!("{:>7}%", stock.increase_rate),
            color: Some(if stock.increase_rate > 0.0 {
                Color::Red
            } else {
                Color::Green
            }),
        },
        Cell {
            text: format!("{:>10}亿", stock.total),
            color: Some(Color::Yellow),
        },
    ]
}
