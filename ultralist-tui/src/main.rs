mod container;
mod stock;

use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind, MouseEventKind};
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use ultralist::{Key, ListConfig, ScrollContainer, UltraList};

use container::TermContainer;
use stock::Stock;

const ROWS: usize = 100_000;
/// Lines taken by the header and status bar.
const CHROME: u16 = 2;

#[tokio::main]
async fn main() -> io::Result<()> {
    let log_file = File::create("ultralist-tui.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let list = match UltraList::new(stock::generate(ROWS), ListConfig::new(1.0)) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(());
        }
    };
    list.on_change(|event| log::info!("selected row {}", event.index));

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;

    let result = run(&list, &mut stdout);

    list.unmount();
    execute!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;

    result
}

fn run(list: &UltraList<Stock>, stdout: &mut io::Stdout) -> io::Result<()> {
    let (_, height) = terminal::size()?;
    let container = Arc::new(TermContainer::new(
        height.saturating_sub(CHROME),
        ROWS as f64,
    ));
    list.mount(container.clone(), None);

    loop {
        if list.is_dirty() {
            list.clear_dirty();
            draw(list, &container, stdout)?;
        }

        if !event::poll(Duration::from_millis(16))? {
            continue;
        }
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                code => {
                    list.handle_key(Key::from(code));
                }
            },
            CrosstermEvent::Mouse(mouse) => {
                let delta = match mouse.kind {
                    MouseEventKind::ScrollUp => -3.0,
                    MouseEventKind::ScrollDown => 3.0,
                    _ => continue,
                };
                container.scroll_by(delta);
                list.on_scroll();
                // The viewport catches up through the throttle; the rows
                // themselves move with the container right away.
                draw(list, &container, stdout)?;
            }
            CrosstermEvent::Resize(_, height) => {
                container.resize(height.saturating_sub(CHROME));
                if let Err(e) = list.on_resize() {
                    log::warn!("resize ignored: {}", e);
                }
            }
            _ => {}
        }
    }
}

/// Draw the rows that fall inside the container, positioned the way the
/// placeholders lay them out.
fn draw(list: &UltraList<Stock>, container: &TermContainer, stdout: &mut io::Stdout) -> io::Result<()> {
    let window = list.window();
    let item_height = list.config().item_height;
    let scroll_top = container.scroll_top();
    let box_height = container.offset_height();

    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print("  code    name           change        turnover"),
        SetAttribute(Attribute::Reset)
    )?;

    for (offset, row) in list.visible_items().iter().enumerate() {
        let top = window.placeholders.leading + offset as f64 * item_height - scroll_top;
        if top < 0.0 || top >= box_height {
            continue;
        }
        queue!(stdout, cursor::MoveTo(0, 1 + top as u16))?;
        if row.selected {
            queue!(stdout, SetAttribute(Attribute::Reverse))?;
        }
        queue!(stdout, Print(" "))?;
        for cell in stock::cells(&row.data) {
            if let Some(color) = cell.color {
                queue!(stdout, SetForegroundColor(color))?;
            }
            queue!(stdout, Print(cell.text), Print("  "), ResetColor)?;
        }
        queue!(stdout, SetAttribute(Attribute::Reset))?;
    }

    queue!(
        stdout,
        cursor::MoveTo(0, 1 + box_height as u16),
        SetAttribute(Attribute::Dim),
        Print(format!(
            "rows {}..{} of {}  selected {}  padding {}  (q to quit)",
            window.bounds.low,
            window.bounds.high,
            list.len(),
            list.selected(),
            window.placeholders
        )),
        SetAttribute(Attribute::Reset)
    )?;
    stdout.flush()
}
