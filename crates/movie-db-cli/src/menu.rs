//! Interactive console menu over the scraped records
//!
//! The menu is a small state machine driven by one input line at a time.
//! It is generic over its input and output so it can run against stdin and
//! stdout or against in-memory buffers.

use std::io::{self, BufRead, Write};

use movie_db_core::{MovieRecord, NOT_AVAILABLE};

/// Largest number of titles the list option accepts
pub const MAX_LIST_COUNT: i64 = 25;

const BORDER_WIDTH: usize = 40;

/// Where the menu loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Menu,
    ListCountPrompt,
    DetailPrompt,
    Done,
}

/// Blocking read-eval-print menu
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and hand back its output
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Serve the menu until the user chooses to exit or input runs out.
    pub fn run(&mut self, records: &[MovieRecord]) -> io::Result<()> {
        let mut state = MenuState::Menu;

        while state != MenuState::Done {
            state = match self.step(state, records)? {
                Some(next) => next,
                None => {
                    tracing::debug!("End of input, leaving menu");
                    break;
                }
            };
        }

        Ok(())
    }

    /// Run one state and return the next one, or `None` at end of input.
    fn step(&mut self, state: MenuState, records: &[MovieRecord]) -> io::Result<Option<MenuState>> {
        let next = match state {
            MenuState::Menu => {
                self.print_options()?;
                let Some(choice) = self.prompt("Enter your choice (1-3): ")? else {
                    return Ok(None);
                };
                match choice.as_str() {
                    "1" => MenuState::ListCountPrompt,
                    "2" => MenuState::DetailPrompt,
                    "3" => {
                        writeln!(
                            self.output,
                            "Thank you for using the movie database. Have a good one!"
                        )?;
                        MenuState::Done
                    }
                    _ => {
                        writeln!(self.output, "Invalid choice. Please try again.")?;
                        MenuState::Menu
                    }
                }
            }
            MenuState::ListCountPrompt => {
                let Some(count) = self.read_count()? else {
                    return Ok(None);
                };
                self.print_titles(records, count)?;
                MenuState::Menu
            }
            MenuState::DetailPrompt => {
                let Some(title) = self.prompt("Enter the movie title: ")? else {
                    return Ok(None);
                };
                match records.iter().find(|r| r.title == title) {
                    Some(record) => self.print_details(record)?,
                    None => writeln!(self.output, "Movie not found.")?,
                }
                MenuState::Menu
            }
            MenuState::Done => MenuState::Done,
        };

        Ok(Some(next))
    }

    /// Ask for a count until it is a whole number in 1..=25.
    fn read_count(&mut self) -> io::Result<Option<usize>> {
        loop {
            let Some(line) = self.prompt("How many movies do you want to see? (1-25): ")? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(n) if (1..=MAX_LIST_COUNT).contains(&n) => return Ok(Some(n as usize)),
                Ok(_) => writeln!(self.output, "Please enter a number between 1 and 25.")?,
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    /// Print `message` and read one line without its line ending.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).to_string();
        Ok(Some(trimmed))
    }

    fn print_options(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nOptions:")?;
        writeln!(self.output, "1. Show movie names list")?;
        writeln!(self.output, "2. Show movie details")?;
        writeln!(self.output, "3. Exit")
    }

    fn print_titles(&mut self, records: &[MovieRecord], count: usize) -> io::Result<()> {
        writeln!(self.output, "\nTop {} Movies:", count)?;
        for (i, record) in records.iter().take(count).enumerate() {
            writeln!(self.output, "{}. {}", i + 1, record.title)?;
        }
        Ok(())
    }

    fn print_details(&mut self, record: &MovieRecord) -> io::Result<()> {
        let border = "=".repeat(BORDER_WIDTH);
        writeln!(self.output, "\n{}", border)?;
        writeln!(self.output, "Title: {}", record.title)?;
        writeln!(self.output, "Rating: {}", record.rating)?;
        writeln!(self.output, "Director: {}", or_not_available(&record.director))?;
        writeln!(self.output, "Genre: {}", or_not_available(&record.genre))?;
        writeln!(self.output, "Awards: {}", or_not_available(&record.awards))?;
        writeln!(self.output, "Box Office: {}", or_not_available(&record.box_office))?;
        writeln!(self.output, "{}", border)
    }
}

fn or_not_available(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NOT_AVAILABLE)
}
