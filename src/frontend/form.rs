//! Line-oriented contact form.

use crate::storage::KeyValueStorage;
use crate::store::ContactStore;
use std::io::{self, BufRead, Write};

const MENU: &str = "\n1) Add contact\n2) Remove contact\n3) List contacts\n0) Quit\n";

/// Interactive form reading commands from `input` and writing to `output`.
///
/// The store is borrowed; the caller keeps ownership.
pub struct ContactForm<'a, S, R, W>
where
    S: KeyValueStorage,
    R: BufRead,
    W: Write,
{
    store: &'a mut ContactStore<S>,
    input: R,
    output: W,
}

impl<'a, S, R, W> ContactForm<'a, S, R, W>
where
    S: KeyValueStorage,
    R: BufRead,
    W: Write,
{
    pub fn new(store: &'a mut ContactStore<S>, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        if let Some(backup) = self.store.backup_key() {
            writeln!(
                self.output,
                "Saved contacts could not be read. A copy was kept as '{}'.",
                backup
            )?;
        }
        self.render()?;

        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option")? else {
                return Ok(());
            };

            match choice.trim() {
                "1" => self.submit()?,
                "2" => self.remove()?,
                "3" => self.render()?,
                "0" => return Ok(()),
                other => writeln!(self.output, "Unknown option: {}", other)?,
            }
        }
    }

    fn submit(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Name")? else {
            return Ok(());
        };
        let Some(email) = self.prompt("Email")? else {
            return Ok(());
        };
        let Some(phone) = self.prompt("Phone")? else {
            return Ok(());
        };

        match self.store.add(&name, &email, &phone) {
            Ok(_) => {
                writeln!(self.output, "Contact added successfully!")?;
                self.render()
            }
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn remove(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return self.render();
        }
        self.render()?;

        let Some(choice) = self.prompt("Number of the contact to remove")? else {
            return Ok(());
        };
        let id = choice
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.store.list().get(i).map(|c| c.id().as_str().to_string()));

        let Some(id) = id else {
            return writeln!(self.output, "Error removing contact");
        };

        let Some(answer) = self.prompt("Are you sure you want to remove this contact? [y/N]")? else {
            return Ok(());
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }

        if self.store.remove(&id) {
            writeln!(self.output, "Contact removed successfully!")?;
            self.render()
        } else {
            writeln!(self.output, "Error removing contact")
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let contacts = self.store.list();
        if contacts.is_empty() {
            return writeln!(self.output, "No contacts registered yet.");
        }

        for (i, contact) in contacts.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, contact.name())?;
            writeln!(
                self.output,
                "   {} | {}",
                contact.email(),
                contact.phone()
            )?;
        }
        Ok(())
    }

    /// Print a label and read one line. `None` on end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
