//! Interactive console
//!
//! Line-oriented front end over [`App`]. Reads one command per line,
//! runs it to completion, prints the outcome. Also serves as the
//! [`PrinterSelector`], reading the choice from the same input.

use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::Utc;
use receipt_core::PrinterHandle;
use receipt_core::PrinterSelection;
use receipt_core::money::format_dollars;
use thiserror::Error;
use tracing::{debug, warn};

use crate::app::App;
use crate::core::ExportError;
use crate::services::{PrinterSelector, PrintingService, QrRenderer, SharingService};

const HELP: &str = "\
Commands:
  name <text>    set the item name
  price <text>   set the item price
  add            add the item to the receipt
  items          show the receipt items and total
  print          print the receipt
  export         save the receipt to a file and share it
  select         choose a printer
  qr <text>      print a QR code
  help           show this help
  quit           exit";

/// One console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Name(String),
    Price(String),
    Add,
    Items,
    Print,
    Export,
    Select,
    Qr(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (type 'help')")]
    Unknown(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name(rest.to_string())),
            "price" => Ok(Self::Price(rest.to_string())),
            "add" => Ok(Self::Add),
            "items" => Ok(Self::Items),
            "print" => Ok(Self::Print),
            "export" => Ok(Self::Export),
            "select" => Ok(Self::Select),
            "qr" if rest.is_empty() => Err(CommandError::MissingArgument("qr <text>")),
            "qr" => Ok(Self::Qr(rest.to_string())),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

/// Console front end
pub struct Console<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
    printers: Vec<PrinterHandle>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// `printers` is the list offered by `select`
    pub fn new(input: R, output: W, printers: Vec<PrinterHandle>) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
            printers,
        }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    /// Run until `quit` or end of input
    pub async fn run<P, S, Q>(
        &self,
        app: &mut App,
        service: &P,
        sharer: &S,
        qr: &Q,
        qr_size: u32,
    ) -> io::Result<()>
    where
        P: PrintingService,
        S: SharingService,
        Q: QrRenderer,
    {
        self.say("Receipt builder ready. Type 'help' for commands.")?;

        loop {
            self.prompt("> ")?;
            let Some(line) = self.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    self.say(e)?;
                    continue;
                }
            };
            debug!(?command, "Console command");

            if command == Command::Quit {
                break;
            }
            self.execute(command, app, service, sharer, qr, qr_size)
                .await?;
        }

        Ok(())
    }

    async fn execute<P, S, Q>(
        &self,
        command: Command,
        app: &mut App,
        service: &P,
        sharer: &S,
        qr: &Q,
        qr_size: u32,
    ) -> io::Result<()>
    where
        P: PrintingService,
        S: SharingService,
        Q: QrRenderer,
    {
        match command {
            Command::Name(name) => app.set_item_name(name),
            Command::Price(price) => app.set_item_price(price),
            Command::Add => match app.add_item() {
                Ok(item) => self.say(format!("Added {}", item))?,
                Err(e) => self.say(format!("Cannot add item: {}", e))?,
            },
            Command::Items => self.show_items(app)?,
            Command::Print => match app.print_receipt(service, Utc::now()).await {
                Ok(()) => self.say("Receipt printed")?,
                Err(e) => self.say(format!("Print failed: {}", e))?,
            },
            Command::Export => match app.export_receipt(service, sharer, Utc::now()).await {
                Ok(handle) => self.say(format!(
                    "Receipt file has been saved to: {}",
                    handle.path().display()
                ))?,
                Err(e @ ExportError::Sharing { .. }) => self.say(e)?,
                Err(e) => self.say(format!("Export failed: {}", e))?,
            },
            Command::Select => {
                if !self.is_supported() {
                    self.say("No printers configured to choose from")?;
                    return Ok(());
                }
                match app.select_printer(self).await {
                    PrinterSelection::Selected(handle) => {
                        self.say(format!("Selected printer: {}", handle.name))?
                    }
                    PrinterSelection::None => self.say("No printer selected")?,
                }
            }
            Command::Qr(payload) => match app.print_qr(service, qr, &payload, qr_size).await {
                Ok(()) => self.say("QR code printed")?,
                Err(e) => self.say(format!("Print failed: {}", e))?,
            },
            Command::Help => self.say(HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn show_items(&self, app: &App) -> io::Result<()> {
        self.say("Receipt Items:")?;
        for item in app.items() {
            self.say(format!("  {}", item))?;
        }
        if let Some(handle) = app.selection().handle() {
            self.say(format!("Selected printer: {}", handle.name))?;
        }
        self.say(format!("Total: {}", format_dollars(app.total())))
    }

    fn say(&self, message: impl Display) -> io::Result<()> {
        let mut out = self.output.borrow_mut();
        writeln!(out, "{}", message)?;
        out.flush()
    }

    fn prompt(&self, prompt: &str) -> io::Result<()> {
        let mut out = self.output.borrow_mut();
        write!(out, "{}", prompt)?;
        out.flush()
    }

    /// Next line without its terminator, `None` at end of input
    fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn choose_printer(&self) -> io::Result<PrinterSelection> {
        self.say("Printers:")?;
        for (i, printer) in self.printers.iter().enumerate() {
            self.say(format!("  {}. {}", i + 1, printer))?;
        }
        self.prompt("Printer number (empty to cancel): ")?;

        let Some(answer) = self.read_line()? else {
            return Ok(PrinterSelection::None);
        };
        let chosen = answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.printers.get(i));

        Ok(chosen.cloned().into())
    }
}

impl<R: BufRead, W: Write> PrinterSelector for Console<R, W> {
    fn is_supported(&self) -> bool {
        !self.printers.is_empty()
    }

    async fn select(&self) -> PrinterSelection {
        self.choose_printer().unwrap_or_else(|e| {
            warn!(error = %e, "Printer picker failed");
            PrinterSelection::None
        })
    }
}
