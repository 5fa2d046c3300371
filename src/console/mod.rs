use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::ServiceError;
use crate::services::InventoryService;

/// Line-oriented interactive shell over the inventory service
///
/// Generic over its reader and writer so sessions can be scripted in
/// tests. Domain failures are caught here and reported as text;
/// malformed input (bad integer, date, or id) propagates out of `run`
/// and terminates the process.
pub struct ConsoleApp<R, W> {
    service: InventoryService,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleApp<R, W> {
    /// Create a new ConsoleApp over the given service and streams
    pub fn new(service: InventoryService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Run the menu loop until the user selects exit
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let choice = self.read_u32("Choice: ")?;
            if !self.handle_choice(choice)? {
                break;
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== Restaurant Inventory ===")?;
        writeln!(self.output, "1. Add item")?;
        writeln!(self.output, "2. Use item")?;
        writeln!(self.output, "3. Remove expired items")?;
        writeln!(self.output, "4. Inventory correction")?;
        writeln!(self.output, "5. Current stock")?;
        writeln!(self.output, "6. Critical stock")?;
        writeln!(self.output, "0. Exit")?;
        Ok(())
    }

    /// Dispatch a menu choice; returns false when the session should end
    fn handle_choice(&mut self, choice: u32) -> Result<bool> {
        match choice {
            1 => self.add_item()?,
            2 => self.use_item()?,
            3 => {
                self.service.remove_expired_items()?;
                writeln!(self.output, "Expired items removed")?;
            }
            4 => self.inventory_correction()?,
            5 => self.show_all_items()?,
            6 => self.critical_stock()?,
            0 => {
                writeln!(self.output, "Exiting..")?;
                return Ok(false);
            }
            _ => writeln!(self.output, "Invalid choice")?,
        }
        Ok(true)
    }

    fn add_item(&mut self) -> Result<()> {
        let name = self.read_line("Name: ")?;
        let expiration_date = self.read_date("Expiration date (YYYY-MM-DD): ")?;
        let unit_of_measure = self.read_line("Unit of measure: ")?;
        let quantity = self.read_u32("Quantity: ")?;

        let item = self
            .service
            .add_item(name, expiration_date, unit_of_measure, quantity)?;
        writeln!(self.output, "Item added: {}", item.id)?;
        Ok(())
    }

    fn use_item(&mut self) -> Result<()> {
        let id = self.read_uuid("Item id: ")?;
        let item = match self.service.find_by_id(id)? {
            Some(item) => item,
            None => {
                return self.report_domain_error(ServiceError::ItemNotFound { id });
            }
        };
        writeln!(
            self.output,
            "Current quantity: {} {}",
            item.quantity, item.unit_of_measure
        )?;

        let quantity = self.read_u32("Quantity to use: ")?;
        match self.service.use_item(id, quantity) {
            Ok(updated) => {
                writeln!(self.output, "Item used")?;
                writeln!(self.output, "Remaining quantity: {}", updated.quantity)?;
            }
            Err(err) => self.report_domain_error(err)?,
        }
        Ok(())
    }

    fn inventory_correction(&mut self) -> Result<()> {
        let id = self.read_uuid("Item id: ")?;
        let item = match self.service.find_by_id(id)? {
            Some(item) => item,
            None => {
                return self.report_domain_error(ServiceError::ItemNotFound { id });
            }
        };
        writeln!(
            self.output,
            "Current quantity: {} {}",
            item.quantity, item.unit_of_measure
        )?;

        let new_quantity = self.read_u32("New quantity: ")?;
        match self.service.perform_inventory_correction(id, new_quantity) {
            Ok(_) => writeln!(self.output, "Quantity corrected")?,
            Err(err) => self.report_domain_error(err)?,
        }
        Ok(())
    }

    fn show_all_items(&mut self) -> Result<()> {
        for item in self.service.list_all()? {
            writeln!(self.output, "{}", item)?;
        }
        Ok(())
    }

    fn critical_stock(&mut self) -> Result<()> {
        let threshold = self.read_u32("Threshold: ")?;
        for item in self.service.list_critical(threshold)? {
            writeln!(self.output, "{}", item)?;
        }
        Ok(())
    }

    /// Print a domain failure and keep the session alive; anything else
    /// is unexpected and aborts the loop
    fn report_domain_error(&mut self, err: ServiceError) -> Result<()> {
        match err {
            ServiceError::ItemNotFound { .. } | ServiceError::InsufficientQuantity { .. } => {
                writeln!(self.output, "Error: {}", err)?;
                Ok(())
            }
            other => Err(other.into()),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            bail!("input stream closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn read_u32(&mut self, prompt: &str) -> Result<u32> {
        let line = self.read_line(prompt)?;
        line.trim()
            .parse()
            .with_context(|| format!("invalid number: {:?}", line))
    }

    fn read_date(&mut self, prompt: &str) -> Result<NaiveDate> {
        let line = self.read_line(prompt)?;
        line.trim()
            .parse()
            .with_context(|| format!("invalid date: {:?}", line))
    }

    fn read_uuid(&mut self, prompt: &str) -> Result<Uuid> {
        let line = self.read_line(prompt)?;
        line.trim()
            .parse()
            .with_context(|| format!("invalid item id: {:?}", line))
    }
}
