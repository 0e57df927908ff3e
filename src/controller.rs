//! Interactive text menu over an [`Inventory`].
//!
//! Generic over the input and output streams so a session can be scripted:
//!
//! ```rust,no_run
//! use stockbook::{Config, Controller, Inventory};
//!
//! let inventory = Inventory::new(&Config::default());
//! let stdin = std::io::stdin();
//! Controller::new(inventory, stdin.lock(), std::io::stdout())
//!     .run()
//!     .unwrap();
//! ```

use crate::error::{Error, Result};
use crate::inventory::Inventory;
use crate::model::Product;
use crate::products::ProductUpdate;
use log::debug;
use std::io::{BufRead, Write};
use std::str::FromStr;

const MENU: &str = "
===== INVENTORY & SALES =====
1. Register product
2. List products
3. Update product
4. Delete product
5. Record sale
6. Sales report
7. Exit
";

/// What the loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Menu loop: one prompt, one store operation, one printed result per pass.
pub struct Controller<R, W> {
    inventory: Inventory,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    /// Wire `inventory` to the given streams.
    pub fn new(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
        }
    }

    /// Run until the user picks Exit or input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(choice) = self.ask("\nChoose an option: ")? else {
                break;
            };
            debug!("menu choice {choice:?}");
            let step = match choice.as_str() {
                "1" => self.register_product()?,
                "2" => self.list_products()?,
                "3" => self.update_product()?,
                "4" => self.delete_product()?,
                "5" => self.record_sale()?,
                "6" => self.sales_report()?,
                "7" => Step::Exit,
                _ => {
                    writeln!(self.output, "Invalid option. Try again.")?;
                    Step::Continue
                }
            };
            if step == Step::Exit {
                break;
            }
        }
        writeln!(self.output, "Thanks for using the system!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Give back the streams and inventory, mostly for inspecting output.
    pub fn into_parts(self) -> (Inventory, R, W) {
        (self.inventory, self.input, self.output)
    }

    fn register_product(&mut self) -> Result<Step> {
        let Some(id) = self.ask("Product ID: ")? else {
            return Ok(Step::Exit);
        };
        let Some(name) = self.ask("Name: ")? else {
            return Ok(Step::Exit);
        };
        let Some(price) = self.ask("Price: ")? else {
            return Ok(Step::Exit);
        };
        let Some(price) = self.number::<f64>(&price, "price")? else {
            return Ok(Step::Continue);
        };
        let Some(category) = self.ask("Category: ")? else {
            return Ok(Step::Exit);
        };
        let Some(stock) = self.ask("Stock: ")? else {
            return Ok(Step::Exit);
        };
        let Some(stock) = self.number::<u32>(&stock, "stock")? else {
            return Ok(Step::Continue);
        };
        let Some(discount) = self.ask("Discount 0-1 (Enter for none): ")? else {
            return Ok(Step::Exit);
        };

        let mut product = Product::new(id, name, price, category, stock);
        if !discount.is_empty() {
            let Some(discount) = self.number::<f64>(&discount, "discount")? else {
                return Ok(Step::Continue);
            };
            product = product.discounted(discount);
        }

        let name = product.name.clone();
        match self.inventory.products.register(product) {
            Ok(()) => writeln!(self.output, "Product '{name}' registered.")?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Step::Continue)
    }

    fn list_products(&mut self) -> Result<Step> {
        match self.inventory.products.load() {
            Ok(products) if products.is_empty() => {
                writeln!(self.output, "No products registered.")?;
            }
            Ok(products) => {
                writeln!(
                    self.output,
                    "{:<10} {:<20} {:<10} {:<15} {:<10}",
                    "ID", "Name", "Price", "Category", "Stock"
                )?;
                for product in &products {
                    writeln!(self.output, "{product}")?;
                }
            }
            Err(e) => self.report_error(&e)?,
        }
        Ok(Step::Continue)
    }

    fn update_product(&mut self) -> Result<Step> {
        let Some(id) = self.ask("Product ID to update: ")? else {
            return Ok(Step::Exit);
        };
        let Some(name) = self.ask("New name (Enter to keep): ")? else {
            return Ok(Step::Exit);
        };
        let Some(price) = self.ask("New price (Enter to keep): ")? else {
            return Ok(Step::Exit);
        };
        let Some(price) = self.optional_number::<f64>(&price, "price")? else {
            return Ok(Step::Continue);
        };
        let Some(category) = self.ask("New category (Enter to keep): ")? else {
            return Ok(Step::Exit);
        };
        let Some(stock) = self.ask("New stock (Enter to keep): ")? else {
            return Ok(Step::Exit);
        };
        let Some(stock) = self.optional_number::<u32>(&stock, "stock")? else {
            return Ok(Step::Continue);
        };

        let changes = ProductUpdate {
            name: Some(name).filter(|s| !s.is_empty()),
            price,
            category: Some(category).filter(|s| !s.is_empty()),
            stock,
        };
        if changes.is_empty() {
            match self.inventory.products.get(&id) {
                Ok(_) => writeln!(self.output, "Nothing to update.")?,
                Err(e) => self.report_error(&e)?,
            }
            return Ok(Step::Continue);
        }
        match self.inventory.products.update(&id, &changes) {
            Ok(_) => writeln!(self.output, "Product updated.")?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Step::Continue)
    }

    fn delete_product(&mut self) -> Result<Step> {
        let Some(id) = self.ask("Product ID to delete: ")? else {
            return Ok(Step::Exit);
        };
        match self.inventory.products.delete(&id) {
            Ok(_) => writeln!(self.output, "Product with ID {id} deleted.")?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Step::Continue)
    }

    fn record_sale(&mut self) -> Result<Step> {
        let Some(id) = self.ask("Product ID sold: ")? else {
            return Ok(Step::Exit);
        };
        let Some(quantity) = self.ask("Quantity sold: ")? else {
            return Ok(Step::Exit);
        };
        let Some(quantity) = self.number::<u32>(&quantity, "quantity")? else {
            return Ok(Step::Continue);
        };
        match self.inventory.record_sale(&id, quantity) {
            Ok(sale) => writeln!(self.output, "Sale recorded. Total: ${:.2}", sale.total)?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Step::Continue)
    }

    fn sales_report(&mut self) -> Result<Step> {
        match self.inventory.sales.report() {
            Ok(report) => write!(self.output, "{report}")?,
            Err(e) => self.report_error(&e)?,
        }
        Ok(Step::Continue)
    }

    // ---- input helpers ----

    /// Print `label` and read one trimmed line. `None` at end of input.
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Parse `raw`, printing an error and returning `None` if it isn't a `T`.
    fn number<T: FromStr>(&mut self, raw: &str, what: &str) -> Result<Option<T>> {
        match raw.parse::<T>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => {
                writeln!(self.output, "ERROR: '{raw}' is not a valid {what}.")?;
                Ok(None)
            }
        }
    }

    /// Blank keeps the current value (`Some(None)`); anything else must parse.
    fn optional_number<T: FromStr>(&mut self, raw: &str, what: &str) -> Result<Option<Option<T>>> {
        if raw.is_empty() {
            return Ok(Some(None));
        }
        Ok(self.number(raw, what)?.map(Some))
    }

    fn report_error(&mut self, err: &Error) -> Result<()> {
        writeln!(self.output, "ERROR: {err}")?;
        Ok(())
    }
}
