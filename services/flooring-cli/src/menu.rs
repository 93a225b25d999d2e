//! Numbered main menu
//!
//! Every action runs to completion or fails with a [`CliError`]. Order errors
//! are shown to the operator and the menu comes back; console errors end the
//! session.

use flooring_types::order::Order;
use flooring_types::product::{lookup_key, Product};
use flooring_types::tax::TaxEntry;
use order_service::{FlooringService, ProductCatalog, TaxTable};
use persistence::OrderStore;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::console::Console;
use crate::error::CliError;

const BANNER: &str = "* * * * * * * * * * * * * * * *";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    DisplayOrders,
    AddOrder,
    EditOrder,
    RemoveOrder,
    ExportAll,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::DisplayOrders,
        MenuAction::AddOrder,
        MenuAction::EditOrder,
        MenuAction::RemoveOrder,
        MenuAction::ExportAll,
        MenuAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::DisplayOrders => "Display Orders",
            MenuAction::AddOrder => "Add an Order",
            MenuAction::EditOrder => "Edit an Order",
            MenuAction::RemoveOrder => "Remove an Order",
            MenuAction::ExportAll => "Export All Data",
            MenuAction::Quit => "Quit",
        }
    }

    /// Action for a 1-based menu number
    pub fn from_choice(choice: u32) -> Option<Self> {
        let idx = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }
}

pub struct Menu<'a, S, P, T, R, W> {
    service: &'a FlooringService<S, P, T>,
    console: Console<R, W>,
    export_file: PathBuf,
}

impl<'a, S, P, T, R, W> Menu<'a, S, P, T, R, W>
where
    S: OrderStore,
    P: ProductCatalog,
    T: TaxTable,
    R: BufRead,
    W: Write,
{
    pub fn new(
        service: &'a FlooringService<S, P, T>,
        console: Console<R, W>,
        export_file: PathBuf,
    ) -> Self {
        Self {
            service,
            console,
            export_file,
        }
    }

    /// Run until the operator quits or input closes.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let action = match self.select() {
                Ok(action) => action,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
                Err(e) => return Err(e),
            };
            debug!(?action, "Menu action selected");

            let result = match action {
                MenuAction::DisplayOrders => self.display_orders(),
                MenuAction::AddOrder => self.add_order(),
                MenuAction::EditOrder => self.edit_order(),
                MenuAction::RemoveOrder => self.remove_order(),
                MenuAction::ExportAll => self.export_all(),
                MenuAction::Quit => {
                    self.console.say("Exiting Flooring Program. Goodbye!")?;
                    return Ok(());
                }
            };

            match result {
                Ok(()) => {}
                Err(CliError::Flooring(e)) => self.console.say(format!("ERROR: {}", e))?,
                Err(CliError::Console(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    return Ok(())
                }
                Err(CliError::Console(e)) => return Err(e),
            }
        }
    }

    #[cfg(test)]
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn select(&mut self) -> io::Result<MenuAction> {
        self.console.say(format!("\n{}", BANNER))?;
        for (i, action) in MenuAction::ALL.iter().enumerate() {
            self.console.say(format!("{}. {}", i + 1, action.label()))?;
        }
        self.console.say(BANNER)?;

        let max = MenuAction::ALL.len() as u32;
        let choice = self.console.prompt_choice(max)?;
        Ok(MenuAction::from_choice(choice).unwrap_or(MenuAction::Quit))
    }

    fn display_orders(&mut self) -> Result<(), CliError> {
        let date = self.console.prompt_date("Enter date (YYYY-MM-DD): ")?;
        let orders = self.service.orders_by_date(date)?;
        if orders.is_empty() {
            self.console.say(format!("No orders found for {}", date))?;
        } else {
            self.console.show_orders(&orders)?;
        }
        Ok(())
    }

    fn add_order(&mut self) -> Result<(), CliError> {
        let date = self
            .console
            .prompt_future_date("Enter order date (YYYY-MM-DD): ", self.service.today())?;
        let name = self.console.prompt_non_blank("Enter customer name: ")?;
        let state = self.prompt_state()?;
        let product_type = self.prompt_product()?;
        let area = self.console.prompt_area("Enter area in sq ft (min 100): ")?;

        let mut order = Order::new(name, state, product_type, area);
        self.service.calculate_costs(&mut order)?;
        self.console.show_summary("Order Summary:", &order)?;

        if self
            .console
            .confirm("Would you like to place this order? (Y/N): ")?
        {
            let saved = self.service.add_order(date, order)?;
            self.console
                .say(format!("Order #{} successfully added!", saved.order_number))?;
        } else {
            self.console.say("Order discarded. Returning to main menu.")?;
        }
        Ok(())
    }

    fn edit_order(&mut self) -> Result<(), CliError> {
        let date = self.console.prompt_date("Enter date (YYYY-MM-DD): ")?;
        let orders = self.service.orders_by_date(date)?;
        if orders.is_empty() {
            self.console.say(format!("No orders found for {}", date))?;
            return Ok(());
        }

        self.console.say("Existing Orders:")?;
        self.console.show_orders(&orders)?;
        let number = self
            .console
            .prompt_order_number("Enter order number to edit: ")?;
        let Some(mut order) = orders.into_iter().find(|o| o.order_number == number) else {
            self.console.say("No order found with that number.")?;
            return Ok(());
        };

        self.console
            .say(format!("\nEditing Order #{}", order.order_number))?;
        self.console.say("(Leave blank to keep existing value)")?;

        let name = self
            .console
            .prompt(&format!("Enter new name ({}): ", order.customer_name))?;
        if !name.is_empty() {
            order.customer_name = name;
        }
        if let Some(state) = self.prompt_optional_state(&order.state)? {
            order.state = state;
        }
        if let Some(product_type) = self.prompt_optional_product(&order.product_type)? {
            order.product_type = product_type;
        }
        order.area = self.console.prompt_optional_area(order.area)?;

        self.service.calculate_costs(&mut order)?;
        self.console.show_summary("Updated Order Summary:", &order)?;

        if self
            .console
            .confirm("Would you like to save these changes? (Y/N): ")?
        {
            let saved = self.service.edit_order(date, order)?;
            self.console
                .say(format!("Order #{} successfully updated!", saved.order_number))?;
        } else {
            self.console.say("Edit discarded. Returning to main menu.")?;
        }
        Ok(())
    }

    fn remove_order(&mut self) -> Result<(), CliError> {
        let date = self.console.prompt_date("Enter date (YYYY-MM-DD): ")?;
        let orders = self.service.orders_by_date(date)?;
        if orders.is_empty() {
            self.console.say(format!("No orders found for {}", date))?;
            return Ok(());
        }

        self.console.show_orders(&orders)?;
        let number = self
            .console
            .prompt_order_number("Enter order number to remove: ")?;
        let removed = self.service.remove_order(date, number)?;
        self.console.say(format!("Order removed:\n{}", removed))?;
        Ok(())
    }

    fn export_all(&mut self) -> Result<(), CliError> {
        let summary = self.service.export_all(&self.export_file)?;
        self.console.say(format!(
            "Exported {} orders from {} dates to {}",
            summary.orders,
            summary.partitions,
            summary.path.display()
        ))?;
        Ok(())
    }

    // ── Reference pickers ───────────────────────────────────────────

    fn prompt_state(&mut self) -> Result<String, CliError> {
        let taxes = self.service.list_tax_rates()?;
        self.show_states(&taxes)?;
        loop {
            let raw = self.console.prompt("Enter state abbreviation: ")?;
            if let Some(entry) = find_tax(&taxes, &raw) {
                return Ok(entry.state_abbreviation.clone());
            }
            self.console
                .say("Invalid state abbreviation. Please choose from the list.")?;
        }
    }

    fn prompt_optional_state(&mut self, current: &str) -> Result<Option<String>, CliError> {
        let taxes = self.service.list_tax_rates()?;
        self.show_states(&taxes)?;
        let raw = self
            .console
            .prompt(&format!("Enter new state ({}): ", current))?;
        if raw.is_empty() {
            return Ok(None);
        }
        match find_tax(&taxes, &raw) {
            Some(entry) => Ok(Some(entry.state_abbreviation.clone())),
            None => {
                self.console
                    .say("Invalid state abbreviation. Keeping old value.")?;
                Ok(None)
            }
        }
    }

    fn prompt_product(&mut self) -> Result<String, CliError> {
        let products = self.service.list_products()?;
        self.show_products(&products)?;
        loop {
            let raw = self.console.prompt("Enter product type: ")?;
            if let Some(product) = find_product(&products, &raw) {
                return Ok(product.product_type.clone());
            }
            self.console
                .say("Invalid product type. Please select from the list.")?;
        }
    }

    fn prompt_optional_product(&mut self, current: &str) -> Result<Option<String>, CliError> {
        let products = self.service.list_products()?;
        self.show_products(&products)?;
        let raw = self
            .console
            .prompt(&format!("Enter new product ({}): ", current))?;
        if raw.is_empty() {
            return Ok(None);
        }
        match find_product(&products, &raw) {
            Some(product) => Ok(Some(product.product_type.clone())),
            None => {
                self.console
                    .say("Invalid product type. Keeping old value.")?;
                Ok(None)
            }
        }
    }

    fn show_states(&mut self, taxes: &[TaxEntry]) -> io::Result<()> {
        self.console.say("Available states:")?;
        for entry in taxes {
            self.console.say(format!(
                " - {} ({})",
                entry.state_abbreviation, entry.state_name
            ))?;
        }
        Ok(())
    }

    fn show_products(&mut self, products: &[Product]) -> io::Result<()> {
        self.console.say("Available products:")?;
        for product in products {
            self.console.say(format!(" - {}", product))?;
        }
        Ok(())
    }
}

fn find_tax<'t>(taxes: &'t [TaxEntry], raw: &str) -> Option<&'t TaxEntry> {
    let key = lookup_key(raw);
    taxes.iter().find(|t| t.key() == key)
}

fn find_product<'p>(products: &'p [Product], raw: &str) -> Option<&'p Product> {
    let key = lookup_key(raw);
    products.iter().find(|p| p.key() == key)
}
