//! Line-oriented prompts over any reader/writer pair
//!
//! Required prompts repeat until the answer parses. Closed input surfaces as
//! `io::ErrorKind::UnexpectedEof` so the menu can end the session.

use chrono::NaiveDate;
use flooring_types::ids::OrderNumber;
use flooring_types::numeric::MIN_AREA;
use flooring_types::order::Order;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const RULE: &str = "-----------------------------------------";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", message.as_ref())
    }

    /// Print `message` and read one trimmed line.
    pub fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Menu selection between 1 and `max`.
    pub fn prompt_choice(&mut self, max: u32) -> io::Result<u32> {
        loop {
            match self.prompt("Choose an option: ")?.parse::<u32>() {
                Ok(n) if (1..=max).contains(&n) => return Ok(n),
                Ok(_) => self.say(format!("Please enter a number between 1 and {}.", max))?,
                Err(_) => self.say("Invalid input. Try again.")?,
            }
        }
    }

    pub fn prompt_date(&mut self, message: &str) -> io::Result<NaiveDate> {
        loop {
            let raw = self.prompt(message)?;
            match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
                Ok(date) => return Ok(date),
                Err(_) => self.say("Invalid format. Use YYYY-MM-DD.")?,
            }
        }
    }

    /// Date strictly after `today`.
    pub fn prompt_future_date(&mut self, message: &str, today: NaiveDate) -> io::Result<NaiveDate> {
        loop {
            let date = self.prompt_date(message)?;
            if date > today {
                return Ok(date);
            }
            self.say("Date must be in the future.")?;
        }
    }

    pub fn prompt_non_blank(&mut self, message: &str) -> io::Result<String> {
        loop {
            let answer = self.prompt(message)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say("Value cannot be blank.")?;
        }
    }

    /// Area of at least 100 sq ft.
    pub fn prompt_area(&mut self, message: &str) -> io::Result<Decimal> {
        loop {
            match Decimal::from_str(&self.prompt(message)?) {
                Ok(area) if area >= MIN_AREA => return Ok(area),
                Ok(_) => self.say("Must be at least 100 sq ft.")?,
                Err(_) => self.say("Invalid input. Try again.")?,
            }
        }
    }

    /// Blank keeps `current`; anything invalid also keeps it, with a notice.
    pub fn prompt_optional_area(&mut self, current: Decimal) -> io::Result<Decimal> {
        let raw = self.prompt(&format!("Enter new area ({}): ", current))?;
        if raw.is_empty() {
            return Ok(current);
        }
        match Decimal::from_str(&raw) {
            Ok(area) if area >= MIN_AREA => Ok(area),
            Ok(_) => {
                self.say("Must be at least 100 sq ft. Keeping old value.")?;
                Ok(current)
            }
            Err(_) => {
                self.say("Invalid input. Keeping old value.")?;
                Ok(current)
            }
        }
    }

    pub fn prompt_order_number(&mut self, message: &str) -> io::Result<OrderNumber> {
        loop {
            match self.prompt(message)?.parse::<OrderNumber>() {
                Ok(n) => return Ok(n),
                Err(_) => self.say("Invalid number. Try again.")?,
            }
        }
    }

    pub fn confirm(&mut self, message: &str) -> io::Result<bool> {
        loop {
            let answer = self.prompt(message)?;
            if answer.eq_ignore_ascii_case("y") {
                return Ok(true);
            }
            if answer.eq_ignore_ascii_case("n") {
                return Ok(false);
            }
            self.say("Please enter Y or N.")?;
        }
    }

    pub fn show_orders(&mut self, orders: &[Order]) -> io::Result<()> {
        for order in orders {
            self.say(order.to_string())?;
        }
        Ok(())
    }

    pub fn show_summary(&mut self, title: &str, order: &Order) -> io::Result<()> {
        self.say(format!("\n{}", title))?;
        self.say(RULE)?;
        self.say(format!("Customer: {}", order.customer_name))?;
        self.say(format!("State: {}", order.state))?;
        self.say(format!("Tax Rate: {}%", order.tax_rate))?;
        self.say(format!("Product: {}", order.product_type))?;
        self.say(format!("Area: {} sq ft", order.area))?;
        self.say(format!("Material Cost: ${}", order.material_cost))?;
        self.say(format!("Labor Cost: ${}", order.labor_cost))?;
        self.say(format!("Tax: ${}", order.tax))?;
        self.say(format!("Total: ${}", order.total))?;
        self.say(RULE)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_prompt_date_retries() {
        let mut c = console("06/01/2030\n2030-06-01\n");
        let date = c.prompt_date("Date: ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2030, 6, 1).unwrap());
        assert!(output(c).contains("Invalid format"));
    }

    #[test]
    fn test_prompt_future_date() {
        let today = NaiveDate::from_ymd_opt(2030, 6, 1).unwrap();
        let mut c = console("2030-06-01\n2030-06-02\n");
        assert_eq!(
            c.prompt_future_date("Date: ", today).unwrap(),
            NaiveDate::from_ymd_opt(2030, 6, 2).unwrap()
        );
        assert!(output(c).contains("Date must be in the future."));
    }

    #[test]
    fn test_prompt_area_enforces_minimum() {
        let mut c = console("lots\n99.99\n100\n");
        assert_eq!(c.prompt_area("Area: ").unwrap(), Decimal::ONE_HUNDRED);
        let shown = output(c);
        assert!(shown.contains("Invalid input"));
        assert!(shown.contains("Must be at least 100 sq ft."));
    }

    #[test]
    fn test_optional_area_keeps_current() {
        let current = Decimal::new(15_000, 2);
        let mut c = console("\n50\n200\n");
        assert_eq!(c.prompt_optional_area(current).unwrap(), current);
        assert_eq!(c.prompt_optional_area(current).unwrap(), current);
        assert_eq!(c.prompt_optional_area(current).unwrap(), Decimal::from(200));
    }

    #[test]
    fn test_confirm() {
        let mut c = console("maybe\ny\nN\n");
        assert!(c.confirm("Ok? ").unwrap());
        assert!(!c.confirm("Ok? ").unwrap());
    }

    #[test]
    fn test_closed_input_is_eof() {
        let mut c = console("");
        let err = c.prompt("Anything: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_choice_range() {
        let mut c = console("0\nseven\n7\n3\n");
        assert_eq!(c.prompt_choice(6).unwrap(), 3);
    }
}
