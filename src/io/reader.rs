use std::{io::Read, str::FromStr};

use crate::{
    common::{command::MenuCommand, error::AppError, money::Money},
    io::terminal::Terminal,
};

/// Gathers the arguments for a menu option and builds the command.
///
/// Returns `Ok(None)` for option numbers the menu does not offer.
pub fn read_command<T: Terminal + ?Sized>(
    terminal: &mut T,
    option: u64,
) -> Result<Option<MenuCommand>, AppError> {
    let command = match option {
        1 => {
            let first_name = terminal.request_text("Enter first name: ")?;
            let last_name = terminal.request_text("Enter last name: ")?;
            let balance = terminal.request_number("Enter the balance: ")?;
            MenuCommand::AddCustomer {
                first_name,
                last_name,
                balance: Money::new(balance),
            }
        }
        2 => {
            let name = terminal.request_text("Enter the name of the product: ")?;
            let price = terminal.request_number("Enter the price: ")?;
            MenuCommand::AddProduct {
                name,
                price: Money::new(price),
            }
        }
        3 => {
            let customer = terminal.request_number("Enter the id of a customer: ")?;
            let product = terminal.request_number("Enter the id of a product: ")?;
            MenuCommand::Buy { customer, product }
        }
        4 => MenuCommand::ListCustomers,
        5 => MenuCommand::ListProducts,
        6 => MenuCommand::CustomerPurchases {
            customer: terminal.request_number("Enter the id of a customer: ")?,
        },
        7 => MenuCommand::ProductBuyers {
            product: terminal.request_number("Enter the product ID: ")?,
        },
        8 => MenuCommand::RemoveCustomer {
            customer: terminal.request_number("Enter the ID of a customer: ")?,
        },
        9 => MenuCommand::RemoveProduct {
            product: terminal.request_number("Enter the ID of a product: ")?,
        },
        10 => MenuCommand::Exit,
        _ => return Ok(None),
    };
    Ok(Some(command))
}

/// One catalog entry from a seed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedRecord {
    Customer {
        first_name: String,
        last_name: String,
        balance: Money,
    },
    Product {
        name: String,
        price: Money,
    },
}

#[derive(serde::Deserialize)]
/// Internal CSV row matching the seed headers. `last_name` stays empty for
/// product rows.
struct SeedRow {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    last_name: Option<String>,
    amount: Option<String>,
}

/// Reads and validates seed rows from a CSV reader.
///
/// Supported headers: `type,name,last_name,amount`. `type` is `customer` or
/// `product` (case-insensitive); `amount` is the balance or the price. Errors
/// carry the 1-based data row number.
///
/// # Examples
///
/// ```
/// use marketplace::io::reader::{read_seed, SeedRecord};
/// use csv::ReaderBuilder;
///
/// let data = "type,name,last_name,amount\n\
/// customer,Alice,Smith,1000\n\
/// product,Milk,,15\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let records: Vec<_> = read_seed(&mut rdr).collect();
///
/// assert!(matches!(&records[0], Ok(SeedRecord::Customer { first_name, .. }) if first_name == "Alice"));
/// assert!(matches!(&records[1], Ok(SeedRecord::Product { name, .. }) if name == "Milk"));
/// ```
pub fn read_seed<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<SeedRecord, String>> + '_ {
    rdr.deserialize::<SeedRow>()
        .enumerate()
        .map(|(idx, res)| {
            let row_no = idx + 1;
            let row = res.map_err(|e| format!("row {row_no}: {e}"))?;
            let kind = row.kind.trim().to_ascii_lowercase();
            let name = non_blank(&row.name, "name", row_no)?;
            let amount = row
                .amount
                .ok_or_else(|| format!("row {row_no}: {kind} missing amount"))?;
            let amount =
                Money::from_str(&amount).map_err(|e| format!("row {row_no}: amount: {e}"))?;

            match kind.as_str() {
                "customer" => {
                    let last_name = row
                        .last_name
                        .ok_or_else(|| format!("row {row_no}: customer missing last_name"))?;
                    Ok(SeedRecord::Customer {
                        first_name: name,
                        last_name: non_blank(&last_name, "last_name", row_no)?,
                        balance: amount,
                    })
                }
                "product" => Ok(SeedRecord::Product {
                    name,
                    price: amount,
                }),
                other => Err(format!("row {row_no}: unknown record type: {other}")),
            }
        })
}

fn non_blank(value: &str, field: &str, row_no: usize) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err(format!("row {row_no}: {field} must not be blank"))
    } else {
        Ok(value.to_string())
    }
}
