use crate::{
    common::error::AppError,
    domain::{
        catalog::Catalog,
        ids::{CustomerId, ProductId},
        ledger::PurchaseStore,
    },
    io::terminal::Terminal,
};

pub fn handle<L: PurchaseStore, T: Terminal + ?Sized>(
    catalog: &mut Catalog<L>,
    terminal: &mut T,
    customer: CustomerId,
    product: ProductId,
) -> Result<(), AppError> {
    // domain errors bubble up untouched; nothing was written yet
    let purchase = catalog.buy(customer, product)?;

    terminal.display("Operation successful!")?;
    terminal.display(&format!(
        "Customer: {} bought product: {}",
        purchase.customer, purchase.product
    ))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{
        common::{error::MarketError, money::Money},
        io::terminal::LineTerminal,
    };

    type TestTerminal = LineTerminal<Cursor<Vec<u8>>, Vec<u8>>;

    fn terminal() -> TestTerminal {
        LineTerminal::new(Cursor::new(Vec::new()), Vec::new())
    }

    fn output(term: TestTerminal) -> String {
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn handle_reports_purchase_with_updated_balance() {
        let mut catalog = Catalog::with_defaults();
        let mut term = terminal();

        handle(&mut catalog, &mut term, 1, 1).unwrap();

        assert_eq!(
            output(term),
            "Operation successful!\n\
Customer: #1 Hulda Serafini (Balance: 985) bought product: #1 Milk (Price: 15)\n"
        );
        assert_eq!(catalog.ledger().products_bought_by(1), vec![1]);
    }

    #[test]
    fn handle_propagates_insufficient_funds_without_output() {
        let mut catalog = Catalog::new();
        catalog.add_customer("Alice", "Smith", Money::new(10)).unwrap();
        catalog.add_product("Milk", Money::new(15)).unwrap();
        let mut term = terminal();

        let err = handle(&mut catalog, &mut term, 1, 1).unwrap_err();

        assert!(matches!(
            err,
            AppError::Market(MarketError::InsufficientFunds { .. })
        ));
        assert_eq!(catalog.customer(1).unwrap().balance(), Money::new(10));
        assert!(catalog.ledger().products_bought_by(1).is_empty());
        assert_eq!(output(term), "");
    }

    #[test]
    fn handle_propagates_unknown_ids() {
        let mut catalog = Catalog::with_defaults();
        let mut term = terminal();

        let err = handle(&mut catalog, &mut term, 1, 9).unwrap_err();
        assert!(matches!(
            err,
            AppError::Market(MarketError::ProductNotFound(9))
        ));
    }
}
