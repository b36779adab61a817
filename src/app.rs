use std::io::{BufWriter, Read, Write, stdin, stdout};

use tracing::{debug, info};

use crate::{
    common::error::AppError,
    config::Config,
    domain::{catalog::Catalog, ledger::PurchaseStore},
    io::{
        reader::{self, SeedRecord},
        terminal::{LineTerminal, Terminal},
        writer,
    },
    worker::processor::{Flow, Processor},
};

pub fn run(config: &Config) -> Result<(), AppError> {
    let mut catalog = build_catalog(config)?;

    let stdin = stdin();
    let stdout = stdout();
    let mut terminal = LineTerminal::new(stdin.lock(), BufWriter::new(stdout.lock()));
    run_session(&mut catalog, &mut terminal)?;

    terminal.into_output().flush()?;
    Ok(())
}

/// Demo data unless the config asks for an empty catalog or a seed file.
pub fn build_catalog(config: &Config) -> Result<Catalog, AppError> {
    if let Some(path) = &config.seed {
        info!(path = %path.display(), "loading seed file");
        let file = std::fs::File::open(path)?;
        return load_seed(file);
    }
    if config.empty {
        return Ok(Catalog::new());
    }
    Ok(Catalog::with_defaults())
}

/// Builds a catalog from seed CSV, failing on the first invalid row.
pub fn load_seed<R: Read>(input: R) -> Result<Catalog, AppError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = rdr.headers()?.clone();
    for required in ["type", "name", "amount"] {
        if !headers.iter().any(|h| h == required) {
            return Err(AppError::Seed(format!("missing column: {required}")));
        }
    }

    let mut catalog = Catalog::new();
    for record in reader::read_seed(&mut rdr) {
        match record.map_err(AppError::Seed)? {
            SeedRecord::Customer {
                first_name,
                last_name,
                balance,
            } => {
                catalog.add_customer(first_name, last_name, balance)?;
            }
            SeedRecord::Product { name, price } => {
                catalog.add_product(name, price)?;
            }
        }
    }

    info!(
        customers = catalog.customers().len(),
        products = catalog.products().len(),
        "catalog seeded"
    );
    Ok(catalog)
}

/// Menu loop: render, read an option, run it, report domain errors and go on.
/// Ends on the exit option or when input runs out.
pub fn run_session<L, T>(catalog: &mut Catalog<L>, terminal: &mut T) -> Result<(), AppError>
where
    L: PurchaseStore,
    T: Terminal + ?Sized,
{
    let mut processor = Processor::new();

    loop {
        writer::write_menu(terminal)?;
        let option = match terminal.request_number("Your option: ") {
            Ok(option) => option,
            Err(AppError::InputClosed) => break,
            Err(err) => return Err(err),
        };
        terminal.display(&writer::rule())?;

        let outcome = match reader::read_command(terminal, option) {
            Ok(Some(command)) => processor.process(catalog, terminal, command),
            Ok(None) => terminal
                .display(&format!("Unknown option: {option}"))
                .map(|_| Flow::Continue),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(AppError::Market(err)) => {
                debug!(kind = err.kind(), "menu command rejected: {err}");
                terminal.display(&writer::error_line(&err))?;
            }
            Err(AppError::InputClosed) => break,
            Err(err) => return Err(err),
        }
    }

    info!("session finished");
    Ok(())
}
