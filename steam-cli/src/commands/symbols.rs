//! Print the flat symbol table.

use serde::Serialize;
use std::fmt;
use steam_types::FlatSymbol;

/// One row of the table.
#[derive(Debug, Serialize)]
pub struct SymbolEntry {
    pub name: &'static str,
    pub interface: Option<&'static str>,
    pub accessor: bool,
}

/// Every export the binding resolves, in resolution order.
#[derive(Debug, Serialize)]
pub struct SymbolsReport {
    pub symbols: Vec<SymbolEntry>,
}

impl fmt::Display for SymbolsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.symbols.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let owner = entry.interface.unwrap_or("-");
            write!(f, "{:<20} {}", owner, entry.name)?;
        }
        Ok(())
    }
}

/// Run the symbols command.
pub fn run() -> SymbolsReport {
    SymbolsReport {
        symbols: FlatSymbol::ALL
            .iter()
            .map(|symbol| SymbolEntry {
                name: symbol.name(),
                interface: symbol.interface().map(|i| i.name()),
                accessor: symbol.is_accessor(),
            })
            .collect(),
    }
}
