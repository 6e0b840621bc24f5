// SPDX-License-Identifier: Apache-2.0

use std::io;

use clap::Parser;

use gatetab::gate::GateKind;
use gatetab::truth_table::TruthTable;

/// Generates and prints truth tables for the built-in gate catalog.
#[derive(Debug, Parser)]
#[command(name = "gatetab")]
#[command(about = "Print truth tables for single combinational gates")]
struct Args {
    /// Catalog gate names (e.g. AND, XOR, ADDER); prints the whole catalog
    /// when empty.
    gates: Vec<String>,

    /// Emit the tables as JSON instead of the text rendering.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> io::Result<()> {
    let _ = env_logger::builder().try_init();
    let args = Args::parse();

    let selected: Vec<GateKind> = if args.gates.is_empty() {
        GateKind::ALL.to_vec()
    } else {
        args.gates
            .iter()
            .map(|name| GateKind::from_name(name))
            .collect::<Result<_, _>>()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
    };

    let mut tables = Vec::with_capacity(selected.len());
    for gate in selected {
        let table = TruthTable::generate(gate)
            .map_err(|e| io::Error::new(io::ErrorKind::OutOfMemory, e))?;
        log::info!("generated {} rows for {}", table.size(), gate);
        tables.push(table);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tables)?);
    } else {
        for table in &tables {
            print!("{}", table.render(table.gate().name()));
        }
    }
    Ok(())
}
