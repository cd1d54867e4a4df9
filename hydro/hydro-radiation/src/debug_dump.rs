//! CSV tables of the damping and retardation functions.
//!
//! Emitted at model construction when `output Br and K` is set. Format: a
//! header row of column names, one row per sample, comma-separated:
//! `omega,Br_11,...,Br_66` over the frequency grid and `tau,K_11,...,K_66`
//! over the diagnostic τ grid. Purely a debugging aid; nothing in the
//! simulation reads these back.

use std::io::Write;

use crate::convolution::ConvolutionEngine;

pub(crate) fn dump_tables(
    sink: &mut dyn Write,
    engine: &ConvolutionEngine,
    omegas: &[f64],
    taus: &[f64],
) -> std::io::Result<()> {
    writeln!(sink, "Debugging information for damping functions Br:")?;
    write_table(sink, "omega", "Br", omegas, |i, j, omega| {
        engine.damping_kernel(i, j).source_at(omega)
    })?;
    writeln!(sink)?;
    writeln!(sink, "Debugging information for retardation functions K:")?;
    write_table(sink, "tau", "K", taus, |i, j, tau| {
        engine.damping_kernel(i, j).evaluate(tau)
    })
}

fn write_table(
    sink: &mut dyn Write,
    abscissa_name: &str,
    value_name: &str,
    abscissae: &[f64],
    value: impl Fn(usize, usize, f64) -> f64,
) -> std::io::Result<()> {
    write!(sink, "{abscissa_name}")?;
    for i in 0..6 {
        for j in 0..6 {
            write!(sink, ",{}_{}{}", value_name, i + 1, j + 1)?;
        }
    }
    writeln!(sink)?;
    for &x in abscissae {
        write!(sink, "{x}")?;
        for i in 0..6 {
            for j in 0..6 {
                write!(sink, ",{}", value(i, j, x))?;
            }
        }
        writeln!(sink)?;
    }
    Ok(())
}
