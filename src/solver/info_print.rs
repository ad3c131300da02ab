use crate::algebra::*;
use crate::io::PrintTarget;
use crate::solver::SolverSettings;
use std::fmt::Display;
use std::io::Write;

// Progress printing shared by the iterative solvers.  Every function
// is a no-op unless `settings.verbose` is set.

macro_rules! expformat {
    ($fmt:expr,$val:expr) => {
        if $val.is_finite() {
            $crate::solver::info_print::_exp_str_reformat(format!($fmt, $val))
        } else {
            format!($fmt, $val)
        }
    };
}
pub(crate) use expformat;

const RULE: &str = "-------------------------------------------------------------";

pub(crate) fn print_banner<T: FloatT>(
    out: &mut PrintTarget,
    settings: &SolverSettings<T>,
) -> std::io::Result<()> {
    if !settings.verbose {
        return Ok(());
    }
    writeln!(out, "{}", RULE)?;
    writeln!(out, "           numlab v{}  -  dense linear algebra", crate::VERSION)?;
    writeln!(out, "{}", RULE)?;
    Ok(())
}

pub(crate) fn print_configuration<T: FloatT>(
    out: &mut PrintTarget,
    settings: &SolverSettings<T>,
    method: &str,
    n: usize,
) -> std::io::Result<()> {
    if !settings.verbose {
        return Ok(());
    }
    print_banner(out, settings)?;

    writeln!(out, "\nproblem:")?;
    writeln!(out, "  method        = {}", method)?;
    writeln!(out, "  dimension     = {}", n)?;

    writeln!(out, "\nsettings:")?;
    writeln!(
        out,
        "  eps = {:.1e}, max iter = {}, precision: {} bit",
        settings.eps,
        settings.max_iter,
        _get_precision_string::<T>()
    )?;
    writeln!(out)?;
    Ok(())
}

/// Column headings followed by a rule.  `columns` is printed verbatim
/// after the iteration counter.
pub(crate) fn print_status_header<T: FloatT>(
    out: &mut PrintTarget,
    settings: &SolverSettings<T>,
    columns: &str,
) -> std::io::Result<()> {
    if !settings.verbose {
        return Ok(());
    }
    writeln!(out, "iter  {}", columns)?;
    writeln!(out, "{}", RULE)?;
    out.flush()?;
    Ok(())
}

pub(crate) fn print_footer<T: FloatT>(
    out: &mut PrintTarget,
    settings: &SolverSettings<T>,
    iterations: u32,
    status: &dyn Display,
) -> std::io::Result<()> {
    if !settings.verbose {
        return Ok(());
    }
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Terminated with status = {}", status)?;
    writeln!(out, "iterations = {}", iterations)?;
    out.flush()?;
    Ok(())
}

fn _get_precision_string<T: FloatT>() -> String {
    (::std::mem::size_of::<T>() * 8).to_string()
}

// convert a string in LowerExp display format into one that
// 1) always has a sign after the exponent, and
// 2) has at least two digits in the exponent.
pub(crate) fn _exp_str_reformat(mut thestr: String) -> String {
    let Some(eidx) = thestr.find('e') else {
        return thestr;
    };
    let has_sign = thestr[eidx + 1..].starts_with('-');

    let has_short_exp = {
        if !has_sign {
            thestr.len() == eidx + 2
        } else {
            thestr.len() == eidx + 3
        }
    };

    let chars = match (has_sign, has_short_exp) {
        (false, true) => "+0",
        (false, false) => "+",
        (true, true) => "0",
        (true, false) => "",
    };

    let shift = if has_sign { 2 } else { 1 };
    thestr.insert_str(eidx + shift, chars);
    thestr
}

#[test]
fn test_exp_str_reformat() {
    assert_eq!(_exp_str_reformat(format!("{:.2e}", 1.5e-3)), "1.50e-03");
    assert_eq!(_exp_str_reformat(format!("{:.2e}", 2.0e12)), "2.00e+12");
    assert_eq!(_exp_str_reformat(format!("{:.1e}", 7.0)), "7.0e+00");
    assert_eq!(expformat!("{:.1e}", f64::INFINITY), "inf");
}

#[test]
fn test_silent_unless_verbose() {
    use crate::io::ConfigurablePrintTarget;

    let mut out = PrintTarget::Buffer(Vec::new());
    let quiet = SolverSettings::<f64>::default();
    print_configuration(&mut out, &quiet, "Jacobi", 3).unwrap();
    print_footer(&mut out, &quiet, 4, &"Solved").unwrap();
    assert_eq!(out.get_print_buffer().unwrap(), "");

    let loud = SolverSettings::<f64> {
        verbose: true,
        ..quiet
    };
    print_configuration(&mut out, &loud, "Jacobi", 3).unwrap();
    print_footer(&mut out, &loud, 4, &"Solved").unwrap();
    let text = out.get_print_buffer().unwrap();
    assert!(text.contains("dimension     = 3"));
    assert!(text.contains("precision: 64 bit"));
    assert!(text.contains("Terminated with status = Solved"));
}
