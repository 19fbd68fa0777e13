use playcheck::MAX_RUNS;

/// Parse and validate a trial count.
///
/// Accepts an integer from 1 to [`MAX_RUNS`]. Out-of-range values are rejected
/// here rather than at run time so the usage error points at the flag.
///
/// # Errors
///
/// Returns an error message if the value is not a positive integer or is
/// above the cap.
pub fn parse_runs(s: &str) -> Result<u32, String> {
    let runs: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("Number of runs must be a positive integer: '{}'", s))?;

    if runs == 0 {
        return Err("Number of runs must be at least 1".to_string());
    }

    if runs > MAX_RUNS {
        return Err(format!("Number of runs must be at most {}", MAX_RUNS));
    }

    Ok(runs)
}
