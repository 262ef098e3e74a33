#[cfg(test)]
#[path = "battery_sim_tests.rs"]
mod battery_sim_tests;

/// The voltage of a fully charged, unloaded battery.
pub const DEFAULT_NOMINAL_VOLTAGE: f64 = 12.0;

/// The internal resistance of a typical robot battery, in ohms.
pub const DEFAULT_RESISTANCE: f64 = 0.02;

/// Returns the terminal voltage of a battery that supplies the given currents.
///
/// The voltage drops linearly with the total current and never goes below zero.
///
/// ## Parameters
///
/// * `nominal_voltage` - The voltage of the unloaded battery in volts.
/// * `resistance` - The internal resistance of the battery in ohms.
/// * `currents` - The currents drawn by the loads, in amperes.
pub fn calculate(nominal_voltage: f64, resistance: f64, currents: &[f64]) -> f64 {
    let total: f64 = currents.iter().sum();
    (nominal_voltage - total * resistance).max(0.0)
}

/// Returns the terminal voltage of a default battery that supplies the given currents.
///
/// ## Example
///
/// ```
/// use robot_motion::simulation::battery_sim;
///
/// let voltage = battery_sim::calculate_default(&[60.0, 40.0]);
/// assert_eq!(voltage, 10.0);
/// ```
pub fn calculate_default(currents: &[f64]) -> f64 {
    calculate(DEFAULT_NOMINAL_VOLTAGE, DEFAULT_RESISTANCE, currents)
}
