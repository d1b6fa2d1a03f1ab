//! Environmental sensor contract and reading snapshot.
//!
//! The sensor driver (a BME280-class part on the device, a sine generator in
//! the simulator) is an external collaborator consumed through [`EnvSensor`].
//! Connection state is checked once at startup: if the sensor is absent,
//! reads are skipped for the rest of the run and the sentinel readings stay
//! on display rather than being treated as an ongoing error.

/// Combined temperature / pressure / humidity sensor.
pub trait EnvSensor {
    /// Initialize the sensor. Returns `false` when the part is absent or
    /// not responding; checked once at startup.
    fn begin(&mut self) -> bool;

    /// Temperature in degrees Celsius.
    fn read_temperature(&mut self) -> f32;

    /// Pressure in Pascal.
    fn read_pressure(&mut self) -> f32;

    /// Relative humidity in percent.
    fn read_humidity(&mut self) -> f32;
}

/// Latest readings, in display units.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Readings {
    pub temperature_c: f32,
    pub pressure_hpa: f32,
    pub humidity_pct: f32,
}

impl Default for Readings {
    /// Sentinel values shown until the first successful read.
    fn default() -> Self {
        Self {
            temperature_c: -1.0,
            pressure_hpa: -1.0,
            humidity_pct: -1.0,
        }
    }
}
