//! Defines the [DcMotor] model and the presets for common motors.

use std::f64::consts::PI;

use serde::Deserialize;

use crate::Error;

#[cfg(test)]
#[path = "dc_motor_tests.rs"]
mod dc_motor_tests;

/// Describes one or more identical brushed or brushless DC motors that drive the same shaft.
///
/// The model is the linear motor model, i.e. the torque is proportional to the current and the
/// back-EMF is proportional to the speed. The winding resistance, the velocity constant and the
/// torque constant are derived from the stall and free running values of the motor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DcMotor {
    nominal_voltage: f64,
    stall_torque: f64,
    stall_current: f64,
    free_current: f64,
    free_speed: f64,

    /// The winding resistance in ohms.
    r: f64,

    /// The velocity constant in radians per second per volt.
    kv: f64,

    /// The torque constant in newton meters per ampere.
    kt: f64,
}

impl DcMotor {
    /// Returns the model of `num_motors` Andymark RS775-125 motors.
    pub fn andymark_rs_775_125(num_motors: u32) -> Result<Self, Error> {
        Self::from_rpm(12.0, 0.4, 18.0, 1.6, 5800.0, num_motors)
    }

    /// Returns the model of `num_motors` Banebots RS550 motors.
    pub fn banebots_rs_550(num_motors: u32) -> Result<Self, Error> {
        Self::from_rpm(12.0, 0.38, 84.0, 0.4, 19000.0, num_motors)
    }

    /// Returns the model of `num_motors` Banebots RS775 motors.
    pub fn banebots_rs_775(num_motors: u32) -> Result<Self, Error> {
        Self::from_rpm(12.0, 0.72, 97.0, 2.7, 13050.0, num_motors)
    }

    /// Returns the model of `num_motors` BAG motors.
    pub fn bag(num_motors: u32) -> Result<Self, Error> {
        Self::from_rpm(12.0, 0.43, 53.0, 1.8, 13180.0, num_motors)
    }

    /// Returns the model of `num_motors` CIM motors.
    pub fn cim(num_motors: u32) -> Result<Self, Error> {
        Self::from_rpm(12.0, 2.42, 133.0, 2.7, 5310.0, num_motors)
    }

    /// Returns the current in amperes drawn at the given speed and applied voltage.
    ///
    /// ## Parameters
    ///
    /// * `speed` - The angular velocity of the motor shaft in radians per second.
    /// * `voltage` - The voltage applied to the motor in volts.
    pub fn current(&self, speed: f64, voltage: f64) -> f64 {
        -speed / (self.kv * self.r) + voltage / self.r
    }

    /// Returns the model of `num_motors` Falcon 500 motors.
    pub fn falcon_500(num_motors: u32) -> Result<Self, Error> {
        Self::from_rpm(12.0, 4.69, 257.0, 1.5, 6380.0, num_motors)
    }

    /// Returns the free running current in amperes.
    pub fn free_current(&self) -> f64 {
        self.free_current
    }

    /// Returns the free running speed in radians per second.
    pub fn free_speed(&self) -> f64 {
        self.free_speed
    }

    fn from_rpm(
        nominal_voltage: f64,
        stall_torque: f64,
        stall_current: f64,
        free_current: f64,
        free_speed_rpm: f64,
        num_motors: u32,
    ) -> Result<Self, Error> {
        Self::new(
            nominal_voltage,
            stall_torque,
            stall_current,
            free_current,
            free_speed_rpm * 2.0 * PI / 60.0,
            num_motors,
        )
    }

    /// Returns the model of `num_motors` Kraken X60 motors.
    pub fn kraken_x60(num_motors: u32) -> Result<Self, Error> {
        Self::from_rpm(12.0, 7.09, 366.0, 2.0, 6000.0, num_motors)
    }

    /// Returns the torque constant in newton meters per ampere.
    pub fn kt(&self) -> f64 {
        self.kt
    }

    /// Returns the velocity constant in radians per second per volt.
    pub fn kv(&self) -> f64 {
        self.kv
    }

    /// Returns the model of `num_motors` MiniCIM motors.
    pub fn mini_cim(num_motors: u32) -> Result<Self, Error> {
        Self::from_rpm(12.0, 1.41, 89.0, 3.0, 5840.0, num_motors)
    }

    /// Returns the model of `num_motors` NEO motors.
    pub fn neo(num_motors: u32) -> Result<Self, Error> {
        Self::from_rpm(12.0, 2.6, 105.0, 1.8, 5676.0, num_motors)
    }

    /// Returns the model of `num_motors` NEO 550 motors.
    pub fn neo_550(num_motors: u32) -> Result<Self, Error> {
        Self::from_rpm(12.0, 0.97, 100.0, 1.4, 11000.0, num_motors)
    }

    /// Creates a new motor model.
    ///
    /// ## Parameters
    ///
    /// * `nominal_voltage` - The voltage at which the motor values were measured, in volts.
    /// * `stall_torque` - The torque of a single stalled motor in newton meters.
    /// * `stall_current` - The current drawn by a single stalled motor in amperes.
    /// * `free_current` - The current drawn by a single unloaded motor in amperes.
    /// * `free_speed` - The speed of an unloaded motor in radians per second.
    /// * `num_motors` - The number of motors that drive the shaft.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if one of the values is not positive and finite, if
    /// the free current is not smaller than the stall current or if the number of motors is
    /// zero.
    pub fn new(
        nominal_voltage: f64,
        stall_torque: f64,
        stall_current: f64,
        free_current: f64,
        free_speed: f64,
        num_motors: u32,
    ) -> Result<Self, Error> {
        check_positive("nominal_voltage", nominal_voltage)?;
        check_positive("stall_torque", stall_torque)?;
        check_positive("stall_current", stall_current)?;
        check_positive("free_speed", free_speed)?;
        if !(free_current >= 0.0 && free_current < stall_current) {
            return Err(Error::InvalidParameter {
                name: "free_current",
                value: free_current,
            });
        }

        if num_motors == 0 {
            return Err(Error::InvalidParameter {
                name: "num_motors",
                value: 0.0,
            });
        }

        let count = f64::from(num_motors);
        let stall_torque = stall_torque * count;
        let stall_current = stall_current * count;
        let free_current = free_current * count;

        let r = nominal_voltage / stall_current;
        let kv = free_speed / (nominal_voltage - r * free_current);
        let kt = stall_torque / stall_current;

        Ok(Self {
            nominal_voltage,
            stall_torque,
            stall_current,
            free_current,
            free_speed,
            r,
            kv,
            kt,
        })
    }

    /// Returns the voltage at which the motor values were measured.
    pub fn nominal_voltage(&self) -> f64 {
        self.nominal_voltage
    }

    /// Returns the winding resistance in ohms.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Returns the model of `num_motors` RS775-125 motors.
    pub fn rs_775_125(num_motors: u32) -> Result<Self, Error> {
        Self::from_rpm(12.0, 0.28, 18.0, 1.6, 5800.0, num_motors)
    }

    /// Returns the speed in radians per second at which the motor delivers `torque` with the
    /// given applied voltage.
    pub fn speed(&self, torque: f64, voltage: f64) -> f64 {
        voltage * self.kv - torque * self.r * self.kv / self.kt
    }

    /// Returns the current drawn by the stalled motors in amperes.
    pub fn stall_current(&self) -> f64 {
        self.stall_current
    }

    /// Returns the torque of the stalled motors in newton meters.
    pub fn stall_torque(&self) -> f64 {
        self.stall_torque
    }

    /// Returns the torque in newton meters produced by the given current.
    pub fn torque(&self, current: f64) -> f64 {
        current * self.kt
    }

    /// Returns the model of `num_motors` VEX 775pro motors.
    pub fn vex_775_pro(num_motors: u32) -> Result<Self, Error> {
        Self::from_rpm(12.0, 0.71, 134.0, 0.7, 18730.0, num_motors)
    }

    /// Returns the voltage needed to deliver `torque` at the given speed.
    pub fn voltage(&self, torque: f64, speed: f64) -> f64 {
        speed / self.kv + self.r * torque / self.kt
    }

    /// Returns the model of the motor behind a gearbox with the given reduction.
    ///
    /// A reduction larger than one multiplies the torque and divides the speed.
    ///
    /// ## Errors
    ///
    /// Returns [Error::InvalidParameter] if the reduction is not positive and finite.
    pub fn with_reduction(&self, gearing: f64) -> Result<Self, Error> {
        check_positive("gearing", gearing)?;

        // The stored values already include the motor count.
        Self::new(
            self.nominal_voltage,
            self.stall_torque * gearing,
            self.stall_current,
            self.free_current,
            self.free_speed / gearing,
            1,
        )
    }
}

/// Names the motor presets so that motors can be selected from a configuration file.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DcMotorPreset {
    /// The CIM motor.
    Cim,
    /// The MiniCIM motor.
    MiniCim,
    /// The BAG motor.
    Bag,
    /// The VEX 775pro motor.
    Vex775Pro,
    /// The RS775-125 motor.
    Rs775_125,
    /// The Banebots RS775 motor.
    BanebotsRs775,
    /// The Andymark RS775-125 motor.
    AndymarkRs775_125,
    /// The Banebots RS550 motor.
    BanebotsRs550,
    /// The NEO motor.
    Neo,
    /// The NEO 550 motor.
    Neo550,
    /// The Falcon 500 motor.
    Falcon500,
    /// The Kraken X60 motor.
    KrakenX60,
}

impl DcMotorPreset {
    /// Returns the model of `num_motors` motors of this type.
    pub fn motor(&self, num_motors: u32) -> Result<DcMotor, Error> {
        match self {
            DcMotorPreset::Cim => DcMotor::cim(num_motors),
            DcMotorPreset::MiniCim => DcMotor::mini_cim(num_motors),
            DcMotorPreset::Bag => DcMotor::bag(num_motors),
            DcMotorPreset::Vex775Pro => DcMotor::vex_775_pro(num_motors),
            DcMotorPreset::Rs775_125 => DcMotor::rs_775_125(num_motors),
            DcMotorPreset::BanebotsRs775 => DcMotor::banebots_rs_775(num_motors),
            DcMotorPreset::AndymarkRs775_125 => DcMotor::andymark_rs_775_125(num_motors),
            DcMotorPreset::BanebotsRs550 => DcMotor::banebots_rs_550(num_motors),
            DcMotorPreset::Neo => DcMotor::neo(num_motors),
            DcMotorPreset::Neo550 => DcMotor::neo_550(num_motors),
            DcMotorPreset::Falcon500 => DcMotor::falcon_500(num_motors),
            DcMotorPreset::KrakenX60 => DcMotor::kraken_x60(num_motors),
        }
    }
}

/// The configuration of a gearbox, as read from a parameter file.
///
/// ```toml
/// preset = "vex775_pro"
/// count = 4
/// ```
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct MotorParams {
    /// The type of the motors.
    pub preset: DcMotorPreset,

    /// The number of motors in the gearbox.
    #[serde(default = "default_motor_count")]
    pub count: u32,
}

impl MotorParams {
    /// Returns the motor model described by the parameters.
    pub fn to_motor(&self) -> Result<DcMotor, Error> {
        self.preset.motor(self.count)
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter { name, value })
    }
}

fn default_motor_count() -> u32 {
    1
}
