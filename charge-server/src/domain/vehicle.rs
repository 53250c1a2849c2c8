//! Vehicle profile.

use super::ConnectorType;

/// The user's vehicle, as relevant to station selection.
///
/// Supplied per request; the engine never stores or mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleProfile {
    /// Total battery capacity in kWh.
    pub battery_capacity_kwh: f64,

    /// Energy consumption in kWh per 100 km.
    pub consumption_kwh_per_100km: f64,

    /// Preferred charging connector.
    pub connector: ConnectorType,

    /// Current state of charge, 0 to 100 percent.
    pub state_of_charge_pct: f64,
}

impl VehicleProfile {
    /// Energy currently stored in the battery, in kWh.
    pub fn energy_remaining_kwh(&self) -> f64 {
        self.battery_capacity_kwh * (self.state_of_charge_pct / 100.0)
    }

    /// Energy needed to reach a full battery, in kWh.
    pub fn energy_to_full_kwh(&self) -> f64 {
        (self.battery_capacity_kwh - self.energy_remaining_kwh()).max(0.0)
    }

    /// Approximate driving range left on the current charge, in km.
    pub fn range_remaining_km(&self) -> f64 {
        if self.consumption_kwh_per_100km <= 0.0 {
            return 0.0;
        }
        self.energy_remaining_kwh() / self.consumption_kwh_per_100km * 100.0
    }

    /// Rough time to charge to full at the given power, in minutes.
    ///
    /// Assumes constant power delivery; real charging curves taper
    /// near full, so this underestimates for the last 20%.
    pub fn charge_time_to_full_min(&self, power_kw: f64) -> Option<i64> {
        if power_kw <= 0.0 || !power_kw.is_finite() {
            return None;
        }
        let hours = self.energy_to_full_kwh() / power_kw;
        Some((hours * 60.0).round().max(0.0) as i64)
    }
}
