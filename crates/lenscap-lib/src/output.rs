use std::fmt::Write;

use serde::Serialize;

use crate::capacity::{CapacityInputs, CapacityResult};
use crate::surface::CapacitySurface;

/// Axis title for the hours-per-day dimension.
pub const HOURS_AXIS_TITLE: &str = "Horas por día";
/// Axis title for the OEE dimension.
pub const OEE_AXIS_TITLE: &str = "OEE";
/// Axis title for the lenses-per-day dimension.
pub const LENSES_AXIS_TITLE: &str = "Lentes por día";

/// Mix totals further than this from 100% are flagged in renderings.
const MIX_TOTAL_TOLERANCE: f64 = 0.01;

/// Chart title for a surface evaluated with `machine_count` machines.
pub fn surface_title(machine_count: u32) -> String {
    format!("Capacidad de Lentes/día (con {machine_count} máquinas)")
}

/// Presentation style for turning a [`CapacitySummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityRenderMode {
    PlainText,
    RichText,
}

/// Inputs and results of one evaluation, ready to serialise or render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CapacitySummary {
    pub inputs: CapacityInputs,
    pub result: CapacityResult,
    /// Sum of the participation shares, in percent.
    pub mix_total: f64,
}

impl CapacitySummary {
    pub fn new(inputs: CapacityInputs, result: CapacityResult) -> Self {
        Self {
            mix_total: inputs.mix.total(),
            inputs,
            result,
        }
    }

    /// Whether the participation shares do not add up to 100%.
    pub fn mix_is_partial(&self) -> bool {
        (self.mix_total - 100.0).abs() > MIX_TOTAL_TOLERANCE
    }

    /// Render the summary using the requested textual mode.
    ///
    /// Cycle time is shown with 2 decimals, chambers with 1, lenses and jobs
    /// rounded to whole units.
    pub fn render(&self, mode: CapacityRenderMode) -> String {
        match mode {
            CapacityRenderMode::PlainText => self.render_plain(),
            CapacityRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Modelo de capacidad AR: {} máquinas, {} h/día, OEE {:.2}",
            self.inputs.machine_count, self.inputs.hours_per_day, self.inputs.oee
        );
        for (name, share) in self.inputs.mix.entries() {
            let _ = writeln!(buffer, "  {name:<18} {share:>6.2}%");
        }
        let _ = writeln!(
            buffer,
            "Tiempo promedio por cámara: {:.2} h",
            self.result.avg_cycle_time_hours
        );
        let _ = writeln!(
            buffer,
            "Cámaras totales/día: {:.1}",
            self.result.total_chambers_per_day
        );
        let _ = writeln!(buffer, "Lentes/día: {:.0}", self.result.lenses_per_day);
        let _ = writeln!(buffer, "Jobs/día: {:.0}", self.result.jobs_per_day);
        if self.mix_is_partial() {
            let _ = writeln!(
                buffer,
                "Aviso: la participación suma {:.2}% (sin normalizar)",
                self.mix_total
            );
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**📌 Modelo de capacidad AR:** _{} máquinas, {} h/día, OEE {:.2}_",
            self.inputs.machine_count, self.inputs.hours_per_day, self.inputs.oee
        );
        let _ = writeln!(
            buffer,
            "* **📊 Tiempo promedio por cámara:** {:.2} h",
            self.result.avg_cycle_time_hours
        );
        let _ = writeln!(
            buffer,
            "* **🏭 Cámaras totales/día:** {:.1}",
            self.result.total_chambers_per_day
        );
        let _ = writeln!(
            buffer,
            "* **👓 Lentes/día:** {:.0}",
            self.result.lenses_per_day
        );
        let _ = writeln!(buffer, "* **📦 Jobs/día:** {:.0}", self.result.jobs_per_day);
        if self.mix_is_partial() {
            let _ = writeln!(
                buffer,
                "> la participación suma {:.2}% (sin normalizar)",
                self.mix_total
            );
        }
        buffer
    }
}

/// A surface together with its chart and axis titles.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SurfaceSummary {
    pub title: String,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub z_title: &'static str,
    #[serde(flatten)]
    pub surface: CapacitySurface,
}

impl SurfaceSummary {
    pub fn new(surface: CapacitySurface) -> Self {
        Self {
            title: surface_title(surface.machine_count),
            x_title: HOURS_AXIS_TITLE,
            y_title: OEE_AXIS_TITLE,
            z_title: LENSES_AXIS_TITLE,
            surface,
        }
    }
}
