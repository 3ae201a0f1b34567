use hm_label::Surface;

/// Per-unit result record handed to the reporting sink.
///
/// Lengths and areas are in pixel units until a [`Calibration`] is applied.
/// `mean_thickness` is `None` when the unit produced no thickness samples;
/// it is never a fabricated zero.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitRecord {
    pub unit: String,
    pub surface: Surface,
    pub perimeter_length: f32,
    pub enclosed_area: f32,
    pub double_length: f32,
    pub single_length: f32,
    pub mean_thickness: Option<f32>,
}

/// Append-only accumulation of per-unit records.
///
/// Analysis units are independent; when units run in parallel this is the
/// single point that serializes their results.
#[derive(Debug, Clone, Default)]
pub struct Report {
    records: Vec<UnitRecord>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: UnitRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[UnitRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Pixel-to-physical scale, applied to finished records.
///
/// Lengths scale linearly, areas quadratically. The engine itself measures
/// in pixel space throughout; calibration is strictly a post-processing step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Physical length of one pixel edge.
    pub units_per_px: f32,
}

impl Calibration {
    pub fn apply(&self, record: &UnitRecord) -> UnitRecord {
        let s = self.units_per_px;
        UnitRecord {
            unit: record.unit.clone(),
            surface: record.surface,
            perimeter_length: record.perimeter_length * s,
            enclosed_area: record.enclosed_area * s * s,
            double_length: record.double_length * s,
            single_length: record.single_length * s,
            mean_thickness: record.mean_thickness.map(|t| t * s),
        }
    }
}
