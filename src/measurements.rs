//! Measurement containers populated by the projection routines.

use nalgebra::Matrix2xX;

/// Sentinel for measurements without an associated feature track.
pub const UNSET_TRACK_ID: i32 = -1;

/// Visible pixel observations of one camera, with parallel landmark and track
/// id columns. Filled via [`CamMeasurements::set_measurements`]; this crate
/// never assigns track ids and leaves them at [`UNSET_TRACK_ID`].
#[derive(Debug, Clone)]
pub struct CamMeasurements {
    pixels: Matrix2xX<f64>,
    global_ids: Vec<i32>,
    track_ids: Vec<i32>,
}

impl Default for CamMeasurements {
    fn default() -> Self {
        CamMeasurements {
            pixels: Matrix2xX::zeros(0),
            global_ids: Vec::new(),
            track_ids: Vec::new(),
        }
    }
}

impl CamMeasurements {
    /// Replaces the stored measurements.
    ///
    /// # Panics
    ///
    /// The three columns must agree in length; a mismatch is a contract
    /// violation and panics.
    pub fn set_measurements(
        &mut self,
        pixels: Matrix2xX<f64>,
        global_ids: Vec<i32>,
        track_ids: Vec<i32>,
    ) {
        assert_eq!(
            pixels.ncols(),
            global_ids.len(),
            "landmark ids must match the pixel columns"
        );
        assert_eq!(
            pixels.ncols(),
            track_ids.len(),
            "track ids must match the pixel columns"
        );
        self.pixels = pixels;
        self.global_ids = global_ids;
        self.track_ids = track_ids;
    }

    pub fn pixels(&self) -> &Matrix2xX<f64> {
        &self.pixels
    }

    pub fn global_ids(&self) -> &[i32] {
        &self.global_ids
    }

    pub fn track_ids(&self) -> &[i32] {
        &self.track_ids
    }

    pub fn len(&self) -> usize {
        self.global_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.global_ids.is_empty()
    }
}

/// Measurements of every camera of the rig at one keyframe, indexed by camera.
pub type KeyframeMeasurements = Vec<CamMeasurements>;

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn test_set_measurements_stores_columns() {
        let mut meas = CamMeasurements::default();
        assert!(meas.is_empty());

        let pixels = Matrix2xX::from_columns(&[
            Vector2::new(10.0, 20.0),
            Vector2::new(30.0, 40.0),
        ]);
        meas.set_measurements(pixels, vec![3, 7], vec![UNSET_TRACK_ID; 2]);

        assert_eq!(meas.len(), 2);
        assert_eq!(meas.global_ids(), &[3, 7]);
        assert_eq!(meas.pixels()[(1, 1)], 40.0);
    }

    #[test]
    #[should_panic(expected = "landmark ids must match the pixel columns")]
    fn test_mismatched_ids_panic() {
        let mut meas = CamMeasurements::default();
        let pixels = Matrix2xX::from_columns(&[Vector2::new(1.0, 2.0)]);
        meas.set_measurements(pixels, vec![1, 2], vec![UNSET_TRACK_ID]);
    }
}
