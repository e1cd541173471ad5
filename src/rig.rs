//! Multi-camera rig utilities: projecting a shared landmark set into every
//! camera of every keyframe, and loading/counting the cameras of a
//! calibration directory.
//!
//! Cameras are constructed once and shared read-only across keyframes through
//! [`PinholeCameraPtr`] handles; the rig never clones or mutates them.

use crate::camera::{CameraModelError, PinholeCamera};
use crate::measurements::{CamMeasurements, KeyframeMeasurements};
use log::{debug, info};
use nalgebra::{Isometry3, Matrix3xX, Point3};
use std::path::Path;
use std::sync::Arc;

/// Shared read-only handle to a mounted camera.
pub type PinholeCameraPtr = Arc<PinholeCamera>;
/// The cameras of a rig, ordered by the physical camera-index convention.
pub type PinholeCameraVec = Vec<PinholeCameraPtr>;

/// Per-keyframe robot state consumed read-only by the projector.
#[derive(Debug, Clone)]
pub struct KeyframeState {
    /// World-to-body pose: maps body-frame points into the world frame.
    pub t_w_b: Isometry3<f64>,
}

/// Opaque provider of 3D landmark positions keyed by global id.
///
/// `ids()` and `positions_world()` are parallel columns: the i-th id labels
/// the i-th position column.
pub trait LandmarkMap {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ids(&self) -> &[i32];

    fn positions_world(&self) -> &Matrix3xX<f64>;
}

/// Simple in-memory [`LandmarkMap`].
#[derive(Debug, Clone)]
pub struct PointMap {
    ids: Vec<i32>,
    positions_world: Matrix3xX<f64>,
}

impl PointMap {
    /// # Panics
    ///
    /// Panics when `ids` is not sized to the position columns.
    pub fn new(ids: Vec<i32>, positions_world: Matrix3xX<f64>) -> Self {
        assert_eq!(
            ids.len(),
            positions_world.ncols(),
            "landmark ids must match the position columns"
        );
        PointMap {
            ids,
            positions_world,
        }
    }
}

impl LandmarkMap for PointMap {
    fn len(&self) -> usize {
        self.ids.len()
    }

    fn ids(&self) -> &[i32] {
        &self.ids
    }

    fn positions_world(&self) -> &Matrix3xX<f64> {
        &self.positions_world
    }
}

/// Batch projector and calibration-directory loader for a camera rig.
pub struct CameraRig;

impl CameraRig {
    /// Projects every landmark of `map` into every camera at every keyframe.
    ///
    /// For each (keyframe, camera) pair the world-to-camera transform is
    /// composed from the camera extrinsic and the inverted keyframe pose,
    /// all landmarks are moved into the camera frame and handed to
    /// [`PinholeCamera::project3d_batch_with_ids`]. The result is indexed
    /// `[keyframe][camera]`. Every landmark is tested against every camera;
    /// there is no spatial culling.
    pub fn project_batch_with_ids(
        states: &[KeyframeState],
        cams: &[PinholeCameraPtr],
        map: &dyn LandmarkMap,
    ) -> Vec<KeyframeMeasurements> {
        let ids = map.ids();
        let points_w = map.positions_world();
        let n = map.len();

        let mut states_meas = Vec::with_capacity(states.len());
        for state in states {
            let t_b_w = state.t_w_b.inverse();

            let mut kf_meas: KeyframeMeasurements = Vec::with_capacity(cams.len());
            for cam in cams {
                let t_c_w = cam.t_b_c().inverse() * t_b_w;

                let mut pcs = Matrix3xX::zeros(n);
                for (i, p_w) in points_w.column_iter().enumerate() {
                    let p_c = t_c_w * Point3::new(p_w[0], p_w[1], p_w[2]);
                    pcs.set_column(i, &p_c.coords);
                }

                let mut cam_meas = CamMeasurements::default();
                cam.project3d_batch_with_ids(&pcs, ids, &mut cam_meas);
                kf_meas.push(cam_meas);
            }
            states_meas.push(kf_meas);
        }
        states_meas
    }

    /// Counts the index-named camera sub-directories (`0`, `1`, ...) of a
    /// calibration directory.
    ///
    /// # Errors
    ///
    /// A directory without any camera sub-directory is a data error.
    pub fn num_of_cameras(dir: &Path) -> Result<usize, CameraModelError> {
        let mut n = 0;
        while dir.join(n.to_string()).is_dir() {
            n += 1;
        }
        if n == 0 {
            return Err(CameraModelError::NoCamerasFound(
                dir.display().to_string(),
            ));
        }
        Ok(n)
    }

    /// Loads every camera of a calibration directory, ordered by camera index.
    pub fn load_cameras_from_dir(dir: &Path) -> Result<PinholeCameraVec, CameraModelError> {
        let num_cams = CameraRig::num_of_cameras(dir)?;
        info!("Loading {} cameras from {}", num_cams, dir.display());

        let mut cams = Vec::with_capacity(num_cams);
        for idx in 0..num_cams {
            let cam = PinholeCamera::load_from_dir(&dir.join(idx.to_string()))?;
            debug!("Loaded camera {}: {}", idx, cam);
            cams.push(Arc::new(cam));
        }
        Ok(cams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Translation3, UnitQuaternion, Vector3};

    fn identity_keyframe() -> KeyframeState {
        KeyframeState {
            t_w_b: Isometry3::identity(),
        }
    }

    /// Two-camera rig: camera 0 looks along body +z, camera 1 along body -z.
    fn opposing_rig() -> PinholeCameraVec {
        let forward = PinholeCamera::create_test_cam();
        let backward_pose = Isometry3::from_parts(
            Translation3::identity(),
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), std::f64::consts::PI),
        );
        let backward = PinholeCamera::new(
            &[300.0, 300.0, 320.0, 240.0, 640.0, 480.0],
            backward_pose,
        )
        .unwrap();
        vec![Arc::new(forward), Arc::new(backward)]
    }

    #[test]
    fn test_result_indexed_by_keyframe_and_camera() {
        let states = vec![identity_keyframe(), identity_keyframe()];
        let cams = opposing_rig();
        let map = PointMap::new(
            vec![1],
            Matrix3xX::from_columns(&[Vector3::new(0.0, 0.0, 4.0)]),
        );

        let result = CameraRig::project_batch_with_ids(&states, &cams, &map);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].len(), 2);
        assert_eq!(result[1].len(), 2);
    }

    #[test]
    fn test_landmark_behind_every_camera_yields_no_observations() {
        let states = vec![identity_keyframe()];
        let cams = vec![Arc::new(PinholeCamera::create_test_cam())];
        let map = PointMap::new(
            vec![42],
            Matrix3xX::from_columns(&[Vector3::new(0.0, 0.0, -5.0)]),
        );

        let result = CameraRig::project_batch_with_ids(&states, &cams, &map);
        assert!(result[0].iter().all(|m| m.is_empty()));
    }

    #[test]
    fn test_landmark_visible_in_exactly_one_camera() {
        let states = vec![identity_keyframe()];
        let cams = opposing_rig();
        let map = PointMap::new(
            vec![7],
            Matrix3xX::from_columns(&[Vector3::new(0.0, 0.0, 5.0)]),
        );

        let result = CameraRig::project_batch_with_ids(&states, &cams, &map);
        let kf = &result[0];
        assert_eq!(kf[0].len(), 1);
        assert_eq!(kf[0].global_ids(), &[7]);
        assert!(kf[1].is_empty());

        // Flip the landmark behind the body: only the backward camera sees it.
        let map = PointMap::new(
            vec![7],
            Matrix3xX::from_columns(&[Vector3::new(0.0, 0.0, -5.0)]),
        );
        let result = CameraRig::project_batch_with_ids(&states, &cams, &map);
        assert!(result[0][0].is_empty());
        assert_eq!(result[0][1].len(), 1);
    }

    #[test]
    fn test_keyframe_pose_moves_landmarks_into_view() {
        // The body is displaced so the landmark sits 2m in front of camera 0.
        let states = vec![KeyframeState {
            t_w_b: Isometry3::translation(0.0, 0.0, 3.0),
        }];
        let cams = vec![Arc::new(PinholeCamera::create_test_cam())];
        let map = PointMap::new(
            vec![3],
            Matrix3xX::from_columns(&[Vector3::new(0.0, 0.0, 5.0)]),
        );

        let result = CameraRig::project_batch_with_ids(&states, &cams, &map);
        let meas = &result[0][0];
        assert_eq!(meas.len(), 1);
        // Principal-axis landmark projects to the principal point.
        assert!((meas.pixels()[(0, 0)] - 320.0).abs() < 1e-9);
        assert!((meas.pixels()[(1, 0)] - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_sample_rig() {
        let dir = Path::new("samples/rig");
        assert_eq!(CameraRig::num_of_cameras(dir).unwrap(), 2);

        let cams = CameraRig::load_cameras_from_dir(dir).unwrap();
        assert_eq!(cams.len(), 2);
        assert_eq!(cams[0].width(), 640);
        assert_eq!(cams[1].width(), 640);
    }

    #[test]
    fn test_empty_rig_dir_is_reported() {
        let dir = std::env::temp_dir().join("pinhole_rig_empty_rig");
        std::fs::create_dir_all(&dir).unwrap();
        assert!(matches!(
            CameraRig::num_of_cameras(&dir),
            Err(CameraModelError::NoCamerasFound(_))
        ));
    }

    #[test]
    fn test_save_then_load_rig_round_trip() {
        let dir = std::env::temp_dir().join("pinhole_rig_rig_round_trip");
        for (idx, cam) in opposing_rig().iter().enumerate() {
            let cam_dir = dir.join(idx.to_string());
            std::fs::create_dir_all(&cam_dir).unwrap();
            cam.save_to_dir(&cam_dir).unwrap();
        }

        let cams = CameraRig::load_cameras_from_dir(&dir).unwrap();
        assert_eq!(cams.len(), 2);
        // Extrinsics survive the round trip: the backward camera still faces -z.
        let p_b = Point3::new(0.0, 0.0, 5.0);
        let p_c1 = cams[1].t_b_c().inverse() * p_b;
        assert!(p_c1.z < 0.0);
    }
}
