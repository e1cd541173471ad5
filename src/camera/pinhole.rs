//! Implements the pinhole camera model used throughout this crate.
//!
//! This module provides the [`PinholeCamera`] struct: an ideal (distortion-free)
//! projective camera with intrinsics, a rigid body-to-camera extrinsic pose,
//! tunable visibility thresholds and an optional per-pixel bearing cache.
//! Scalar and batched projection/backprojection are built on the same
//! K / K⁻¹ matrices, so batch results match the scalar primitives column by
//! column.

use crate::camera::{validation, CameraModelError, Intrinsics, Resolution};
use crate::measurements::{CamMeasurements, UNSET_TRACK_ID};
use nalgebra::{
    Isometry3, Matrix2xX, Matrix3, Matrix3xX, Quaternion, Translation3, UnitQuaternion, Vector2,
    Vector3,
};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use yaml_rust::{Yaml, YamlLoader};

/// Header key of the geometry YAML file.
pub const GEO_HEADER: &str = "cam0";
/// Header key of the extrinsic pose YAML file.
pub const TBC_HEADER: &str = "T_B_C";
/// Fixed file name of the geometry file inside a camera directory.
pub const GEO_FILE: &str = "geometry.yaml";
/// Fixed file name of the body-to-camera pose file inside a camera directory.
pub const TBC_FILE: &str = "T_B_C.yaml";

/// Default epsilon on the camera-frame z coordinate for depth validity.
pub const DEFAULT_Z_EPS: f64 = 0.05;

/// Represents an ideal pinhole camera rigidly mounted on a body frame.
///
/// Intrinsics, resolution and the extrinsic pose are fixed at construction.
/// The visibility thresholds (image margin, depth range, distance range) are
/// runtime tunable, and the bearing cache is populated once on demand.
///
/// # Examples
///
/// ```rust
/// use nalgebra::Vector3;
/// use pinhole_rig::camera::PinholeCamera;
///
/// let cam = PinholeCamera::create_test_cam();
/// let pixel = cam.project3d(&Vector3::new(0.0, 0.0, 2.0)).unwrap();
/// assert!((pixel.x - 320.0).abs() < 1e-12);
/// assert!((pixel.y - 240.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct PinholeCamera {
    intrinsics: Intrinsics,
    resolution: Resolution,
    k: Matrix3<f64>,
    k_inv: Matrix3<f64>,
    t_b_c: Isometry3<f64>,
    w_margin: f64,
    h_margin: f64,
    min_depth: f64,
    max_depth: f64,
    min_dist: f64,
    max_dist: f64,
    bearings_at_pixels: Option<Matrix3xX<f64>>,
}

impl PinholeCamera {
    /// Creates a new [`PinholeCamera`] from a geometry parameter vector and a
    /// body-to-camera pose.
    ///
    /// # Arguments
    ///
    /// * `geo_params` - `[fx, fy, cx, cy, width, height]`.
    /// * `t_b_c` - rigid transform mapping camera-frame points into the body
    ///   frame.
    ///
    /// # Errors
    ///
    /// Returns a [`CameraModelError`] when the parameter vector does not hold
    /// exactly six entries, the intrinsics or resolution are invalid, or K is
    /// not invertible.
    pub fn new(geo_params: &[f64], t_b_c: Isometry3<f64>) -> Result<Self, CameraModelError> {
        if geo_params.len() != 6 {
            return Err(CameraModelError::InvalidParams(format!(
                "expected 6 geometry parameters [fx, fy, cx, cy, w, h], got {}",
                geo_params.len()
            )));
        }

        let intrinsics = Intrinsics {
            fx: geo_params[0],
            fy: geo_params[1],
            cx: geo_params[2],
            cy: geo_params[3],
        };
        validation::validate_intrinsics(&intrinsics)?;

        if !geo_params[4].is_finite() || !geo_params[5].is_finite() {
            return Err(CameraModelError::InvalidParams(
                "Resolution must be finite".to_string(),
            ));
        }
        let resolution = Resolution {
            width: geo_params[4] as u32,
            height: geo_params[5] as u32,
        };
        validation::validate_resolution(&resolution)?;

        let k = intrinsics.matrix();
        let k_inv = k
            .try_inverse()
            .ok_or(CameraModelError::SingularIntrinsicMatrix)?;

        Ok(PinholeCamera {
            intrinsics,
            resolution,
            k,
            k_inv,
            t_b_c,
            w_margin: 0.0,
            h_margin: 0.0,
            min_depth: -1.0,
            max_depth: f64::INFINITY,
            min_dist: -1.0,
            max_dist: f64::INFINITY,
            bearings_at_pixels: None,
        })
    }

    /// Creates a synthetic 640x480 camera (f = 300, centered principal point,
    /// identity extrinsic). Intended for tests and examples.
    pub fn create_test_cam() -> Self {
        PinholeCamera::new(
            &[300.0, 300.0, 320.0, 240.0, 640.0, 480.0],
            Isometry3::identity(),
        )
        .expect("test camera parameters are valid")
    }

    // accessors
    pub fn fx(&self) -> f64 {
        self.intrinsics.fx
    }

    pub fn fy(&self) -> f64 {
        self.intrinsics.fy
    }

    pub fn cx(&self) -> f64 {
        self.intrinsics.cx
    }

    pub fn cy(&self) -> f64 {
        self.intrinsics.cy
    }

    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    pub fn height(&self) -> u32 {
        self.resolution.height
    }

    pub fn intrinsics(&self) -> Intrinsics {
        self.intrinsics.clone()
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution.clone()
    }

    pub fn k(&self) -> &Matrix3<f64> {
        &self.k
    }

    pub fn k_inv(&self) -> &Matrix3<f64> {
        &self.k_inv
    }

    /// Body-to-camera extrinsic: maps camera-frame points into the body frame.
    pub fn t_b_c(&self) -> &Isometry3<f64> {
        &self.t_b_c
    }

    pub fn min_dist(&self) -> f64 {
        self.min_dist
    }

    pub fn max_dist(&self) -> f64 {
        self.max_dist
    }

    /// Projects a 3D camera-frame point to pixel coordinates.
    ///
    /// Applies `K * p` followed by perspective division. Returns `None` when
    /// the division is degenerate, i.e. the point lies behind or on the camera
    /// plane (z ≤ 0 or numerically zero). No visibility predicate is applied
    /// here; use [`PinholeCamera::is_inside_image`] and
    /// [`PinholeCamera::is_depth_valid`] for that.
    pub fn project3d(&self, p_c: &Vector3<f64>) -> Option<Vector2<f64>> {
        if p_c.z <= f64::EPSILON {
            return None;
        }
        let homo = self.k * p_c;
        Some(Vector2::new(homo.x / homo.z, homo.y / homo.z))
    }

    /// Projects N camera-frame points at once.
    ///
    /// One matrix multiply by K computes the homogeneous image coordinates of
    /// every column, followed by a row-wise perspective division. Each column
    /// additionally gets a visibility flag = depth-valid AND inside-image.
    ///
    /// # Panics
    ///
    /// The output containers must already be sized to the input batch; a size
    /// mismatch is a contract violation and panics.
    pub fn project3d_batch(
        &self,
        pcs: &Matrix3xX<f64>,
        us: &mut Matrix2xX<f64>,
        is_visible: &mut [bool],
    ) {
        assert_eq!(
            pcs.ncols(),
            us.ncols(),
            "pixel output must be sized to the input batch"
        );
        assert_eq!(
            pcs.ncols(),
            is_visible.len(),
            "visibility output must be sized to the input batch"
        );

        let us_homo = self.k * pcs;
        us.row_mut(0)
            .copy_from(&us_homo.row(0).component_div(&us_homo.row(2)));
        us.row_mut(1)
            .copy_from(&us_homo.row(1).component_div(&us_homo.row(2)));

        for i in 0..pcs.ncols() {
            is_visible[i] = self.is_depth_valid(&pcs.column(i).into_owned())
                && self.is_inside_image(&us.column(i).into_owned());
        }
    }

    /// Projects N camera-frame points and compacts the visible ones into a
    /// measurement set.
    ///
    /// Output slots keep the original column order restricted to visible
    /// entries. Track ids are not assigned by this crate and are filled with
    /// [`UNSET_TRACK_ID`].
    ///
    /// # Panics
    ///
    /// Panics when `ids` is not sized to the input batch.
    pub fn project3d_batch_with_ids(
        &self,
        pcs: &Matrix3xX<f64>,
        ids: &[i32],
        cam_meas: &mut CamMeasurements,
    ) {
        assert_eq!(
            pcs.ncols(),
            ids.len(),
            "landmark ids must be sized to the input batch"
        );
        let n = pcs.ncols();

        let mut us = Matrix2xX::zeros(n);
        let mut is_visible = vec![false; n];
        self.project3d_batch(pcs, &mut us, &mut is_visible);

        let n_visible = is_visible.iter().filter(|v| **v).count();
        let mut vis_us = Matrix2xX::zeros(n_visible);
        let mut vis_global_ids = Vec::with_capacity(n_visible);
        let vis_track_ids = vec![UNSET_TRACK_ID; n_visible];

        let mut vis_cnt = 0;
        for i in 0..n {
            if is_visible[i] {
                vis_us.set_column(vis_cnt, &us.column(i));
                vis_global_ids.push(ids[i]);
                vis_cnt += 1;
            }
        }
        cam_meas.set_measurements(vis_us, vis_global_ids, vis_track_ids);
    }

    /// Backprojects a pixel to an unnormalized ray direction via `K⁻¹ * (u, v, 1)`.
    ///
    /// The result is intentionally not normalized; callers that need a unit
    /// bearing normalize it themselves.
    pub fn backproject3d(&self, u: &Vector2<f64>) -> Vector3<f64> {
        self.k_inv * Vector3::new(u.x, u.y, 1.0)
    }

    /// Backprojects N pixels at once. No pixel-range check is applied.
    ///
    /// # Panics
    ///
    /// Panics when the output is not sized to the input batch.
    pub fn backproject3d_batch(&self, us: &Matrix2xX<f64>, fs: &mut Matrix3xX<f64>) {
        assert_eq!(
            us.ncols(),
            fs.ncols(),
            "ray output must be sized to the input batch"
        );
        let n = us.ncols();

        let mut us_homo = Matrix3xX::zeros(n);
        us_homo.view_mut((0, 0), (2, n)).copy_from(us);
        us_homo.row_mut(2).fill(1.0);

        *fs = self.k_inv * us_homo;
    }

    // visibility predicates

    /// Returns `true` when the pixel lies strictly inside the margined image
    /// rectangle.
    pub fn is_inside_image(&self, u: &Vector2<f64>) -> bool {
        let w = self.resolution.width as f64;
        let h = self.resolution.height as f64;
        (u.x > self.w_margin && u.x < w - self.w_margin)
            && (u.y > self.h_margin && u.y < h - self.h_margin)
    }

    /// Depth validity with the default z epsilon of [`DEFAULT_Z_EPS`].
    pub fn is_depth_valid(&self, p_c: &Vector3<f64>) -> bool {
        self.is_depth_valid_with_eps(p_c, DEFAULT_Z_EPS)
    }

    /// Depth validity with a caller-chosen z epsilon: z must exceed `z_eps`
    /// and lie strictly inside the configured depth range.
    pub fn is_depth_valid_with_eps(&self, p_c: &Vector3<f64>, z_eps: f64) -> bool {
        let z = p_c.z;
        z > z_eps && z < self.max_depth && z > self.min_depth
    }

    /// Returns `true` when the Euclidean distance from the camera origin lies
    /// strictly inside the configured distance range.
    pub fn is_distance_valid(&self, p_c: &Vector3<f64>) -> bool {
        let dist = p_c.norm();
        dist < self.max_dist && dist > self.min_dist
    }

    // threshold setters

    /// # Panics
    ///
    /// Panics unless `min_depth < max_depth`.
    pub fn set_depth_range(&mut self, min_depth: f64, max_depth: f64) {
        assert!(min_depth < max_depth, "depth range must satisfy min < max");
        self.min_depth = min_depth;
        self.max_depth = max_depth;
    }

    /// # Panics
    ///
    /// Panics unless `min_dist < max_dist`.
    pub fn set_dist_range(&mut self, min_dist: f64, max_dist: f64) {
        assert!(min_dist < max_dist, "distance range must satisfy min < max");
        self.min_dist = min_dist;
        self.max_dist = max_dist;
    }

    /// Sets the image margins as a fraction of width/height.
    ///
    /// # Panics
    ///
    /// Panics when `ratio` is negative.
    pub fn set_margin(&mut self, ratio: f64) {
        assert!(ratio >= 0.0, "margin ratio must be non-negative");
        self.w_margin = self.resolution.width as f64 * ratio;
        self.h_margin = self.resolution.height as f64 * ratio;
    }

    // bearing cache

    /// Flattened row-major index of pixel `(x, y)`.
    pub fn pixel_to_flat_index(&self, x: usize, y: usize) -> usize {
        y * self.resolution.width as usize + x
    }

    /// Backprojects every pixel of the image grid once and stores the ray
    /// directions in flattened row-major order. A no-op when the cache is
    /// already populated.
    pub fn compute_bearing_vectors(&mut self) {
        if self.bearings_at_pixels.is_some() {
            return;
        }
        let w = self.resolution.width as usize;
        let h = self.resolution.height as usize;
        let n = w * h;

        let mut us = Matrix2xX::zeros(n);
        for y in 0..h {
            for x in 0..w {
                let idx = y * w + x;
                us[(0, idx)] = x as f64;
                us[(1, idx)] = y as f64;
            }
        }

        let mut fs = Matrix3xX::zeros(n);
        self.backproject3d_batch(&us, &mut fs);
        self.bearings_at_pixels = Some(fs);
    }

    pub fn bearing_vectors_computed(&self) -> bool {
        self.bearings_at_pixels.is_some()
    }

    /// Returns the cached ray direction of pixel `(x, y)` by positional lookup.
    ///
    /// # Panics
    ///
    /// Panics when [`PinholeCamera::compute_bearing_vectors`] has not been
    /// called.
    pub fn bearing_at_pixel(&self, x: usize, y: usize) -> Vector3<f64> {
        let bearings = self
            .bearings_at_pixels
            .as_ref()
            .expect("bearing vectors have not been computed");
        bearings.column(self.pixel_to_flat_index(x, y)).into_owned()
    }

    /// Number of cached bearings (width * height).
    ///
    /// # Panics
    ///
    /// Panics when the cache has not been populated.
    pub fn num_bearings(&self) -> usize {
        self.bearings_at_pixels
            .as_ref()
            .expect("bearing vectors have not been computed")
            .ncols()
    }

    // calibration I/O

    /// Loads a camera from a geometry file and a body-to-camera pose file.
    ///
    /// # Errors
    ///
    /// Missing files, a missing header key or malformed fields are reported as
    /// [`CameraModelError`]; loading never panics on bad data.
    pub fn load_from_files(
        abs_cam_geo: &Path,
        abs_tbc: &Path,
    ) -> Result<Self, CameraModelError> {
        let contents = fs::read_to_string(abs_cam_geo)?;
        let docs = YamlLoader::load_from_str(&contents)?;
        let doc = docs.first().ok_or_else(|| {
            CameraModelError::YamlError(format!(
                "geometry file {} holds no YAML document",
                abs_cam_geo.display()
            ))
        })?;
        let cam = &doc[GEO_HEADER];
        if cam.is_badvalue() {
            return Err(CameraModelError::YamlError(format!(
                "geometry file {} misses the '{}' header key",
                abs_cam_geo.display(),
                GEO_HEADER
            )));
        }

        let intrinsics_yaml = cam["intrinsics"].as_vec().ok_or_else(|| {
            CameraModelError::InvalidParams("YAML missing 'intrinsics' or not an array".to_string())
        })?;
        if intrinsics_yaml.len() != 4 {
            return Err(CameraModelError::InvalidParams(
                "'intrinsics' must hold [fx, fy, cx, cy]".to_string(),
            ));
        }
        let resolution_yaml = cam["resolution"].as_vec().ok_or_else(|| {
            CameraModelError::InvalidParams("YAML missing 'resolution' or not an array".to_string())
        })?;
        if resolution_yaml.len() != 2 {
            return Err(CameraModelError::InvalidParams(
                "'resolution' must hold [width, height]".to_string(),
            ));
        }

        let geo_params = [
            yaml_f64(&intrinsics_yaml[0])
                .ok_or_else(|| CameraModelError::InvalidParams("Invalid fx".to_string()))?,
            yaml_f64(&intrinsics_yaml[1])
                .ok_or_else(|| CameraModelError::InvalidParams("Invalid fy".to_string()))?,
            yaml_f64(&intrinsics_yaml[2])
                .ok_or_else(|| CameraModelError::InvalidParams("Invalid cx".to_string()))?,
            yaml_f64(&intrinsics_yaml[3])
                .ok_or_else(|| CameraModelError::InvalidParams("Invalid cy".to_string()))?,
            yaml_f64(&resolution_yaml[0])
                .ok_or_else(|| CameraModelError::InvalidParams("Invalid width".to_string()))?,
            yaml_f64(&resolution_yaml[1])
                .ok_or_else(|| CameraModelError::InvalidParams("Invalid height".to_string()))?,
        ];

        let t_b_c = load_pose_yaml(abs_tbc)?;
        let mut model = PinholeCamera::new(&geo_params, t_b_c)?;

        // Margins are optional in persisted geometry files.
        if let Some(margins_yaml) = cam["margins"].as_vec() {
            if margins_yaml.len() != 2 {
                return Err(CameraModelError::InvalidParams(
                    "'margins' must hold [w_margin, h_margin]".to_string(),
                ));
            }
            let w_margin = yaml_f64(&margins_yaml[0])
                .ok_or_else(|| CameraModelError::InvalidParams("Invalid w_margin".to_string()))?;
            let h_margin = yaml_f64(&margins_yaml[1])
                .ok_or_else(|| CameraModelError::InvalidParams("Invalid h_margin".to_string()))?;
            if w_margin < 0.0 || h_margin < 0.0 {
                return Err(CameraModelError::InvalidParams(
                    "Margins must be non-negative".to_string(),
                ));
            }
            model.w_margin = w_margin;
            model.h_margin = h_margin;
        }

        Ok(model)
    }

    /// Loads a camera from a directory holding the fixed-named
    /// [`GEO_FILE`] and [`TBC_FILE`].
    pub fn load_from_dir(dir: &Path) -> Result<Self, CameraModelError> {
        PinholeCamera::load_from_files(&dir.join(GEO_FILE), &dir.join(TBC_FILE))
    }

    /// Saves the camera to the two-file calibration layout, the inverse of
    /// [`PinholeCamera::load_from_files`].
    pub fn save_to_files(&self, abs_cam_geo: &Path, abs_tbc: &Path) -> Result<(), CameraModelError> {
        let geo_yaml = serde_yaml::to_value(serde_yaml::Mapping::from_iter([(
            serde_yaml::Value::String(GEO_HEADER.to_string()),
            serde_yaml::to_value(serde_yaml::Mapping::from_iter([
                (
                    serde_yaml::Value::String("camera_model".to_string()),
                    serde_yaml::Value::String("pinhole".to_string()),
                ),
                (
                    serde_yaml::Value::String("intrinsics".to_string()),
                    serde_yaml::to_value(vec![
                        self.intrinsics.fx,
                        self.intrinsics.fy,
                        self.intrinsics.cx,
                        self.intrinsics.cy,
                    ])
                    .map_err(|e| CameraModelError::YamlError(e.to_string()))?,
                ),
                (
                    serde_yaml::Value::String("resolution".to_string()),
                    serde_yaml::to_value(vec![self.resolution.width, self.resolution.height])
                        .map_err(|e| CameraModelError::YamlError(e.to_string()))?,
                ),
                (
                    serde_yaml::Value::String("margins".to_string()),
                    serde_yaml::to_value(vec![self.w_margin, self.h_margin])
                        .map_err(|e| CameraModelError::YamlError(e.to_string()))?,
                ),
            ]))
            .map_err(|e| CameraModelError::YamlError(e.to_string()))?,
        )]))
        .map_err(|e| CameraModelError::YamlError(e.to_string()))?;
        write_yaml_file(abs_cam_geo, &geo_yaml)?;

        let rot = self.t_b_c.rotation;
        let trans = self.t_b_c.translation;
        let tbc_yaml = serde_yaml::to_value(serde_yaml::Mapping::from_iter([(
            serde_yaml::Value::String(TBC_HEADER.to_string()),
            serde_yaml::to_value(serde_yaml::Mapping::from_iter([
                (
                    serde_yaml::Value::String("rotation".to_string()),
                    serde_yaml::to_value(vec![rot.w, rot.i, rot.j, rot.k])
                        .map_err(|e| CameraModelError::YamlError(e.to_string()))?,
                ),
                (
                    serde_yaml::Value::String("translation".to_string()),
                    serde_yaml::to_value(vec![trans.x, trans.y, trans.z])
                        .map_err(|e| CameraModelError::YamlError(e.to_string()))?,
                ),
            ]))
            .map_err(|e| CameraModelError::YamlError(e.to_string()))?,
        )]))
        .map_err(|e| CameraModelError::YamlError(e.to_string()))?;
        write_yaml_file(abs_tbc, &tbc_yaml)?;

        Ok(())
    }

    /// Saves the camera into `dir` using the fixed file names, the inverse of
    /// [`PinholeCamera::load_from_dir`].
    pub fn save_to_dir(&self, dir: &Path) -> Result<(), CameraModelError> {
        self.save_to_files(&dir.join(GEO_FILE), &dir.join(TBC_FILE))
    }
}

impl fmt::Display for PinholeCamera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.t_b_c.translation;
        write!(
            f,
            "PinholeCamera [fx: {}, fy: {}, cx: {}, cy: {}, w: {}, h: {}, \
             t_b_c translation: [{}, {}, {}]]",
            self.intrinsics.fx,
            self.intrinsics.fy,
            self.intrinsics.cx,
            self.intrinsics.cy,
            self.resolution.width,
            self.resolution.height,
            t.x,
            t.y,
            t.z
        )
    }
}

/// Reads a YAML scalar as f64, accepting integer notation.
fn yaml_f64(value: &Yaml) -> Option<f64> {
    value.as_f64().or_else(|| value.as_i64().map(|v| v as f64))
}

fn write_yaml_file(path: &Path, value: &serde_yaml::Value) -> Result<(), CameraModelError> {
    let yaml_string =
        serde_yaml::to_string(value).map_err(|e| CameraModelError::YamlError(e.to_string()))?;
    let mut file = fs::File::create(path).map_err(|e| CameraModelError::IOError(e.to_string()))?;
    file.write_all(yaml_string.as_bytes())
        .map_err(|e| CameraModelError::IOError(e.to_string()))?;
    Ok(())
}

/// Loads a rigid pose from a YAML file holding a `rotation` quaternion
/// (`[w, x, y, z]`) and a `translation` under the [`TBC_HEADER`] key.
fn load_pose_yaml(path: &Path) -> Result<Isometry3<f64>, CameraModelError> {
    let contents = fs::read_to_string(path)?;
    let docs = YamlLoader::load_from_str(&contents)?;
    let doc = docs.first().ok_or_else(|| {
        CameraModelError::YamlError(format!(
            "pose file {} holds no YAML document",
            path.display()
        ))
    })?;
    let pose = &doc[TBC_HEADER];
    if pose.is_badvalue() {
        return Err(CameraModelError::YamlError(format!(
            "pose file {} misses the '{}' header key",
            path.display(),
            TBC_HEADER
        )));
    }

    let rotation_yaml = pose["rotation"].as_vec().ok_or_else(|| {
        CameraModelError::InvalidParams("YAML missing 'rotation' or not an array".to_string())
    })?;
    let translation_yaml = pose["translation"].as_vec().ok_or_else(|| {
        CameraModelError::InvalidParams("YAML missing 'translation' or not an array".to_string())
    })?;
    if rotation_yaml.len() != 4 || translation_yaml.len() != 3 {
        return Err(CameraModelError::InvalidParams(
            "'rotation' must hold [w, x, y, z] and 'translation' [x, y, z]".to_string(),
        ));
    }

    let mut quat = [0.0; 4];
    for (dst, src) in quat.iter_mut().zip(rotation_yaml) {
        *dst = yaml_f64(src)
            .ok_or_else(|| CameraModelError::InvalidParams("Invalid rotation entry".to_string()))?;
    }
    let mut trans = [0.0; 3];
    for (dst, src) in trans.iter_mut().zip(translation_yaml) {
        *dst = yaml_f64(src).ok_or_else(|| {
            CameraModelError::InvalidParams("Invalid translation entry".to_string())
        })?;
    }

    let rotation = UnitQuaternion::from_quaternion(Quaternion::new(
        quat[0], quat[1], quat[2], quat[3],
    ));
    Ok(Isometry3::from_parts(
        Translation3::new(trans[0], trans[1], trans[2]),
        rotation,
    ))
}
