use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

pub mod pinhole;

pub use pinhole::PinholeCamera;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intrinsics {
    pub fx: f64,
    pub fy: f64,
    pub cx: f64,
    pub cy: f64,
}

impl Intrinsics {
    /// Builds the 3x3 intrinsic matrix K from the pinhole parameters.
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.fx, 0.0, self.cx, //
            0.0, self.fy, self.cy, //
            0.0, 0.0, 1.0,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

#[derive(thiserror::Error, Debug)]
pub enum CameraModelError {
    #[error("Focal length must be positive")]
    FocalLengthMustBePositive,
    #[error("Principal point must be finite")]
    PrincipalPointMustBeFinite,
    #[error("Invalid camera parameters: {0}")]
    InvalidParams(String),
    #[error("Intrinsic matrix is not invertible")]
    SingularIntrinsicMatrix,
    #[error("Failed to load YAML: {0}")]
    YamlError(String),
    #[error("IO Error: {0}")]
    IOError(String),
    #[error("No camera sub-directories found in {0}")]
    NoCamerasFound(String),
}

impl From<std::io::Error> for CameraModelError {
    fn from(err: std::io::Error) -> Self {
        CameraModelError::IOError(err.to_string())
    }
}

impl From<yaml_rust::ScanError> for CameraModelError {
    fn from(err: yaml_rust::ScanError) -> Self {
        CameraModelError::YamlError(err.to_string())
    }
}

/// Common validation functions for camera parameters
pub mod validation {
    use super::*;

    pub fn validate_intrinsics(intrinsics: &Intrinsics) -> Result<(), CameraModelError> {
        if intrinsics.fx <= 0.0 || intrinsics.fy <= 0.0 {
            return Err(CameraModelError::FocalLengthMustBePositive);
        }
        if !intrinsics.cx.is_finite() || !intrinsics.cy.is_finite() {
            return Err(CameraModelError::PrincipalPointMustBeFinite);
        }
        Ok(())
    }

    pub fn validate_resolution(resolution: &Resolution) -> Result<(), CameraModelError> {
        if resolution.width == 0 || resolution.height == 0 {
            return Err(CameraModelError::InvalidParams(
                "Resolution must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_intrinsics() {
        let good = Intrinsics {
            fx: 300.0,
            fy: 300.0,
            cx: 320.0,
            cy: 240.0,
        };
        assert!(validation::validate_intrinsics(&good).is_ok());

        let bad_focal = Intrinsics {
            fx: 0.0,
            ..good.clone()
        };
        assert!(matches!(
            validation::validate_intrinsics(&bad_focal),
            Err(CameraModelError::FocalLengthMustBePositive)
        ));

        let bad_pp = Intrinsics {
            cx: f64::NAN,
            ..good.clone()
        };
        assert!(matches!(
            validation::validate_intrinsics(&bad_pp),
            Err(CameraModelError::PrincipalPointMustBeFinite)
        ));
    }

    #[test]
    fn test_validate_resolution() {
        assert!(validation::validate_resolution(&Resolution {
            width: 640,
            height: 480
        })
        .is_ok());
        assert!(validation::validate_resolution(&Resolution {
            width: 0,
            height: 480
        })
        .is_err());
    }

    #[test]
    fn test_intrinsic_matrix_layout() {
        let intrinsics = Intrinsics {
            fx: 300.0,
            fy: 310.0,
            cx: 320.0,
            cy: 240.0,
        };
        let k = intrinsics.matrix();
        assert_eq!(k[(0, 0)], 300.0);
        assert_eq!(k[(1, 1)], 310.0);
        assert_eq!(k[(0, 2)], 320.0);
        assert_eq!(k[(1, 2)], 240.0);
        assert_eq!(k[(2, 2)], 1.0);
    }
}
