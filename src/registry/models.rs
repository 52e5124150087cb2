//! GR family model variants and their fixed attributes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Known GR camera models
///
/// `Unknown` means the manufacturer and family were confirmed but the exact
/// model string is not in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CameraModel {
    #[serde(rename = "gr_digital")]
    GrDigital,
    #[serde(rename = "gr_digital_ii")]
    GrDigitalII,
    #[serde(rename = "gr_digital_iii")]
    GrDigitalIII,
    #[serde(rename = "gr_digital_iv")]
    GrDigitalIV,
    #[serde(rename = "gr")]
    Gr,
    #[serde(rename = "gr_ii")]
    GrII,
    #[serde(rename = "gr_iii")]
    GrIII,
    #[serde(rename = "gr_iiix")]
    GrIIIx,
    /// GR III with the Highlight Diffusion Filter
    #[serde(rename = "gr_iii_hdf")]
    GrIIIHdf,
    /// GR IIIx with the Highlight Diffusion Filter
    #[serde(rename = "gr_iiix_hdf")]
    GrIIIxHdf,
    #[serde(rename = "gr_iv")]
    GrIV,
    /// GR IV with the Highlight Diffusion Filter
    #[serde(rename = "gr_iv_hdf")]
    GrIVHdf,
    #[serde(rename = "gr_iv_monochrome")]
    GrIVMonochrome,
    #[serde(rename = "unknown")]
    Unknown,
}

impl CameraModel {
    /// Every variant, in release order, `Unknown` last
    pub const ALL: [CameraModel; 14] = [
        CameraModel::GrDigital,
        CameraModel::GrDigitalII,
        CameraModel::GrDigitalIII,
        CameraModel::GrDigitalIV,
        CameraModel::Gr,
        CameraModel::GrII,
        CameraModel::GrIII,
        CameraModel::GrIIIx,
        CameraModel::GrIIIHdf,
        CameraModel::GrIIIxHdf,
        CameraModel::GrIV,
        CameraModel::GrIVHdf,
        CameraModel::GrIVMonochrome,
        CameraModel::Unknown,
    ];

    /// Whether this model ships with the built-in optical filter option
    pub fn has_filter_option(self) -> bool {
        matches!(
            self,
            CameraModel::GrIIIHdf | CameraModel::GrIIIxHdf | CameraModel::GrIVHdf
        )
    }

    /// Whether this model uses a monochrome sensor
    pub fn is_monochrome(self) -> bool {
        matches!(self, CameraModel::GrIVMonochrome)
    }

    /// Marketing name, as printed on the camera
    pub fn display_name(self) -> &'static str {
        match self {
            CameraModel::GrDigital => "GR Digital",
            CameraModel::GrDigitalII => "GR Digital II",
            CameraModel::GrDigitalIII => "GR Digital III",
            CameraModel::GrDigitalIV => "GR Digital IV",
            CameraModel::Gr => "GR",
            CameraModel::GrII => "GR II",
            CameraModel::GrIII => "GR III",
            CameraModel::GrIIIx => "GR IIIx",
            CameraModel::GrIIIHdf => "GR III HDF",
            CameraModel::GrIIIxHdf => "GR IIIx HDF",
            CameraModel::GrIV => "GR IV",
            CameraModel::GrIVHdf => "GR IV HDF",
            CameraModel::GrIVMonochrome => "GR IV Monochrome",
            CameraModel::Unknown => "GR (unrecognised model)",
        }
    }
}

impl fmt::Display for CameraModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
