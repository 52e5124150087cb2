//! Lookup tables for model strings and manufacturer names
//!
//! Both tables are built once on first use and are read-only afterwards.

use super::models::CameraModel;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Exact `Image Model` strings, as cameras and firmware revisions write them
const MODEL_STRINGS: &[(&str, CameraModel)] = &[
    ("GR DIGITAL", CameraModel::GrDigital),
    ("RICOH GR DIGITAL", CameraModel::GrDigital),
    ("GR Digital", CameraModel::GrDigital),
    ("GR DIGITAL 2", CameraModel::GrDigitalII),
    ("GR DIGITAL II", CameraModel::GrDigitalII),
    ("RICOH GR DIGITAL 2", CameraModel::GrDigitalII),
    ("GR Digital II", CameraModel::GrDigitalII),
    ("GR DIGITAL 3", CameraModel::GrDigitalIII),
    ("GR DIGITAL III", CameraModel::GrDigitalIII),
    ("RICOH GR DIGITAL 3", CameraModel::GrDigitalIII),
    ("GR Digital III", CameraModel::GrDigitalIII),
    ("GR DIGITAL 4", CameraModel::GrDigitalIV),
    ("GR DIGITAL IV", CameraModel::GrDigitalIV),
    ("RICOH GR DIGITAL 4", CameraModel::GrDigitalIV),
    ("GR Digital IV", CameraModel::GrDigitalIV),
    ("GR", CameraModel::Gr),
    ("RICOH GR", CameraModel::Gr),
    ("GR II", CameraModel::GrII),
    ("RICOH GR II", CameraModel::GrII),
    ("GR III", CameraModel::GrIII),
    ("RICOH GR III", CameraModel::GrIII),
    ("GR IIIx", CameraModel::GrIIIx),
    ("RICOH GR IIIx", CameraModel::GrIIIx),
    ("GR IIIX", CameraModel::GrIIIx),
    ("RICOH GR IIIX", CameraModel::GrIIIx),
    ("GR III HDF", CameraModel::GrIIIHdf),
    ("RICOH GR III HDF", CameraModel::GrIIIHdf),
    ("GR IIIx HDF", CameraModel::GrIIIxHdf),
    ("RICOH GR IIIx HDF", CameraModel::GrIIIxHdf),
    ("GR IIIX HDF", CameraModel::GrIIIxHdf),
    ("RICOH GR IIIX HDF", CameraModel::GrIIIxHdf),
    ("GR IV", CameraModel::GrIV),
    ("RICOH GR IV", CameraModel::GrIV),
    ("GR IV HDF", CameraModel::GrIVHdf),
    ("RICOH GR IV HDF", CameraModel::GrIVHdf),
    ("GR IV Monochrome", CameraModel::GrIVMonochrome),
    ("RICOH GR IV Monochrome", CameraModel::GrIVMonochrome),
    ("GR IV MONOCHROME", CameraModel::GrIVMonochrome),
    ("RICOH GR IV MONOCHROME", CameraModel::GrIVMonochrome),
];

/// Accepted `Image Make` renderings
const MANUFACTURER_NAMES: &[&str] = &[
    "RICOH",
    "Ricoh",
    "RICOH IMAGING COMPANY, LTD.",
    "Ricoh Imaging Company, Ltd.",
    "PENTAX RICOH IMAGING",
];

static MODEL_LOOKUP: Lazy<HashMap<&'static str, CameraModel>> =
    Lazy::new(|| MODEL_STRINGS.iter().copied().collect());

static MANUFACTURER_LOOKUP: Lazy<HashSet<&'static str>> =
    Lazy::new(|| MANUFACTURER_NAMES.iter().copied().collect());

/// Exact, case-sensitive lookup of a model string
pub fn lookup_model(model: &str) -> Option<CameraModel> {
    MODEL_LOOKUP.get(model).copied()
}

/// Exact set membership test for a manufacturer name
pub fn is_known_manufacturer(make: &str) -> bool {
    MANUFACTURER_LOOKUP.contains(make)
}

/// All registered model strings with the model each maps to
pub fn model_strings() -> impl Iterator<Item = (&'static str, CameraModel)> {
    MODEL_STRINGS.iter().copied()
}

/// All accepted manufacturer names
pub fn manufacturer_names() -> impl Iterator<Item = &'static str> {
    MANUFACTURER_NAMES.iter().copied()
}
