//! Defines the transfer syntaxes used by DICOM P10 data, which specify the
//! VR serialization and endianness used for encoding the data set, along with
//! whether the stream is zlib deflated and/or encapsulated.

/// Specifies whether the VR of each data element is stored explicitly
/// alongside its value, or whether it's implicit and must be looked up using
/// a data element dictionary.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VrSerialization {
  VrExplicit,
  VrImplicit,
}

/// Specifies the byte ordering used when encoding numeric values.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Endianness {
  LittleEndian,
  BigEndian,
}

/// A DICOM transfer syntax specifies the encoding rules used for a DICOM data
/// set: its VR serialization, its endianness, whether it is zlib deflated,
/// and whether its pixel data is encapsulated.
///
/// Ref: PS3.5 10.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransferSyntax {
  pub name: &'static str,
  pub uid: &'static str,
  pub vr_serialization: VrSerialization,
  pub endianness: Endianness,
  pub is_deflated: bool,
  pub is_encapsulated: bool,
}

impl TransferSyntax {
  pub const IMPLICIT_VR_LITTLE_ENDIAN: Self = Self {
    name: "Implicit VR Little Endian",
    uid: "1.2.840.10008.1.2",
    vr_serialization: VrSerialization::VrImplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: false,
  };

  pub const EXPLICIT_VR_LITTLE_ENDIAN: Self = Self {
    name: "Explicit VR Little Endian",
    uid: "1.2.840.10008.1.2.1",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: false,
  };

  pub const ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN: Self = Self {
    name: "Encapsulated Uncompressed Explicit VR Little Endian",
    uid: "1.2.840.10008.1.2.1.98",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: Self = Self {
    name: "Deflated Explicit VR Little Endian",
    uid: "1.2.840.10008.1.2.1.99",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: true,
    is_encapsulated: false,
  };

  pub const EXPLICIT_VR_BIG_ENDIAN: Self = Self {
    name: "Explicit VR Big Endian",
    uid: "1.2.840.10008.1.2.2",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::BigEndian,
    is_deflated: false,
    is_encapsulated: false,
  };

  pub const JPEG_BASELINE_8BIT: Self = Self {
    name: "JPEG Baseline 8-bit",
    uid: "1.2.840.10008.1.2.4.50",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const JPEG_EXTENDED_12BIT: Self = Self {
    name: "JPEG Extended 12-bit",
    uid: "1.2.840.10008.1.2.4.51",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const JPEG_LOSSLESS_NON_HIERARCHICAL: Self = Self {
    name: "JPEG Lossless, Non-Hierarchical",
    uid: "1.2.840.10008.1.2.4.57",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION: Self = Self {
    name: "JPEG Lossless, Non-Hierarchical, First-Order Prediction",
    uid: "1.2.840.10008.1.2.4.70",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const JPEG_LS_LOSSLESS: Self = Self {
    name: "JPEG-LS Lossless",
    uid: "1.2.840.10008.1.2.4.80",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const JPEG_LS_LOSSY_NEAR_LOSSLESS: Self = Self {
    name: "JPEG-LS Lossy (Near-Lossless)",
    uid: "1.2.840.10008.1.2.4.81",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const JPEG_2000_LOSSLESS_ONLY: Self = Self {
    name: "JPEG 2000 (Lossless Only)",
    uid: "1.2.840.10008.1.2.4.90",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const JPEG_2000: Self = Self {
    name: "JPEG 2000",
    uid: "1.2.840.10008.1.2.4.91",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const JPEG_2000_MULTI_COMPONENT_LOSSLESS_ONLY: Self = Self {
    name: "JPEG 2000 Multi-Component (Lossless Only)",
    uid: "1.2.840.10008.1.2.4.92",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const JPEG_2000_MULTI_COMPONENT: Self = Self {
    name: "JPEG 2000 Multi-Component",
    uid: "1.2.840.10008.1.2.4.93",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const JPIP_REFERENCED: Self = Self {
    name: "JPIP Referenced",
    uid: "1.2.840.10008.1.2.4.94",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const JPIP_REFERENCED_DEFLATE: Self = Self {
    name: "JPIP Referenced Deflate",
    uid: "1.2.840.10008.1.2.4.95",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: true,
    is_encapsulated: true,
  };

  pub const JPEG_XL_LOSSLESS: Self = Self {
    name: "JPEG XL Lossless",
    uid: "1.2.840.10008.1.2.4.110",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const JPEG_XL_JPEG_RECOMPRESSION: Self = Self {
    name: "JPEG XL JPEG Recompression",
    uid: "1.2.840.10008.1.2.4.111",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const JPEG_XL: Self = Self {
    name: "JPEG XL",
    uid: "1.2.840.10008.1.2.4.112",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const HTJ2K_LOSSLESS: Self = Self {
    name: "High-Throughput JPEG 2000 (Lossless Only)",
    uid: "1.2.840.10008.1.2.4.201",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const HTJ2K_LOSSLESS_RPCL: Self = Self {
    name: "High-Throughput JPEG 2000 with RPCL Options (Lossless Only)",
    uid: "1.2.840.10008.1.2.4.202",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const HTJ2K: Self = Self {
    name: "High-Throughput JPEG 2000",
    uid: "1.2.840.10008.1.2.4.203",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const JPIP_HTJ2K_REFERENCED: Self = Self {
    name: "JPIP HTJ2K Referenced",
    uid: "1.2.840.10008.1.2.4.204",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const JPIP_HTJ2K_REFERENCED_DEFLATE: Self = Self {
    name: "JPIP HTJ2K Referenced Deflate",
    uid: "1.2.840.10008.1.2.4.205",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: true,
    is_encapsulated: true,
  };

  pub const JPEG_LOSSLESS_SV1: Self = Self {
    name: "JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14 [Selection Value 1])",
    uid: "1.2.840.10008.1.2.4.70",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const MPEG2_MAIN_PROFILE_MAIN_LEVEL: Self = Self {
    name: "MPEG2 Main Profile / Main Level",
    uid: "1.2.840.10008.1.2.4.100",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const MPEG2_MAIN_PROFILE_HIGH_LEVEL: Self = Self {
    name: "MPEG2 Main Profile / High Level",
    uid: "1.2.840.10008.1.2.4.101",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const MPEG4_AVC_H264_HIGH_PROFILE: Self = Self {
    name: "MPEG-4 AVC/H.264 High Profile / Level 4.1",
    uid: "1.2.840.10008.1.2.4.102",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const MPEG4_AVC_H264_BD_COMPATIBLE_HIGH_PROFILE: Self = Self {
    name: "MPEG-4 AVC/H.264 BD-Compatible High Profile / Level 4.1",
    uid: "1.2.840.10008.1.2.4.103",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const MPEG4_AVC_H264_HIGH_PROFILE_FOR_2D_VIDEO: Self = Self {
    name: "MPEG-4 AVC/H.264 High Profile / Level 4.2 For 2D Video",
    uid: "1.2.840.10008.1.2.4.104",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const MPEG4_AVC_H264_HIGH_PROFILE_FOR_3D_VIDEO: Self = Self {
    name: "MPEG-4 AVC/H.264 High Profile / Level 4.2 For 3D Video",
    uid: "1.2.840.10008.1.2.4.105",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const MPEG4_AVC_H264_STEREO_HIGH_PROFILE: Self = Self {
    name: "MPEG-4 AVC/H.264 Stereo High Profile / Level 4.2",
    uid: "1.2.840.10008.1.2.4.106",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const HEVC_H265_MAIN_PROFILE: Self = Self {
    name: "HEVC/H.265 Main Profile / Level 5.1",
    uid: "1.2.840.10008.1.2.4.107",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const HEVC_H265_MAIN_10_PROFILE: Self = Self {
    name: "HEVC/H.265 Main 10 Profile / Level 5.1",
    uid: "1.2.840.10008.1.2.4.108",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const RLE_LOSSLESS: Self = Self {
    name: "RLE Lossless",
    uid: "1.2.840.10008.1.2.5",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const SMPTE_ST_2110_20_UNCOMPRESSED_PROGRESSIVE: Self = Self {
    name: "SMPTE ST 2110-20 Uncompressed Progressive Active Video",
    uid: "1.2.840.10008.1.2.7.1",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const SMPTE_ST_2110_20_UNCOMPRESSED_INTERLACED: Self = Self {
    name: "SMPTE ST 2110-20 Uncompressed Interlaced Active Video",
    uid: "1.2.840.10008.1.2.7.2",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  pub const SMPTE_ST_2110_30_PCM_AUDIO: Self = Self {
    name: "SMPTE ST 2110-30 PCM Digital Audio",
    uid: "1.2.840.10008.1.2.7.3",
    vr_serialization: VrSerialization::VrExplicit,
    endianness: Endianness::LittleEndian,
    is_deflated: false,
    is_encapsulated: true,
  };

  /// All transfer syntaxes recognized when reading and writing DICOM P10
  /// data.
  ///
  pub const ALL: [Self; 37] = [
    Self::IMPLICIT_VR_LITTLE_ENDIAN,
    Self::EXPLICIT_VR_LITTLE_ENDIAN,
    Self::ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN,
    Self::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    Self::EXPLICIT_VR_BIG_ENDIAN,
    Self::JPEG_BASELINE_8BIT,
    Self::JPEG_EXTENDED_12BIT,
    Self::JPEG_LOSSLESS_NON_HIERARCHICAL,
    Self::JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION,
    Self::JPEG_LS_LOSSLESS,
    Self::JPEG_LS_LOSSY_NEAR_LOSSLESS,
    Self::JPEG_2000_LOSSLESS_ONLY,
    Self::JPEG_2000,
    Self::JPEG_2000_MULTI_COMPONENT_LOSSLESS_ONLY,
    Self::JPEG_2000_MULTI_COMPONENT,
    Self::JPIP_REFERENCED,
    Self::JPIP_REFERENCED_DEFLATE,
    Self::JPEG_XL_LOSSLESS,
    Self::JPEG_XL_JPEG_RECOMPRESSION,
    Self::JPEG_XL,
    Self::HTJ2K_LOSSLESS,
    Self::HTJ2K_LOSSLESS_RPCL,
    Self::HTJ2K,
    Self::JPIP_HTJ2K_REFERENCED,
    Self::JPIP_HTJ2K_REFERENCED_DEFLATE,
    Self::MPEG2_MAIN_PROFILE_MAIN_LEVEL,
    Self::MPEG2_MAIN_PROFILE_HIGH_LEVEL,
    Self::MPEG4_AVC_H264_HIGH_PROFILE,
    Self::MPEG4_AVC_H264_BD_COMPATIBLE_HIGH_PROFILE,
    Self::MPEG4_AVC_H264_HIGH_PROFILE_FOR_2D_VIDEO,
    Self::MPEG4_AVC_H264_HIGH_PROFILE_FOR_3D_VIDEO,
    Self::MPEG4_AVC_H264_STEREO_HIGH_PROFILE,
    Self::HEVC_H265_MAIN_PROFILE,
    Self::HEVC_H265_MAIN_10_PROFILE,
    Self::RLE_LOSSLESS,
    Self::SMPTE_ST_2110_20_UNCOMPRESSED_PROGRESSIVE,
    Self::SMPTE_ST_2110_20_UNCOMPRESSED_INTERLACED,
    Self::SMPTE_ST_2110_30_PCM_AUDIO,
  ];

  /// Looks up a transfer syntax by its UID. Trailing null padding bytes and
  /// whitespace are ignored.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_uid(uid: &str) -> Result<Self, ()> {
    let uid = uid.trim_end_matches(['\0', ' ']);

    Self::ALL.into_iter().find(|ts| ts.uid == uid).ok_or(())
  }
}

/// Implicit VR Little Endian is the default transfer syntax assumed when none
/// is otherwise specified, so it's exposed directly at the module level for
/// convenience.
///
pub const IMPLICIT_VR_LITTLE_ENDIAN: TransferSyntax =
  TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn all_test() {
    assert_eq!(TransferSyntax::ALL.len(), 37);
  }

  #[test]
  fn from_uid_test() {
    assert_eq!(
      TransferSyntax::from_uid("1.2.840.10008.1.2"),
      Ok(TransferSyntax::IMPLICIT_VR_LITTLE_ENDIAN)
    );

    assert_eq!(
      TransferSyntax::from_uid("1.2.840.10008.1.2.1\0"),
      Ok(TransferSyntax::EXPLICIT_VR_LITTLE_ENDIAN)
    );

    assert_eq!(TransferSyntax::from_uid("1.2.3.4.5"), Err(()));
  }
}
