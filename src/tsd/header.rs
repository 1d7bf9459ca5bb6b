//! Static preamble of built-in type aliases.
//!
//! Emitted once at the top of the generated document, before any component
//! declarations. The `${VERSION}` placeholder is substituted with the
//! version token handed to the assembler.

/// Placeholder substituted with the version token.
const VERSION_PLACEHOLDER: &str = "${VERSION}";

const HEADER: &str = r#"
// Type definitions for the widget API, version ${VERSION}

// A plain string can be used as a shorthand, e.g. `"image.jpg"` equals `{src: "image.jpg"}`.
interface Image {

  /**
   * Image path or URL.
   */
  src?: string;

  /**
   * Image width, extracted from the image file when missing.
   */
  width?: number;

  /**
   * Image height, extracted from the image file when missing.
   */
  height?: number;

  /**
   * Image scale factor - the image will be scaled down by this factor.
   * Ignored when width or height are set.
   */
  scale?: number;
}

type Color = string;

type Font = string;

type LayoutData = any;

type GestureObject = any;

interface Bounds {

  /**
   * the horizontal offset from the parent's left edge in dip
   */
  left?: number;

  /**
   * the vertical offset from the parent's top edge in dip
   */
  top?: number;

  /**
   * the width of the widget in dip
   */
  width?: number;

  /**
   * the height of the widget in dip
   */
  height?: number;

}

interface Transformation {

  /**
   * Clock-wise rotation in radians. Defaults to `0`.
   */
   rotation?: number;

  /**
   * Horizontal scale factor. Defaults to `1`.
   */
  scaleX?: number;

  /**
   * Vertical scale factor. Defaults to `1`.
   */
  scaleY?: number;

  /**
   * Horizontal translation (shift) in dip. Defaults to `0`.
   */
  translationX?: number;

  /**
   * Vertical translation (shift) in dip. Defaults to `0`.
   */
  translationY?: number;

  /**
   * Z-axis translation (shift) in dip. Defaults to `0`. Android 5.0+ only.
   */
  translationZ?: number;

}

type Selector = string;

type dimension = number;

type offset = number;

type margin = any;
"#;

/// The preamble with the version token substituted in.
pub fn preamble(version: &str) -> String {
    HEADER.trim().replace(VERSION_PLACEHOLDER, version)
}
