// THEORY:
// The `operation` module is the closed enumeration over the transform catalog.
// It exists so that callers driving the engine from strings (the CLI, scripts)
// never branch on raw operation names themselves: parsing happens once, here,
// with an explicit `UnknownOperation` error for anything outside the catalog,
// and dispatch maps each variant onto exactly one pure transform.
//
// Arity lives here too. The pure functions take what their signatures say; the
// enumeration knows that `blend` wants a non-empty list while `blur` wants
// exactly one buffer, and rejects mismatches with `InvalidArgument` before any
// pixel work starts.

use crate::core_modules::pixel_buffer::PixelBuffer;
use crate::core_modules::transforms;
use crate::error::PictureError;

/// Quarter-turn multiples for the rotate operations, always clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Quarter,
    Half,
    ThreeQuarter,
}

/// Mirror axis for the flip operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAxis {
    Horizontal,
    Vertical,
}

/// One entry of the transform catalog, ready to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Invert,
    Grayscale,
    Rotate(Rotation),
    Flip(FlipAxis),
    Blend,
    Blur,
    Mosaic { tile_size: u32 },
}

impl Operation {
    /// Parses an operation word and its modifier into a catalog entry.
    ///
    /// `rotate` takes `90`, `180` or `270`; `flip` takes `H` or `V`
    /// (case-insensitive); `mosaic` takes a positive tile size. The remaining
    /// operations take no modifier. Anything else is `UnknownOperation`.
    pub fn from_name(name: &str, modifier: Option<&str>) -> Result<Self, PictureError> {
        match name {
            "invert" => Ok(Self::Invert),
            "grayscale" => Ok(Self::Grayscale),
            "blend" => Ok(Self::Blend),
            "blur" => Ok(Self::Blur),
            "rotate" => match modifier {
                Some("90") => Ok(Self::Rotate(Rotation::Quarter)),
                Some("180") => Ok(Self::Rotate(Rotation::Half)),
                Some("270") => Ok(Self::Rotate(Rotation::ThreeQuarter)),
                other => Err(PictureError::InvalidArgument(format!(
                    "rotate expects 90, 180 or 270, got '{}'",
                    other.unwrap_or("")
                ))),
            },
            "flip" => match modifier {
                Some(axis) if axis.eq_ignore_ascii_case("h") => {
                    Ok(Self::Flip(FlipAxis::Horizontal))
                }
                Some(axis) if axis.eq_ignore_ascii_case("v") => Ok(Self::Flip(FlipAxis::Vertical)),
                other => Err(PictureError::InvalidArgument(format!(
                    "flip expects H or V, got '{}'",
                    other.unwrap_or("")
                ))),
            },
            "mosaic" => {
                let raw = modifier.ok_or_else(|| {
                    PictureError::InvalidArgument("mosaic expects a tile size".into())
                })?;
                let tile_size: u32 = raw.parse().map_err(|_| {
                    PictureError::InvalidArgument(format!(
                        "mosaic tile size must be a positive integer, got '{raw}'"
                    ))
                })?;
                if tile_size == 0 {
                    return Err(PictureError::InvalidArgument(
                        "mosaic tile size must be positive".into(),
                    ));
                }
                Ok(Self::Mosaic { tile_size })
            }
            other => Err(PictureError::UnknownOperation(other.to_string())),
        }
    }

    /// True for the catalog entries that consume a list of buffers rather than
    /// exactly one.
    pub fn multi_input(self) -> bool {
        matches!(self, Self::Blend | Self::Mosaic { .. })
    }

    /// Dispatches to the corresponding pure transform after checking arity.
    pub fn apply(self, inputs: &[PixelBuffer]) -> Result<PixelBuffer, PictureError> {
        if self.multi_input() {
            return match self {
                Self::Blend => transforms::blend(inputs),
                Self::Mosaic { tile_size } => transforms::mosaic(inputs, tile_size),
                _ => unreachable!(),
            };
        }
        match inputs {
            [input] => Ok(match self {
                Self::Invert => transforms::invert(input),
                Self::Grayscale => transforms::grayscale(input),
                Self::Rotate(Rotation::Quarter) => transforms::rotate90(input),
                Self::Rotate(Rotation::Half) => transforms::rotate180(input),
                Self::Rotate(Rotation::ThreeQuarter) => transforms::rotate270(input),
                Self::Flip(FlipAxis::Horizontal) => transforms::flip_horizontal(input),
                Self::Flip(FlipAxis::Vertical) => transforms::flip_vertical(input),
                Self::Blur => transforms::blur(input),
                Self::Blend | Self::Mosaic { .. } => unreachable!(),
            }),
            _ => Err(PictureError::InvalidArgument(format!(
                "operation takes exactly one input, got {}",
                inputs.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::color::color::Color;

    fn sample() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.set(0, 0, Color::new(10, 20, 30)).unwrap();
        buffer.set(1, 1, Color::new(40, 50, 60)).unwrap();
        buffer
    }

    #[test]
    fn parses_every_catalog_entry() {
        assert_eq!(Operation::from_name("invert", None).unwrap(), Operation::Invert);
        assert_eq!(
            Operation::from_name("grayscale", None).unwrap(),
            Operation::Grayscale
        );
        assert_eq!(
            Operation::from_name("rotate", Some("270")).unwrap(),
            Operation::Rotate(Rotation::ThreeQuarter)
        );
        assert_eq!(
            Operation::from_name("flip", Some("V")).unwrap(),
            Operation::Flip(FlipAxis::Vertical)
        );
        assert_eq!(Operation::from_name("blend", None).unwrap(), Operation::Blend);
        assert_eq!(Operation::from_name("blur", None).unwrap(), Operation::Blur);
        assert_eq!(
            Operation::from_name("mosaic", Some("16")).unwrap(),
            Operation::Mosaic { tile_size: 16 }
        );
    }

    #[test]
    fn unknown_names_are_an_explicit_error() {
        assert_eq!(
            Operation::from_name("sharpen", None),
            Err(PictureError::UnknownOperation("sharpen".to_string()))
        );
    }

    #[test]
    fn bad_modifiers_are_invalid_arguments() {
        assert!(matches!(
            Operation::from_name("rotate", Some("45")),
            Err(PictureError::InvalidArgument(_))
        ));
        assert!(matches!(
            Operation::from_name("flip", None),
            Err(PictureError::InvalidArgument(_))
        ));
        assert!(matches!(
            Operation::from_name("mosaic", Some("0")),
            Err(PictureError::InvalidArgument(_))
        ));
        assert!(matches!(
            Operation::from_name("mosaic", Some("three")),
            Err(PictureError::InvalidArgument(_))
        ));
    }

    #[test]
    fn apply_dispatches_to_the_pure_transforms() {
        let input = sample();
        let inputs = [input.clone()];
        assert_eq!(
            Operation::Invert.apply(&inputs).unwrap(),
            crate::core_modules::transforms::invert(&input)
        );
        assert_eq!(
            Operation::Rotate(Rotation::Quarter).apply(&inputs).unwrap(),
            crate::core_modules::transforms::rotate90(&input)
        );
        assert_eq!(
            Operation::Blend.apply(&inputs).unwrap(),
            input,
            "blend of a single input is the identity"
        );
    }

    #[test]
    fn apply_checks_arity() {
        let input = sample();
        let two = [input.clone(), input.clone()];
        assert!(matches!(
            Operation::Blur.apply(&two),
            Err(PictureError::InvalidArgument(_))
        ));
        assert!(matches!(
            Operation::Invert.apply(&[]),
            Err(PictureError::InvalidArgument(_))
        ));
        assert!(matches!(
            Operation::Blend.apply(&[]),
            Err(PictureError::InvalidArgument(_))
        ));
        assert!(Operation::Mosaic { tile_size: 1 }.apply(&two).is_ok());
    }
}
