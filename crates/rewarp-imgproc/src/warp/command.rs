use std::str::FromStr;

use super::matrix::AffineMatrix;
use crate::error::WarpError;

/// The kind of an elementary transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// Scale by `(a, b)`, tagged `S`.
    Scale,
    /// Rotate about the origin by `a` degrees, tagged `R`.
    Rotate,
    /// Translate by `(a, b)`, tagged `T`.
    Translate,
}

impl FromStr for TransformKind {
    type Err = WarpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(TransformKind::Scale),
            "R" => Ok(TransformKind::Rotate),
            "T" => Ok(TransformKind::Translate),
            _ => Err(WarpError::InvalidCommandKind(s.to_string())),
        }
    }
}

/// One elementary transform with its two parameters.
///
/// For [`TransformKind::Rotate`], `a` is the angle in degrees and `b` is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformCommand {
    /// The transform kind.
    pub kind: TransformKind,
    /// First parameter.
    pub a: f32,
    /// Second parameter.
    pub b: f32,
}

impl TransformCommand {
    /// Scale command.
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            kind: TransformKind::Scale,
            a: sx,
            b: sy,
        }
    }

    /// Rotation command, `angle` in degrees.
    pub fn rotate(angle: f32) -> Self {
        Self {
            kind: TransformKind::Rotate,
            a: angle,
            b: 0.0,
        }
    }

    /// Translation command.
    pub fn translate(dx: f32, dy: f32) -> Self {
        Self {
            kind: TransformKind::Translate,
            a: dx,
            b: dy,
        }
    }

    /// Builds a command from its textual tag and parameters.
    ///
    /// # Errors
    ///
    /// Returns [`WarpError::InvalidCommandKind`] if `tag` is not `S`, `R` or `T`.
    pub fn from_parts(tag: &str, a: f32, b: f32) -> Result<Self, WarpError> {
        Ok(Self {
            kind: tag.parse()?,
            a,
            b,
        })
    }

    /// The elementary matrix of the command.
    pub fn matrix(&self) -> AffineMatrix {
        match self.kind {
            TransformKind::Scale => AffineMatrix::from_scale(self.a, self.b),
            TransformKind::Rotate => AffineMatrix::from_rotation(self.a),
            TransformKind::Translate => AffineMatrix::from_translation(self.a, self.b),
        }
    }
}

/// Composes the commands into one matrix, applying them in list order.
///
/// The result is `M_last · … · M_2 · M_1`, so the first command acts on a source point
/// first. An empty list yields the identity.
///
/// # Example
///
/// ```
/// use rewarp_imgproc::warp::{compile_transform, TransformCommand};
///
/// let m = compile_transform(&[
///     TransformCommand::scale(2.0, 2.0),
///     TransformCommand::translate(1.0, 0.0),
/// ]);
///
/// assert_eq!(m.transform_point(1.0, 1.0), (3.0, 2.0));
/// ```
pub fn compile_transform(commands: &[TransformCommand]) -> AffineMatrix {
    match commands {
        [] => AffineMatrix::IDENTITY,
        [single] => single.matrix(),
        [first, rest @ ..] => rest
            .iter()
            .fold(first.matrix(), |acc, cmd| acc.then(&cmd.matrix())),
    }
}

fn parse_param(token: &str, line: usize) -> Result<f32, WarpError> {
    token
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| WarpError::InvalidParameter {
            line,
            value: token.to_string(),
        })
}

/// Parses a transform script made of `<KIND> <a> <b>` lines.
///
/// Tokens are whitespace separated and blank lines are skipped.
///
/// # Errors
///
/// * [`WarpError::InvalidCommandLine`] if a line does not have exactly three tokens.
/// * [`WarpError::InvalidCommandKind`] if the kind is not `S`, `R` or `T`.
/// * [`WarpError::InvalidParameter`] if a parameter is not a finite number.
pub fn parse_transform_script(text: &str) -> Result<Vec<TransformCommand>, WarpError> {
    let mut commands = Vec::new();

    for (idx, content) in text.lines().enumerate() {
        let line = idx + 1;
        let tokens = content.split_whitespace().collect::<Vec<_>>();
        match tokens.as_slice() {
            [] => continue,
            [tag, a, b] => {
                // the kind is checked before the parameters
                let kind = tag.parse::<TransformKind>()?;
                commands.push(TransformCommand {
                    kind,
                    a: parse_param(a, line)?,
                    b: parse_param(b, line)?,
                });
            }
            _ => {
                return Err(WarpError::InvalidCommandLine {
                    line,
                    content: content.to_string(),
                })
            }
        }
    }

    Ok(commands)
}
