use std::path::Path;

use log::debug;
use rewarp_imgproc::warp::{parse_transform_script, TransformCommand};

use crate::error::IoError;

/// Reads a transform script from the given file path.
///
/// Each non-blank line holds `<KIND> <a> <b>` with `KIND` one of `S`, `R` or `T`.
///
/// # Arguments
///
/// * `file_path` - The path to the transform script.
///
/// # Returns
///
/// The commands in file order.
pub fn read_transform_script(
    file_path: impl AsRef<Path>,
) -> Result<Vec<TransformCommand>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let text = std::fs::read_to_string(&file_path)?;
    let commands = parse_transform_script(&text)
        .map_err(|e| IoError::TransformScriptError(file_path.clone(), e))?;
    debug!("read {} commands from {:?}", commands.len(), file_path);

    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewarp_imgproc::WarpError;

    #[test]
    fn read_script() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("transforms.txt");
        std::fs::write(&file_path, "S 2 2\nR 90 0\n\nT 1 -1\n")?;

        let commands = read_transform_script(&file_path)?;
        assert_eq!(
            commands,
            vec![
                TransformCommand::scale(2.0, 2.0),
                TransformCommand::rotate(90.0),
                TransformCommand::translate(1.0, -1.0),
            ]
        );
        Ok(())
    }

    #[test]
    fn read_script_invalid_kind() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("bad.txt");
        std::fs::write(&file_path, "K 1 1\n")?;

        let res = read_transform_script(&file_path);
        assert!(matches!(
            res,
            Err(IoError::TransformScriptError(_, WarpError::InvalidCommandKind(ref k))) if k == "K"
        ));
        Ok(())
    }

    #[test]
    fn read_script_missing() {
        assert!(matches!(
            read_transform_script("no/such/script.txt"),
            Err(IoError::FileDoesNotExist(_))
        ));
    }
}
